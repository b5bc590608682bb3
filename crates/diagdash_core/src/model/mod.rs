mod color;
mod fixture;
mod record;

pub use color::HexColor;
pub use fixture::prediction_metrics;
pub use record::MetricRecord;

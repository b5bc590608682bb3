//! User-facing configuration: key bindings and metrics files.

pub mod keybindings;
pub mod metrics_file;

pub use keybindings::{DashboardAction, KeybindingsConfig};
pub use metrics_file::{MetricsFileError, metrics_to_yaml, parse_metrics};
#[cfg(feature = "native")]
pub use metrics_file::load_metrics;

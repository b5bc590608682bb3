//! Built-in metrics shown when no file is supplied

use super::{HexColor, MetricRecord};

/// The five published model results, in display order.
pub fn prediction_metrics() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new(
            "Parkinson's Disease",
            94.2,
            1196,
            "Random Forest",
            HexColor::from_u32(0x4C51BF),
        )
        .with_features(22),
        MetricRecord::new("Pneumonia", 92.8, 700, "XGBoost", HexColor::from_u32(0x48BB78)),
        MetricRecord::new("COPD", 89.5, 1500, "GRU", HexColor::from_u32(0xED8936)),
        MetricRecord::new("URTI", 88.7, 1000, "GRU", HexColor::from_u32(0x9F7AEA)),
        MetricRecord::new("Bronchitis", 91.3, 892, "CNN", HexColor::from_u32(0xF56565)),
    ]
}

//! One row of disease prediction performance data

use serde::{Deserialize, Serialize};

use super::HexColor;

/// Performance metrics for one disease-prediction model.
///
/// Records are value objects: the dashboard only ever reads them, and their
/// order in a slice is the left-to-right order of the chart categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Disease name, also the chart category label. Unique within a list.
    pub disease: String,
    /// Prediction accuracy as a percentage in [0, 100]
    pub accuracy: f64,
    /// Number of dataset samples
    pub samples: u32,
    /// Number of input features, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<u32>,
    /// Name of the predictive model
    pub model: String,
    /// Accent color for this record
    pub color: HexColor,
}

impl MetricRecord {
    pub fn new(
        disease: impl Into<String>,
        accuracy: f64,
        samples: u32,
        model: impl Into<String>,
        color: HexColor,
    ) -> Self {
        Self {
            disease: disease.into(),
            accuracy,
            samples,
            features: None,
            model: model.into(),
            color,
        }
    }

    #[must_use]
    pub fn with_features(mut self, features: u32) -> Self {
        self.features = Some(features);
        self
    }
}

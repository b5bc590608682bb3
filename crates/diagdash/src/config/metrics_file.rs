//! YAML metrics files
//!
//! A metrics file replaces the built-in records:
//!
//! ```yaml
//! records:
//!   - disease: "Parkinson's Disease"
//!     accuracy: 94.2
//!     samples: 1196
//!     features: 22
//!     model: Random Forest
//!     color: "#4C51BF"
//! ```

#[cfg(feature = "native")]
use std::path::Path;

use diagdash_core::{MetricRecord, RecordError, validate_records};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MetricsFile {
    records: Vec<MetricRecord>,
}

/// Error types for metrics file operations
#[derive(Debug)]
pub enum MetricsFileError {
    Io(String),
    Parse(String),
    Serialize(String),
    Invalid(RecordError),
}

impl std::fmt::Display for MetricsFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsFileError::Io(msg) => write!(f, "IO error: {}", msg),
            MetricsFileError::Parse(msg) => write!(f, "Parse error: {}", msg),
            MetricsFileError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            MetricsFileError::Invalid(err) => write!(f, "Invalid metrics: {}", err),
        }
    }
}

impl std::error::Error for MetricsFileError {}

impl From<RecordError> for MetricsFileError {
    fn from(err: RecordError) -> Self {
        MetricsFileError::Invalid(err)
    }
}

/// Parse and validate the records in a metrics document.
pub fn parse_metrics(yaml: &str) -> Result<Vec<MetricRecord>, MetricsFileError> {
    let file: MetricsFile =
        serde_saphyr::from_str(yaml).map_err(|e| MetricsFileError::Parse(e.to_string()))?;
    validate_records(&file.records)?;
    Ok(file.records)
}

/// Render records as a metrics document that `parse_metrics` accepts.
pub fn metrics_to_yaml(records: &[MetricRecord]) -> Result<String, MetricsFileError> {
    let file = MetricsFile {
        records: records.to_vec(),
    };
    serde_saphyr::to_string(&file).map_err(|e| MetricsFileError::Serialize(e.to_string()))
}

/// Read, parse and validate a metrics file.
#[cfg(feature = "native")]
pub fn load_metrics(path: &Path) -> Result<Vec<MetricRecord>, MetricsFileError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| MetricsFileError::Io(format!("{}: {}", path.display(), e)))?;
    let records = parse_metrics(&content)?;
    tracing::info!(
        path = %path.display(),
        count = records.len(),
        "Loaded metrics file"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagdash_core::prediction_metrics;

    const COPD_ONLY: &str = r##"records:
  - disease: COPD
    accuracy: 89.5
    samples: 1500
    model: GRU
    color: "#ED8936"
"##;

    #[test]
    fn test_parse_single_record() {
        let records = parse_metrics(COPD_ONLY).unwrap();
        assert_eq!(records, vec![prediction_metrics()[2].clone()]);
        assert_eq!(records[0].features, None);
    }

    #[test]
    fn test_builtin_records_survive_yaml() {
        let yaml = metrics_to_yaml(&prediction_metrics()).unwrap();
        assert_eq!(parse_metrics(&yaml).unwrap(), prediction_metrics());
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let yaml = COPD_ONLY.replace("#ED8936", "orange");
        assert!(matches!(
            parse_metrics(&yaml),
            Err(MetricsFileError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_accuracy_is_invalid() {
        let yaml = COPD_ONLY.replace("89.5", "189.5");
        assert!(matches!(
            parse_metrics(&yaml),
            Err(MetricsFileError::Invalid(RecordError::AccuracyOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_empty_list_is_invalid() {
        assert!(matches!(
            parse_metrics("records: []\n"),
            Err(MetricsFileError::Invalid(RecordError::Empty))
        ));
    }

    #[test]
    fn test_negative_samples_rejected() {
        let yaml = COPD_ONLY.replace("1500", "-3");
        assert!(matches!(
            parse_metrics(&yaml),
            Err(MetricsFileError::Parse(_))
        ));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_load_metrics_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.yaml");
        std::fs::write(&path, COPD_ONLY).unwrap();

        let records = load_metrics(&path).unwrap();
        assert_eq!(records.len(), 1);

        let missing = load_metrics(&dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(MetricsFileError::Io(_))));
    }
}

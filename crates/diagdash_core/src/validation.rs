//! Shape and range checks for records that come from outside the binary

use rustc_hash::FxHashSet;

use crate::error::RecordError;
use crate::model::MetricRecord;

/// Check that a record list can be shown by the dashboard.
///
/// Stops at the first problem, in list order.
pub fn validate_records(records: &[MetricRecord]) -> Result<(), RecordError> {
    if records.is_empty() {
        return Err(RecordError::Empty);
    }

    let mut seen = FxHashSet::default();
    for (index, record) in records.iter().enumerate() {
        let disease = record.disease.trim();
        if disease.is_empty() {
            return Err(RecordError::EmptyDisease { index });
        }
        if !seen.insert(disease) {
            return Err(RecordError::DuplicateDisease(disease.to_string()));
        }
        if !record.accuracy.is_finite() || !(0.0..=100.0).contains(&record.accuracy) {
            return Err(RecordError::AccuracyOutOfRange {
                disease: record.disease.clone(),
                value: record.accuracy,
            });
        }
        if record.model.trim().is_empty() {
            return Err(RecordError::EmptyModel {
                disease: record.disease.clone(),
            });
        }
    }

    Ok(())
}

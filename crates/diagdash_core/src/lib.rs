//! Disease prediction metrics model
//!
//! This crate holds everything the dashboard needs that does not touch a terminal:
//! - `MetricRecord` and its typed color token
//! - The built-in five-record fixture
//! - Validation of externally supplied records
//! - Fixed axis domains and linear scaling for the dual-axis chart
//! - Chart and card models derived from a record slice
//! - Responsive grid breakpoints and value formatting
//!
//! The view layer is a pure function of `&[MetricRecord]`:
//!
//! ```ignore
//! use diagdash_core::{ChartModel, card_for, prediction_metrics};
//!
//! let records = prediction_metrics();
//! let chart = ChartModel::from_records(&records);
//! let cards: Vec<_> = records.iter().map(card_for).collect();
//! assert_eq!(chart.categories.len(), cards.len());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cards;
pub mod chart;
pub mod error;
pub mod format;
pub mod scale;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use cards::{Card, CardRow, FEATURES_LABEL, GridBreakpoints, card_for};
pub use chart::{
    ACCURACY_SERIES, CategoryBars, ChartModel, DASHBOARD_TITLE, SAMPLES_SERIES, SERIES, SeriesSpec,
};
pub use error::RecordError;
pub use model::{HexColor, MetricRecord, prediction_metrics};
pub use scale::{ACCURACY_AXIS, AxisDomain, SAMPLES_AXIS, TICK_INTERVALS};
pub use validation::validate_records;

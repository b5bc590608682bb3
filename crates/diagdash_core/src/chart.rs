//! Chart model for the dual-axis bar chart
//!
//! Turns a record slice into per-category bar positions. Each category carries
//! two bars: accuracy against the left axis and sample count against the right.

use crate::format::{format_accuracy, format_count};
use crate::model::{HexColor, MetricRecord};
use crate::scale::{ACCURACY_AXIS, AxisDomain, SAMPLES_AXIS};

pub const DASHBOARD_TITLE: &str = "Disease Prediction Performance Metrics";

/// One bar series and the axis it is plotted against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSpec {
    pub name: &'static str,
    pub fill: HexColor,
    pub axis: AxisDomain,
}

pub const ACCURACY_SERIES: SeriesSpec = SeriesSpec {
    name: "Accuracy (%)",
    fill: HexColor::from_u32(0x4C51BF),
    axis: ACCURACY_AXIS,
};

pub const SAMPLES_SERIES: SeriesSpec = SeriesSpec {
    name: "Dataset Samples",
    fill: HexColor::from_u32(0x48BB78),
    axis: SAMPLES_AXIS,
};

/// Both series in legend and drawing order.
pub const SERIES: [SeriesSpec; 2] = [ACCURACY_SERIES, SAMPLES_SERIES];

/// Bars for one category on the horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBars {
    pub label: String,
    pub color: HexColor,
    pub accuracy: f64,
    pub samples: u32,
}

impl CategoryBars {
    /// Accuracy bar height as a fraction of the plot.
    pub fn accuracy_fraction(&self) -> f64 {
        ACCURACY_SERIES.axis.fraction(self.accuracy)
    }

    /// Samples bar height as a fraction of the plot.
    pub fn samples_fraction(&self) -> f64 {
        SAMPLES_SERIES.axis.fraction(f64::from(self.samples))
    }

    /// Bar heights in eighths of a cell, in series order.
    pub fn bar_eighths(&self, rows: usize) -> [usize; 2] {
        [
            ACCURACY_SERIES.axis.eighths(self.accuracy, rows),
            SAMPLES_SERIES.axis.eighths(f64::from(self.samples), rows),
        ]
    }
}

/// Everything the chart renderer needs, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartModel {
    pub categories: Vec<CategoryBars>,
}

impl ChartModel {
    pub fn from_records(records: &[MetricRecord]) -> Self {
        let categories = records
            .iter()
            .map(|record| CategoryBars {
                label: record.disease.clone(),
                color: record.color,
                accuracy: record.accuracy,
                samples: record.samples,
            })
            .collect();
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Tooltip title and `(series name, value)` entries for a category.
    pub fn tooltip(&self, index: usize) -> Option<(&str, [(&'static str, String); 2])> {
        let category = self.categories.get(index)?;
        Some((
            category.label.as_str(),
            [
                (ACCURACY_SERIES.name, accuracy_value(category.accuracy)),
                (SAMPLES_SERIES.name, format_count(category.samples)),
            ],
        ))
    }
}

/// Accuracy without the trailing percent sign, the series name already says `%`.
fn accuracy_value(accuracy: f64) -> String {
    let mut text = format_accuracy(accuracy);
    text.pop();
    text
}

//! Card model for the detail grid

use crate::format::{format_accuracy, format_count};
use crate::model::{HexColor, MetricRecord};

pub const FEATURES_LABEL: &str = "Features:";

/// One `label  value` line inside a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
}

/// Detail card for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub accent: HexColor,
    pub rows: Vec<CardRow>,
}

/// Build the card for a record. The features row only exists when the record has one.
pub fn card_for(record: &MetricRecord) -> Card {
    let mut rows = vec![
        CardRow {
            label: "Accuracy:",
            value: format_accuracy(record.accuracy),
        },
        CardRow {
            label: "Samples:",
            value: format_count(record.samples),
        },
        CardRow {
            label: "Model:",
            value: record.model.clone(),
        },
    ];
    if let Some(features) = record.features {
        rows.push(CardRow {
            label: FEATURES_LABEL,
            value: format_count(features),
        });
    }

    Card {
        title: record.disease.clone(),
        accent: record.color,
        rows,
    }
}

/// Width thresholds (in terminal columns) for the responsive card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBreakpoints {
    /// Two columns from this width
    pub medium: u16,
    /// Three columns from this width
    pub large: u16,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            medium: 80,
            large: 120,
        }
    }
}

impl GridBreakpoints {
    pub fn columns(&self, width: u16) -> usize {
        if width >= self.large {
            3
        } else if width >= self.medium {
            2
        } else {
            1
        }
    }
}

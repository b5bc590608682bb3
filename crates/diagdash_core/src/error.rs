use std::fmt;

/// Reasons a list of metric records cannot be displayed
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The list has no records
    Empty,
    /// A record has a blank disease name
    EmptyDisease { index: usize },
    /// Two records share a disease name
    DuplicateDisease(String),
    /// Accuracy is not a finite percentage in [0, 100]
    AccuracyOutOfRange { disease: String, value: f64 },
    /// A record has a blank model name
    EmptyModel { disease: String },
    /// A color token is not `#RRGGBB`
    InvalidColor(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Empty => write!(f, "no metric records to display"),
            RecordError::EmptyDisease { index } => {
                write!(f, "record {index} has an empty disease name")
            }
            RecordError::DuplicateDisease(name) => {
                write!(f, "disease {name:?} appears more than once")
            }
            RecordError::AccuracyOutOfRange { disease, value } => {
                write!(f, "accuracy {value} for {disease:?} is outside [0, 100]")
            }
            RecordError::EmptyModel { disease } => {
                write!(f, "record {disease:?} has an empty model name")
            }
            RecordError::InvalidColor(value) => {
                write!(f, "color {value:?} is not of the form #RRGGBB")
            }
        }
    }
}

impl std::error::Error for RecordError {}

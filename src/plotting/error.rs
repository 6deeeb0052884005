//! Error types for chart construction and rendering.

use std::fmt;
use std::io;

/// The main error type for plotting operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Malformed JSON in a config or data file
    Json(serde_json::Error),
    /// A record lacks a column the chart reads
    MissingColumn { column: String, index: usize },
    /// A numeric column holds a value that does not parse as a number
    NonNumeric {
        column: String,
        index: usize,
        value: String,
    },
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// A page position with no chart at it
    NoChartAt(usize),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::Json(err) => write!(f, "JSON error: {}", err),
            PlotError::MissingColumn { column, index } => {
                write!(f, "Record {} has no value for column '{}'", index, column)
            }
            PlotError::NonNumeric {
                column,
                index,
                value,
            } => write!(
                f,
                "Record {} column '{}' is not numeric: {:?}",
                index, column, value
            ),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::NoChartAt(position) => write!(f, "No chart at position {}", position),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            PlotError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::Json(err)
    }
}

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;

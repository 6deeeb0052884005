//! Scatter chart: column selection, scales and marks.

mod scales;
mod scatter;

pub use scales::{CANVAS_SIZE, ChartScales, DEFAULT_MARGIN, RADIUS_RANGE};
pub use scatter::{ChartOptions, RecordFormatter, ScatterChart, fields_formatter};

use serde::{Deserialize, Serialize};

use crate::plotting::registry::ChartId;
use crate::plotting::style::Color;

/// Column names the chart reads from each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    /// Horizontal position
    pub x: String,
    /// Vertical position
    pub y: String,
    /// Bubble size
    pub r: String,
    /// Category used for color and legend
    pub color: String,
}

impl Columns {
    pub fn new(
        x: impl Into<String>,
        y: impl Into<String>,
        r: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Columns {
            x: x.into(),
            y: y.into(),
            r: r.into(),
            color: color.into(),
        }
    }
}

/// Identity of a drawn mark: which chart, which record, which category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkId {
    pub chart: ChartId,
    pub index: usize,
    pub category: String,
}

/// One positioned circle per record.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub id: MarkId,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Color,
}

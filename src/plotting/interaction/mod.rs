//! Pointer and click handling for a chart.
//!
//! Handlers are plain functions over a [`HandlerContext`]; all state they
//! change lives in the shared [`ChartRegistry`], except the in-progress brush
//! gesture which the [`BrushController`] owns.

pub mod legend;
pub mod selection;

pub use legend::{LegendController, mark_opacity, swatch_style, toggle_category};
pub use selection::{
    BrushController, BrushState, NO_SELECTION_MESSAGE, SelectionOutcome, brush_start,
    brush_update, clear, data_rect, matching_marks,
};

use crate::plotting::data::Record;
use crate::plotting::plot::{ChartScales, Columns};
use crate::plotting::registry::{ChartId, ChartRegistry};

/// Everything a handler needs to know about the chart it runs for.
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub chart: ChartId,
    pub scales: &'a ChartScales,
    pub records: &'a [Record],
    pub columns: &'a Columns,
    pub registry: &'a ChartRegistry,
    /// Turns a selected record into its list line
    pub formatter: &'a dyn Fn(&Record) -> String,
}

impl<'a> HandlerContext<'a> {
    pub fn new(
        chart: ChartId,
        scales: &'a ChartScales,
        records: &'a [Record],
        columns: &'a Columns,
        registry: &'a ChartRegistry,
        formatter: &'a dyn Fn(&Record) -> String,
    ) -> Self {
        HandlerContext {
            chart,
            scales,
            records,
            columns,
            registry,
            formatter,
        }
    }
}

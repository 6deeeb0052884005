//! Rectangular brush selection.
//!
//! A gesture runs Idle -> Dragging -> Idle. While dragging, the pixel region
//! between the anchor and the pointer is inverted into a data rectangle and
//! every mark on the page whose own record lies inside it is flagged.

use indexmap::IndexSet;
use log::{debug, info};

use super::HandlerContext;
use crate::plotting::element::Bounds;
use crate::plotting::registry::ChartId;

/// List line published when a brush matches nothing.
pub const NO_SELECTION_MESSAGE: &str = "No points selected";

/// Result of a selection handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Flags and list were cleared
    Cleared,
    /// A region was applied but matched no record
    Empty,
    /// Record indices matched, in first-match order
    Selected(Vec<usize>),
}

/// Brush start: a degenerate region clears the page selection.
pub fn brush_start(ctx: &HandlerContext<'_>, region: &Bounds) -> SelectionOutcome {
    if region.is_degenerate() {
        clear(ctx)
    } else {
        brush_update(ctx, region)
    }
}

/// Apply a pixel region: flag matching records and publish the list.
pub fn brush_update(ctx: &HandlerContext<'_>, region: &Bounds) -> SelectionOutcome {
    if region.is_degenerate() {
        return clear(ctx);
    }

    let rect = data_rect(ctx, region);
    let marks = matching_marks(ctx, &rect);

    for (chart, index) in ctx.registry.selected_marks() {
        if !marks.contains(&(chart, index)) {
            ctx.registry.set_record_selected(chart, index, false);
        }
    }
    for &(chart, index) in &marks {
        ctx.registry.set_record_selected(chart, index, true);
    }

    let matches: IndexSet<usize> = marks.iter().map(|(_, index)| *index).collect();

    if matches.is_empty() {
        debug!("{}: brush matched no records", ctx.chart);
        ctx.registry
            .publish_selection_list(vec![NO_SELECTION_MESSAGE.to_string()]);
        return SelectionOutcome::Empty;
    }

    let lines = matches
        .iter()
        .filter_map(|&i| ctx.records.get(i))
        .map(|record| (ctx.formatter)(record))
        .collect();
    ctx.registry.publish_selection_list(lines);
    info!("{}: {} records selected", ctx.chart, matches.len());
    SelectionOutcome::Selected(matches.into_iter().collect())
}

/// Unflag every record on the page and empty the list.
pub fn clear(ctx: &HandlerContext<'_>) -> SelectionOutcome {
    ctx.registry.clear_selection();
    ctx.registry.publish_selection_list(Vec::new());
    debug!("{}: selection cleared", ctx.chart);
    SelectionOutcome::Cleared
}

/// Invert a pixel region into the data rectangle it covers.
///
/// The top pixel edge maps to the largest y value, since the y range is flipped.
pub fn data_rect(ctx: &HandlerContext<'_>, region: &Bounds) -> Bounds {
    let (x1, y1) = ctx.scales.invert(region.x_min, region.y_min);
    let (x2, y2) = ctx.scales.invert(region.x_max, region.y_max);
    Bounds::from_points(x1, y1, x2, y2)
}

/// Marks whose record lies inside `rect`, tested across every chart on the page.
///
/// Each chart's records are read with this chart's x/y columns. Records
/// lacking a numeric value for either column never match.
pub fn matching_marks(ctx: &HandlerContext<'_>, rect: &Bounds) -> IndexSet<(ChartId, usize)> {
    let mut matches = IndexSet::new();
    for (chart, records) in ctx.registry.members() {
        for (index, record) in records.iter().enumerate() {
            let (Some(x), Some(y)) = (
                record.number(&ctx.columns.x),
                record.number(&ctx.columns.y),
            ) else {
                continue;
            };
            if rect.contains(x, y) {
                matches.insert((chart, index));
            }
        }
    }
    matches
}

/// State of the brush gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BrushState {
    #[default]
    Idle,
    Dragging {
        /// Pointer-down position
        anchor: (f64, f64),
        /// Current region, clamped to the plot area
        region: Bounds,
    },
}

/// Per-chart brush gesture tracker.
#[derive(Debug, Clone, Default)]
pub struct BrushController {
    state: BrushState,
}

impl BrushController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BrushState {
        &self.state
    }

    /// Region being dragged, if any.
    pub fn region(&self) -> Option<Bounds> {
        match self.state {
            BrushState::Idle => None,
            BrushState::Dragging { region, .. } => Some(region),
        }
    }

    /// Begin a gesture. Presses outside the plot area are ignored.
    pub fn pointer_down(
        &mut self,
        ctx: &HandlerContext<'_>,
        x: f64,
        y: f64,
    ) -> Option<SelectionOutcome> {
        let extent = ctx.scales.plot_area();
        if !extent.contains(x, y) {
            debug!("{}: pointer down outside plot area at ({}, {})", ctx.chart, x, y);
            return None;
        }
        let region = Bounds::from_points(x, y, x, y);
        self.state = BrushState::Dragging {
            anchor: (x, y),
            region,
        };
        Some(brush_start(ctx, &region))
    }

    /// Extend the region to the pointer. No effect while idle.
    pub fn pointer_move(
        &mut self,
        ctx: &HandlerContext<'_>,
        x: f64,
        y: f64,
    ) -> Option<SelectionOutcome> {
        let BrushState::Dragging { anchor, .. } = self.state else {
            return None;
        };
        let (px, py) = ctx.scales.plot_area().clamp_point(x, y);
        let region = Bounds::from_points(anchor.0, anchor.1, px, py);
        self.state = BrushState::Dragging { anchor, region };
        Some(brush_update(ctx, &region))
    }

    /// Apply the final region and return to idle.
    pub fn pointer_up(
        &mut self,
        ctx: &HandlerContext<'_>,
        x: f64,
        y: f64,
    ) -> Option<SelectionOutcome> {
        let outcome = self.pointer_move(ctx, x, y);
        self.state = BrushState::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::data::Record;
    use crate::plotting::plot::{ChartScales, Columns};
    use crate::plotting::registry::ChartRegistry;
    use std::rc::Rc;

    fn record(model: &str, x: f64, y: f64) -> Record {
        Record::new()
            .with("Model", model)
            .with("x", x)
            .with("y", y)
            .with("r", 1.0)
            .with("Type", "t")
    }

    fn diagonal() -> Vec<Record> {
        vec![
            record("a", 0.0, 0.0),
            record("b", 5.0, 5.0),
            record("c", 10.0, 10.0),
        ]
    }

    fn columns() -> Columns {
        Columns::new("x", "y", "r", "Type")
    }

    fn model(record: &Record) -> String {
        record.text("Model").unwrap_or_default()
    }

    #[test]
    fn test_inclusive_rectangle() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let matches = matching_marks(&ctx, &Bounds::new(0.0, 5.0, 0.0, 5.0));
        assert_eq!(matches.into_iter().collect::<Vec<_>>(), vec![(id, 0), (id, 1)]);
    }

    #[test]
    fn test_data_rect_flips_y() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let (px, py) = scales.position(5.5, 5.5);
        let rect = data_rect(&ctx, &Bounds::new(50.0, px, py, 950.0));
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(5.0, 5.0));
        assert!(!rect.contains(10.0, 10.0));
    }

    #[test]
    fn test_drag_selects_and_lists() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let (x_hi, y_hi) = scales.position(6.0, 6.0);
        let mut brush = BrushController::new();
        assert_eq!(brush.pointer_down(&ctx, 60.0, 940.0), Some(SelectionOutcome::Cleared));
        let outcome = brush.pointer_up(&ctx, x_hi, y_hi);
        assert_eq!(outcome, Some(SelectionOutcome::Selected(vec![0, 1])));
        assert_eq!(brush.state(), &BrushState::Idle);
        assert_eq!(registry.selected_records(), vec![0, 1]);
        assert_eq!(registry.selection_list(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_region_publishes_placeholder() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let (x_lo, y_lo) = scales.position(6.0, 6.0);
        let (x_hi, y_hi) = scales.position(9.0, 9.0);
        let region = Bounds::from_points(x_lo, y_lo, x_hi, y_hi);
        assert_eq!(brush_update(&ctx, &region), SelectionOutcome::Empty);
        assert_eq!(registry.selection_list(), vec![NO_SELECTION_MESSAGE.to_string()]);
        assert!(registry.selected_records().is_empty());
    }

    #[test]
    fn test_degenerate_drag_clears() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        brush_update(&ctx, &Bounds::new(50.0, 950.0, 50.0, 950.0));
        assert_eq!(registry.selected_records(), vec![0, 1, 2]);

        let mut brush = BrushController::new();
        brush.pointer_down(&ctx, 300.0, 300.0);
        // zero height
        assert_eq!(brush.pointer_up(&ctx, 400.0, 300.0), Some(SelectionOutcome::Cleared));
        assert!(registry.selected_records().is_empty());
        assert!(registry.selection_list().is_empty());
    }

    #[test]
    fn test_same_index_listed_once_across_charts() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let outcome = brush_update(&ctx, &Bounds::new(50.0, 950.0, 50.0, 950.0));
        assert_eq!(outcome, SelectionOutcome::Selected(vec![0, 1, 2]));
        assert_eq!(registry.selection_list().len(), 3);
        assert_eq!(registry.selected_marks().len(), 6);
    }

    #[test]
    fn test_other_chart_flags_follow_its_own_records() {
        let records = vec![record("a", 0.0, 0.0), record("b", 10.0, 10.0)];
        let far = vec![record("z", 100.0, 100.0), record("y", 0.5, 0.5)];
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let other = registry.register_member(Rc::from(far));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let (x0, y0) = scales.position(-0.4, 1.0);
        let (x1, y1) = scales.position(1.0, -0.4);
        let outcome = brush_update(&ctx, &Bounds::from_points(x0, y0, x1, y1));
        assert_eq!(outcome, SelectionOutcome::Selected(vec![0, 1]));
        assert!(registry.is_record_selected(id, 0));
        assert!(!registry.is_record_selected(id, 1));
        assert!(!registry.is_record_selected(other, 0));
        assert!(registry.is_record_selected(other, 1));
    }

    #[test]
    fn test_pointer_clamped_and_outside_ignored() {
        let records = diagonal();
        let registry = ChartRegistry::new();
        let id = registry.register_member(Rc::from(records.clone()));
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let cols = columns();
        let ctx = HandlerContext::new(id, &scales, &records, &cols, &registry, &model);

        let mut brush = BrushController::new();
        assert_eq!(brush.pointer_down(&ctx, 10.0, 10.0), None);
        assert_eq!(brush.pointer_move(&ctx, 500.0, 500.0), None);

        brush.pointer_down(&ctx, 500.0, 500.0);
        brush.pointer_move(&ctx, 2000.0, -40.0);
        assert_eq!(brush.region(), Some(Bounds::new(500.0, 950.0, 50.0, 500.0)));
    }
}

//! A scatter chart bound to a page registry.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::info;
use serde::{Deserialize, Serialize};

use super::{CANVAS_SIZE, ChartScales, Columns, DEFAULT_MARGIN, Mark, MarkId};
use crate::plotting::data::Record;
use crate::plotting::element::LegendLayout;
use crate::plotting::error::PlotResult;
use crate::plotting::interaction::{
    BrushController, HandlerContext, LegendController, SelectionOutcome,
};
use crate::plotting::registry::{ChartId, ChartRegistry, SubscriptionId};
use crate::plotting::scale::Scale;
use crate::plotting::scene;
use crate::plotting::style::ThemeConfig;

/// Horizontal position of the legend block.
const LEGEND_X: f64 = 800.0;

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

/// Construction parameters of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Element id of the chart; also names its output file
    pub mount: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub columns: Columns,
    /// Legend rows; empty means one row per category in the data
    #[serde(default)]
    pub legend: Vec<String>,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl ChartOptions {
    pub fn new(mount: impl Into<String>, columns: Columns) -> Self {
        ChartOptions {
            mount: mount.into(),
            title: String::new(),
            columns,
            legend: Vec::new(),
            margin: DEFAULT_MARGIN,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn legend(mut self, legend: Vec<String>) -> Self {
        self.legend = legend;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

/// Turns a selected record into a line of the selection list.
pub type RecordFormatter = Rc<dyn Fn(&Record) -> String>;

/// Formatter joining the text of `fields` with `separator`. Missing fields print empty.
pub fn fields_formatter(fields: Vec<String>, separator: impl Into<String>) -> RecordFormatter {
    let separator = separator.into();
    Rc::new(move |record: &Record| {
        fields
            .iter()
            .map(|field| record.text(field).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(&separator)
    })
}

/// An interactive scatter chart.
///
/// The chart registers its records with the registry on construction and
/// leaves it on drop. Any registry change marks the chart stale until it is
/// rendered again.
pub struct ScatterChart {
    id: ChartId,
    options: ChartOptions,
    records: Rc<[Record]>,
    scales: ChartScales,
    marks: Vec<Mark>,
    legend: LegendController,
    brush: BrushController,
    formatter: RecordFormatter,
    registry: ChartRegistry,
    subscription: SubscriptionId,
    stale: Rc<Cell<bool>>,
}

impl ScatterChart {
    /// Validate `records` against the options and build the chart.
    pub fn new(
        registry: &ChartRegistry,
        options: ChartOptions,
        records: impl Into<Rc<[Record]>>,
    ) -> PlotResult<Self> {
        let records = records.into();
        let mut scales = ChartScales::build(&records, &options.columns, options.margin)?;
        scales
            .color
            .extend(options.legend.iter().map(String::as_str));

        let entries: Vec<String> = if options.legend.is_empty() {
            scales.color.domain().iter().map(str::to_string).collect()
        } else {
            options.legend.clone()
        };
        for category in scales.color.domain().iter() {
            registry.ensure_category(category);
        }

        let id = registry.register_member(Rc::clone(&records));
        let marks = project_marks(id, &records, &options.columns, &scales)?;

        let stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&stale);
        let subscription = registry.subscribe(move |_| flag.set(true));

        info!(
            "{} '{}': {} records, {} categories",
            id,
            options.mount,
            records.len(),
            scales.color.domain().len()
        );

        Ok(ScatterChart {
            id,
            legend: LegendController::new(
                LegendLayout::new(LEGEND_X, options.margin).band_width(CANVAS_SIZE - LEGEND_X),
                entries,
            ),
            options,
            records,
            scales,
            marks,
            brush: BrushController::new(),
            formatter: fields_formatter(vec!["Model".to_string(), "Type".to_string()], ", "),
            registry: registry.clone(),
            subscription,
            stale,
        })
    }

    /// Replace the selection list formatter.
    pub fn with_formatter(mut self, formatter: RecordFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn legend(&self) -> &LegendController {
        &self.legend
    }

    pub fn brush(&self) -> &BrushController {
        &self.brush
    }

    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    /// Context handed to this chart's handlers.
    pub fn handler_context(&self) -> HandlerContext<'_> {
        HandlerContext::new(
            self.id,
            &self.scales,
            &self.records,
            &self.options.columns,
            &self.registry,
            &*self.formatter,
        )
    }

    fn brush_parts(&mut self) -> (HandlerContext<'_>, &mut BrushController) {
        let ctx = HandlerContext::new(
            self.id,
            &self.scales,
            &self.records,
            &self.options.columns,
            &self.registry,
            &*self.formatter,
        );
        (ctx, &mut self.brush)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<SelectionOutcome> {
        let (ctx, brush) = self.brush_parts();
        brush.pointer_down(&ctx, x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<SelectionOutcome> {
        let (ctx, brush) = self.brush_parts();
        brush.pointer_move(&ctx, x, y)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<SelectionOutcome> {
        let (ctx, brush) = self.brush_parts();
        brush.pointer_up(&ctx, x, y)
    }

    /// Click on the canvas; toggles the legend row under the pointer.
    pub fn click_legend(&self, x: f64, y: f64) -> Option<(String, bool)> {
        self.legend.click(&self.handler_context(), x, y)
    }

    /// Toggle legend row `row` directly.
    pub fn toggle_legend_entry(&self, row: usize) -> Option<(String, bool)> {
        self.legend.toggle(&self.handler_context(), row)
    }

    /// True when registry state changed since the last render.
    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    pub fn mark_rendered(&self) {
        self.stale.set(false);
    }

    /// Render the chart to an SVG document reflecting current registry state.
    pub fn render_svg(&self, theme: &ThemeConfig) -> String {
        let svg = scene::render(self, theme);
        self.mark_rendered();
        svg
    }
}

impl fmt::Debug for ScatterChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterChart")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("records", &self.records.len())
            .field("scales", &self.scales)
            .field("brush", &self.brush)
            .field("stale", &self.stale.get())
            .finish()
    }
}

impl Drop for ScatterChart {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.subscription);
        self.registry.unregister_member(self.id);
    }
}

/// One mark per record, in record order.
fn project_marks(
    chart: ChartId,
    records: &[Record],
    columns: &Columns,
    scales: &ChartScales,
) -> PlotResult<Vec<Mark>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let x = record.require_number(&columns.x, index)?;
            let y = record.require_number(&columns.y, index)?;
            let size = record.require_number(&columns.r, index)?;
            let category = record.require_text(&columns.color, index)?;
            let (cx, cy) = scales.position(x, y);
            let fill = scales.color.color(&category).cloned().unwrap_or_default();
            Ok(Mark {
                id: MarkId {
                    chart,
                    index,
                    category,
                },
                cx,
                cy,
                r: scales.r.map(size),
                fill,
            })
        })
        .collect()
}

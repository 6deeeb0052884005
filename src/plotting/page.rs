//! A page of charts sharing one registry.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::info;
use serde::Serialize;

use crate::plotting::data::Record;
use crate::plotting::element::escape_xml;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::{ChartOptions, RecordFormatter, ScatterChart};
use crate::plotting::registry::ChartRegistry;
use crate::plotting::style::ThemeConfig;

/// Element id of the page-level selection list.
pub const SELECTION_LIST_ID: &str = "selected-list";

/// Snapshot of page-wide selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    /// Lines of the selection list as published
    pub lines: Vec<String>,
    /// Selected record indices, ascending
    pub indices: Vec<usize>,
    pub hidden_categories: Vec<String>,
}

/// Charts drawn on the same page.
pub struct Page {
    registry: ChartRegistry,
    charts: Vec<ScatterChart>,
    pub theme: ThemeConfig,
}

impl Page {
    pub fn new(theme: ThemeConfig) -> Self {
        Page {
            registry: ChartRegistry::new(),
            charts: Vec::new(),
            theme,
        }
    }

    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    /// Add a chart over `records`. Returns its position on the page.
    pub fn add_chart(
        &mut self,
        options: ChartOptions,
        records: Rc<[Record]>,
        formatter: Option<RecordFormatter>,
    ) -> PlotResult<usize> {
        if self.charts.iter().any(|c| c.options().mount == options.mount) {
            return Err(PlotError::InvalidConfig(format!(
                "Duplicate chart mount '{}'",
                options.mount
            )));
        }
        let mut chart = ScatterChart::new(&self.registry, options, records)?;
        if let Some(formatter) = formatter {
            chart = chart.with_formatter(formatter);
        }
        self.charts.push(chart);
        Ok(self.charts.len() - 1)
    }

    pub fn charts(&self) -> &[ScatterChart] {
        &self.charts
    }

    pub fn chart(&self, position: usize) -> PlotResult<&ScatterChart> {
        self.charts
            .get(position)
            .ok_or(PlotError::NoChartAt(position))
    }

    pub fn chart_mut(&mut self, position: usize) -> PlotResult<&mut ScatterChart> {
        self.charts
            .get_mut(position)
            .ok_or(PlotError::NoChartAt(position))
    }

    pub fn chart_by_mount(&self, mount: &str) -> Option<&ScatterChart> {
        self.charts.iter().find(|c| c.options().mount == mount)
    }

    /// Render every chart, as `(mount, svg)` pairs in page order.
    pub fn render(&self) -> Vec<(String, String)> {
        self.charts
            .iter()
            .map(|c| (c.options().mount.clone(), c.render_svg(&self.theme)))
            .collect()
    }

    /// Charts whose registry state changed since they were last rendered.
    pub fn stale_charts(&self) -> Vec<usize> {
        self.charts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_stale())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary {
            lines: self.registry.selection_list(),
            indices: self.registry.selected_records(),
            hidden_categories: self.registry.hidden_categories(),
        }
    }

    /// The selection list as an HTML fragment.
    pub fn selection_list_html(&self) -> String {
        let mut html = format!("<ul id=\"{}\">", SELECTION_LIST_ID);
        for line in self.registry.selection_list() {
            html.push_str(&format!("<li class=\"listVals\">{}</li>", escape_xml(&line)));
        }
        html.push_str("</ul>");
        html
    }

    /// Write `<prefix>.<mount>.svg` for every chart. Returns the written paths.
    pub fn save(&self, prefix: impl AsRef<Path>) -> PlotResult<Vec<PathBuf>> {
        let prefix = prefix.as_ref();
        let mut written = Vec::with_capacity(self.charts.len());
        for (mount, svg) in self.render() {
            let path = chart_path(prefix, &mount);
            let mut file = File::create(&path)?;
            file.write_all(svg.as_bytes())?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }

    /// Write the selection summary as pretty JSON.
    pub fn save_selection(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, &self.selection_summary())?;
        info!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

/// Output path of a chart's SVG for a given prefix.
pub fn chart_path(prefix: &Path, mount: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}.svg", prefix.display(), mount))
}

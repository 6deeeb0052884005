//! Legend toggles: page-wide category visibility.

use log::info;

use super::HandlerContext;
use crate::plotting::element::{LegendEntry, LegendLayout};
use crate::plotting::registry::ChartRegistry;
use crate::plotting::scale::OrdinalScale;
use crate::plotting::style::{FillStyle, ThemeConfig};

/// Flip a category's visibility on every chart. Returns the new state.
pub fn toggle_category(registry: &ChartRegistry, category: &str) -> bool {
    let visible = !registry.is_category_visible(category);
    registry.set_category_visible(category, visible);
    info!(
        "Category '{}' {}",
        category,
        if visible { "shown" } else { "hidden" }
    );
    visible
}

/// Opacity of a mark in `category`.
pub fn mark_opacity(registry: &ChartRegistry, category: &str, theme: &ThemeConfig) -> f64 {
    if registry.is_category_visible(category) {
        1.0
    } else {
        theme.hidden_opacity
    }
}

/// Swatch fill for `category`: its assigned color while visible, gray while hidden.
pub fn swatch_style(
    registry: &ChartRegistry,
    colors: &OrdinalScale,
    category: &str,
    theme: &ThemeConfig,
) -> FillStyle {
    if !registry.is_category_visible(category) {
        return FillStyle::new(theme.hidden_swatch.clone());
    }
    match colors.color(category) {
        Some(color) => FillStyle::new(color.clone()),
        None => FillStyle::new(theme.hidden_swatch.clone()),
    }
}

/// Legend rows of one chart and where they are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendController {
    layout: LegendLayout,
    entries: Vec<String>,
}

impl LegendController {
    pub fn new(layout: LegendLayout, entries: Vec<String>) -> Self {
        LegendController { layout, entries }
    }

    pub fn layout(&self) -> &LegendLayout {
        &self.layout
    }

    /// Category labels in row order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Toggle the row under a click on its swatch or label.
    ///
    /// Returns the category and its new visibility, or `None` for a miss.
    pub fn click(&self, ctx: &HandlerContext<'_>, x: f64, y: f64) -> Option<(String, bool)> {
        let row = self.layout.hit_test(self.entries.len(), x, y)?;
        self.toggle(ctx, row)
    }

    /// Toggle row `row`.
    pub fn toggle(&self, ctx: &HandlerContext<'_>, row: usize) -> Option<(String, bool)> {
        let category = self.entries.get(row)?;
        let visible = toggle_category(ctx.registry, category);
        Some((category.clone(), visible))
    }

    /// Rows resolved against current registry state.
    pub fn legend_entries(&self, ctx: &HandlerContext<'_>, theme: &ThemeConfig) -> Vec<LegendEntry> {
        self.entries
            .iter()
            .map(|label| LegendEntry {
                label: label.clone(),
                swatch: swatch_style(ctx.registry, &ctx.scales.color, label, theme),
                visible: ctx.registry.is_category_visible(label),
                in_data: ctx
                    .records
                    .iter()
                    .any(|r| r.text(&ctx.columns.color).as_deref() == Some(label.as_str())),
            })
            .collect()
    }
}

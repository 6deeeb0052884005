//! Scene rendering: marks, axes, labels, legend and brush overlay to SVG.

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{AxisConfig, AxisPosition, Text, escape_xml};
use crate::plotting::interaction::mark_opacity;
use crate::plotting::plot::{CANVAS_SIZE, Mark, ScatterChart};
use crate::plotting::registry::ChartRegistry;
use crate::plotting::style::{Color, FillStyle, LineStyle, ThemeConfig};

/// Distance of the x axis label from the bottom edge.
const X_LABEL_INSET: f64 = 10.0;
/// Horizontal position of the rotated y axis label.
const Y_LABEL_X: f64 = 35.0;
const TITLE_Y: f64 = 80.0;

/// Render a chart to a standalone SVG document.
pub fn render(chart: &ScatterChart, theme: &ThemeConfig) -> String {
    let mut backend = SvgBackend::new(CANVAS_SIZE, CANVAS_SIZE)
        .root_attr("id", &chart.options().mount)
        .root_attr("class", "scatterplot");
    backend.fill_background(&theme.background);

    render_marks(&mut backend, chart, theme);
    render_axes(&mut backend, chart, theme);
    render_labels(&mut backend, chart, theme);
    render_legend(&mut backend, chart, theme);
    render_brush(&mut backend, chart);

    backend.render()
}

/// Fill, opacity and outline of a mark under current registry state.
pub fn mark_style(registry: &ChartRegistry, mark: &Mark, theme: &ThemeConfig) -> FillStyle {
    let style = FillStyle::new(mark.fill.clone()).opacity(mark_opacity(
        registry,
        &mark.id.category,
        theme,
    ));
    if registry.is_record_selected(mark.id.chart, mark.id.index) {
        style
            .stroke(theme.selected_stroke.clone())
            .stroke_width(theme.selected_stroke_width)
    } else {
        style
    }
}

fn render_marks(backend: &mut SvgBackend, chart: &ScatterChart, theme: &ThemeConfig) {
    let registry = chart.registry();
    backend.start_group("class=\"marks\"");
    for mark in chart.marks() {
        let class = if registry.is_record_selected(mark.id.chart, mark.id.index) {
            "mark selected"
        } else {
            "mark"
        };
        let attrs = format!(
            "class=\"{}\" data-index=\"{}\" data-category=\"{}\"",
            class,
            mark.id.index,
            escape_xml(&mark.id.category)
        );
        backend.draw_circle(
            mark.cx,
            mark.cy,
            mark.r,
            &mark_style(registry, mark, theme),
            &attrs,
        );
    }
    backend.end_group();
}

fn render_axes(backend: &mut SvgBackend, chart: &ScatterChart, theme: &ThemeConfig) {
    let scales = chart.scales();
    let area = scales.plot_area();
    let line = LineStyle::new().color(theme.axis_color.clone()).crisp();
    AxisConfig::new(AxisPosition::Bottom)
        .line_style(line.clone())
        .tick_label_style(theme.tick_style.clone())
        .render(backend, &scales.x, &area);
    AxisConfig::new(AxisPosition::Left)
        .line_style(line)
        .tick_label_style(theme.tick_style.clone())
        .render(backend, &scales.y, &area);
}

fn render_labels(backend: &mut SvgBackend, chart: &ScatterChart, theme: &ThemeConfig) {
    let options = chart.options();
    let center = CANVAS_SIZE / 2.0;
    backend.draw_text(
        &Text::new(
            options.columns.x.as_str(),
            center,
            CANVAS_SIZE - X_LABEL_INSET,
        )
        .style(theme.label_style.clone()),
    );
    backend.draw_text(
        &Text::new(options.columns.y.as_str(), Y_LABEL_X, center)
            .style(theme.label_style.clone())
            .rotation(270.0),
    );
    if !options.title.is_empty() {
        backend.draw_text(
            &Text::new(options.title.as_str(), center, TITLE_Y).style(theme.title_style.clone()),
        );
    }
}

fn render_legend(backend: &mut SvgBackend, chart: &ScatterChart, theme: &ThemeConfig) {
    let legend = chart.legend();
    let layout = legend.layout();
    let entries = legend.legend_entries(&chart.handler_context(), theme);
    backend.start_group("class=\"legend\"");
    for (i, entry) in entries.iter().enumerate() {
        let (x, y) = layout.row_origin(i);
        let category = escape_xml(&entry.label);
        let class = if entry.visible {
            "legend-rect active"
        } else {
            "legend-rect"
        };
        backend.draw_rect(
            x,
            y,
            layout.swatch_size,
            layout.swatch_size,
            &entry.swatch,
            &format!("class=\"{}\" data-category=\"{}\"", class, category),
        );
        let (lx, ly) = layout.label_position(i);
        backend.draw_text(&Text::new(entry.label.as_str(), lx, ly).style(theme.legend_style.clone()));
    }
    backend.end_group();
}

fn render_brush(backend: &mut SvgBackend, chart: &ScatterChart) {
    let Some(region) = chart.brush().region() else {
        return;
    };
    let style = FillStyle::new(Color::GRAY)
        .opacity(0.3)
        .stroke(Color::WHITE)
        .stroke_width(1.0);
    backend.draw_rect(
        region.x_min,
        region.y_min,
        region.width(),
        region.height(),
        &style,
        "class=\"selection\"",
    );
}

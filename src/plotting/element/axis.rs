//! Axes: tick generation and drawing along the plot area edges.

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{Bounds, Text};
use crate::plotting::scale::Scale;
use crate::plotting::style::{DominantBaseline, LineStyle, TextAnchor, TextStyle};

/// Edge of the plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// An axis: domain line, tick marks and tick labels.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    pub position: AxisPosition,
    pub line_style: LineStyle,
    /// Length of tick marks in pixels, pointing away from the plot
    pub tick_length: f64,
    pub tick_label_style: TextStyle,
    /// Number of ticks to request from the scale
    pub num_ticks: usize,
    /// Gap between a tick mark and its label
    pub tick_padding: f64,
}

impl AxisConfig {
    pub fn new(position: AxisPosition) -> Self {
        AxisConfig {
            position,
            line_style: LineStyle::new().crisp(),
            tick_length: 6.0,
            tick_label_style: TextStyle::new().font_size(14.0),
            num_ticks: 4,
            tick_padding: 3.0,
        }
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Tick label style; anchoring is set by the axis position when drawing.
    pub fn tick_label_style(mut self, style: TextStyle) -> Self {
        self.tick_label_style = style;
        self
    }

    /// Tick values with their pixel positions and labels.
    pub fn ticks(&self, scale: &dyn Scale) -> Vec<(f64, f64, String)> {
        scale
            .ticks(self.num_ticks)
            .into_iter()
            .map(|t| (t, scale.map(t), self.format_tick(t)))
            .collect()
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e6 || value.abs() < 1e-3 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            let s = format!("{:.3}", value);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }

    /// Draw the axis on its edge of `area`.
    pub fn render(&self, backend: &mut SvgBackend, scale: &dyn Scale, area: &Bounds) {
        let ticks = self.ticks(scale);
        match self.position {
            AxisPosition::Bottom => {
                let label_style = self
                    .tick_label_style
                    .clone()
                    .anchor(TextAnchor::Middle)
                    .baseline(DominantBaseline::Hanging);
                let base = area.y_max;
                let tick_end = base + self.tick_length;
                backend.start_group("class=\"axis x-axis\"");
                backend.draw_line(area.x_min, base, area.x_max, base, &self.line_style);
                for (_, px, label) in ticks {
                    backend.draw_line(px, base, px, tick_end, &self.line_style);
                    backend.draw_text(
                        &Text::new(label, px, tick_end + self.tick_padding)
                            .style(label_style.clone()),
                    );
                }
            }
            AxisPosition::Left => {
                let label_style = self
                    .tick_label_style
                    .clone()
                    .anchor(TextAnchor::End)
                    .baseline(DominantBaseline::Middle);
                let base = area.x_min;
                let tick_end = base - self.tick_length;
                backend.start_group("class=\"axis y-axis\"");
                backend.draw_line(base, area.y_min, base, area.y_max, &self.line_style);
                for (_, py, label) in ticks {
                    backend.draw_line(tick_end, py, base, py, &self.line_style);
                    backend.draw_text(
                        &Text::new(label, tick_end - self.tick_padding, py)
                            .style(label_style.clone()),
                    );
                }
            }
        }
        backend.end_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::LinearScale;

    #[test]
    fn test_format_tick() {
        let axis = AxisConfig::new(AxisPosition::Bottom);
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(20.0), "20");
        assert_eq!(axis.format_tick(2.5), "2.5");
        assert_eq!(axis.format_tick(0.25), "0.25");
        assert_eq!(axis.format_tick(2_500_000.0), "2.5e6");
    }

    #[test]
    fn test_ticks_are_positioned_by_scale() {
        let scale = LinearScale::new((-0.5, 10.5), (50.0, 950.0)).unwrap();
        let axis = AxisConfig::new(AxisPosition::Bottom);
        let ticks = axis.ticks(&scale);
        assert_eq!(ticks.len(), 3);
        for (value, px, _) in ticks {
            assert!((px - scale.map(value)).abs() < 1e-12);
            assert!((50.0..=950.0).contains(&px));
        }
    }

    #[test]
    fn test_left_axis_render() {
        let scale = LinearScale::new((-0.5, 10.5), (950.0, 50.0)).unwrap();
        let mut backend = SvgBackend::new(1000.0, 1000.0);
        AxisConfig::new(AxisPosition::Left).render(
            &mut backend,
            &scale,
            &Bounds::new(50.0, 950.0, 50.0, 950.0),
        );
        let svg = backend.render();
        assert!(svg.contains("class=\"axis y-axis\""));
        // domain line plus one mark per tick
        assert_eq!(svg.matches("<line").count(), 4);
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains(">10</text>"));
    }
}

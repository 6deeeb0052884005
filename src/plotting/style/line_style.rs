//! Stroke styling for axis lines and tick marks.

use super::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
    /// Snap to the pixel grid so one-pixel lines stay sharp
    pub crisp: bool,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn crisp(mut self) -> Self {
        self.crisp = true;
        self
    }

    /// SVG stroke attributes.
    pub fn to_svg_attrs(&self) -> String {
        let stroke = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            self.color.to_svg_string(),
            self.width
        );
        if self.crisp {
            format!("{} shape-rendering=\"crispEdges\"", stroke)
        } else {
            stroke
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::BLACK,
            width: 1.0,
            crisp: false,
        }
    }
}

//! Fill styling for marks, swatches and the brush overlay.

use super::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    /// Element opacity, clamped to [0, 1]
    pub opacity: f64,
    /// Outline color; no outline when unset
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl FillStyle {
    pub fn new(color: impl Into<Color>) -> Self {
        FillStyle {
            color: color.into(),
            opacity: 1.0,
            stroke: None,
            stroke_width: 1.0,
        }
    }

    pub fn opacity(self, opacity: f64) -> Self {
        FillStyle {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn stroke(self, color: impl Into<Color>) -> Self {
        FillStyle {
            stroke: Some(color.into()),
            ..self
        }
    }

    pub fn stroke_width(self, stroke_width: f64) -> Self {
        FillStyle {
            stroke_width,
            ..self
        }
    }

    /// SVG presentation attributes. Opacity is always written so toggled
    /// marks differ only in its value.
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = format!(
            "fill=\"{}\" opacity=\"{}\"",
            self.color.to_svg_string(),
            self.opacity
        );
        if let Some(stroke) = &self.stroke {
            attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.to_svg_string(),
                self.stroke_width
            ));
        }
        attrs
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::new(Color::default())
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::new(color)
    }
}

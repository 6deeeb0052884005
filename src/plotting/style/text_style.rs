//! Text styling for titles, axis labels, tick labels and legend labels.

use super::color::Color;

/// Horizontal alignment relative to the text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical alignment relative to the text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DominantBaseline {
    #[default]
    Auto,
    Middle,
    Hanging,
}

impl DominantBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            DominantBaseline::Auto => "auto",
            DominantBaseline::Middle => "middle",
            DominantBaseline::Hanging => "hanging",
        }
    }
}

/// Presentation of one kind of chart text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS class put on the element so a page stylesheet can override it
    pub class: Option<String>,
    /// Font size in pixels
    pub font_size: f64,
    pub bold: bool,
    pub color: Color,
    pub anchor: TextAnchor,
    pub baseline: DominantBaseline,
    /// Rotation in degrees around the text position
    pub rotation: f64,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// SVG attributes for a `<text>` element, position excluded.
    ///
    /// Defaults (start anchor, auto baseline, normal weight) are omitted.
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = Vec::with_capacity(6);
        if let Some(class) = &self.class {
            attrs.push(format!("class=\"{}\"", class));
        }
        attrs.push(format!("font-size=\"{}\"", self.font_size));
        attrs.push(format!("fill=\"{}\"", self.color.to_svg_string()));
        if self.bold {
            attrs.push("font-weight=\"bold\"".to_string());
        }
        if self.anchor != TextAnchor::Start {
            attrs.push(format!("text-anchor=\"{}\"", self.anchor.as_str()));
        }
        if self.baseline != DominantBaseline::Auto {
            attrs.push(format!("dominant-baseline=\"{}\"", self.baseline.as_str()));
        }
        attrs.join(" ")
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            class: None,
            font_size: 12.0,
            bold: false,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            baseline: DominantBaseline::Auto,
            rotation: 0.0,
        }
    }
}

//! Positioned text: titles, axis labels, tick labels and legend labels.

use crate::plotting::style::TextStyle;

#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    /// Anchor point in pixels
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    pub fn style(self, style: TextStyle) -> Self {
        Text { style, ..self }
    }

    /// Rotate about the anchor point, in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.style = self.style.rotation(degrees);
        self
    }

    pub fn to_svg(&self) -> String {
        let mut open = format!(
            "<text x=\"{}\" y=\"{}\" {}",
            self.x,
            self.y,
            self.style.to_svg_attrs()
        );
        if self.style.rotation != 0.0 {
            open.push_str(&format!(
                " transform=\"rotate({},{},{})\"",
                self.style.rotation, self.x, self.y
            ));
        }
        format!("{}>{}</text>", open, escape_xml(&self.content))
    }
}

/// Escape text for use in SVG content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("O'Neil"), "O&apos;Neil");
    }

    #[test]
    fn test_rotated_label() {
        let svg = Text::new("MPG", 35.0, 500.0).rotation(270.0).to_svg();
        assert!(svg.contains("rotate(270,35,500)"));
        assert!(svg.ends_with(">MPG</text>"));
    }
}

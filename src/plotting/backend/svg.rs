//! String-building SVG emitter used by the scene renderer.

use std::fmt::Write;

use crate::plotting::element::{Text, escape_xml};
use crate::plotting::style::{Color, FillStyle, LineStyle};

/// Accumulates SVG elements for one chart document.
#[derive(Debug)]
pub struct SvgBackend {
    pub width: f64,
    pub height: f64,
    /// Body markup, one element per line
    body: String,
    /// Extra `name="value"` pairs on the root element
    root_attrs: String,
    include_declaration: bool,
}

impl SvgBackend {
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            body: String::new(),
            root_attrs: String::new(),
            include_declaration: true,
        }
    }

    /// Emit the `<?xml ...?>` prolog (on by default).
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Attribute on the root `<svg>` element; the value is escaped.
    pub fn root_attr(mut self, name: &str, value: &str) -> Self {
        let _ = write!(self.root_attrs, " {}=\"{}\"", name, escape_xml(value));
        self
    }

    fn push(&mut self, element: &str) {
        self.body.push_str("  ");
        self.body.push_str(element);
        self.body.push('\n');
    }

    pub fn fill_background(&mut self, color: &Color) {
        let rect = format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            color.to_svg_string()
        );
        self.push(&rect);
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        let line = format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            x1,
            y1,
            x2,
            y2,
            style.to_svg_attrs()
        );
        self.push(&line);
    }

    /// Rectangle from its top-left corner. `attrs` carries class and data-* attributes.
    pub fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: &FillStyle,
        attrs: &str,
    ) {
        let rect = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}{}/>",
            x,
            y,
            width,
            height,
            style.to_svg_attrs(),
            prefixed(attrs)
        );
        self.push(&rect);
    }

    pub fn draw_circle(&mut self, cx: f64, cy: f64, r: f64, style: &FillStyle, attrs: &str) {
        let circle = format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}{}/>",
            cx,
            cy,
            r,
            style.to_svg_attrs(),
            prefixed(attrs)
        );
        self.push(&circle);
    }

    pub fn draw_text(&mut self, text: &Text) {
        self.push(&text.to_svg());
    }

    /// Open a `<g>`; every call needs a matching `end_group`.
    pub fn start_group(&mut self, attrs: &str) {
        let open = format!("<g{}>", prefixed(attrs));
        self.push(&open);
    }

    pub fn end_group(&mut self) {
        self.push("</g>");
    }

    /// Finish the document.
    pub fn render(self) -> String {
        let mut svg = String::new();
        if self.include_declaration {
            svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"{}>",
            self.root_attrs,
            w = self.width,
            h = self.height,
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

fn prefixed(attrs: &str) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_content() {
        let mut backend = SvgBackend::new(1000.0, 1000.0)
            .include_declaration(false)
            .root_attr("id", "plot1");
        backend.draw_circle(10.0, 20.0, 4.0, &FillStyle::new(Color::BLACK), "class=\"mark\"");
        let svg = backend.render();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("id=\"plot1\""));
        assert!(svg.contains("viewBox=\"0 0 1000 1000\""));
        assert!(svg.contains("<circle cx=\"10.00\" cy=\"20.00\" r=\"4.00\""));
        assert!(svg.contains("class=\"mark\"/>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_groups_balance() {
        let mut backend = SvgBackend::new(10.0, 10.0);
        backend.start_group("class=\"axis\"");
        backend.draw_line(0.0, 0.0, 1.0, 1.0, &LineStyle::new());
        backend.end_group();
        let svg = backend.render();
        assert_eq!(svg.matches("<g").count(), svg.matches("</g>").count());
    }
}

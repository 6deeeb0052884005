//! Colors as written into SVG paint attributes.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    /// CSS color keyword such as `steelblue`
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    /// Swatch fill of a hidden legend category
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Parse `#rrggbb`, with or without the leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let [_, r, g, b] = value.to_be_bytes();
        Some(Color::Rgb(r, g, b))
    }

    /// Lowercase `#rrggbb` for RGB colors, the keyword otherwise.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        match s.starts_with('#').then(|| Color::from_hex(s)).flatten() {
            Some(color) => color,
            None => Color::Named(s.to_string()),
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

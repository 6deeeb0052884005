//! Visual defaults shared by every chart on a page.

use super::color::Color;
use super::text_style::{TextAnchor, TextStyle};

/// Opacity applied to marks of a hidden category.
pub const HIDDEN_OPACITY: f64 = 0.1;

/// Theme configuration containing all style settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Background color for the canvas
    pub background: Color,
    /// Color for axis lines and ticks
    pub axis_color: Color,
    /// Title style
    pub title_style: TextStyle,
    /// Axis label style
    pub label_style: TextStyle,
    /// Tick label style
    pub tick_style: TextStyle,
    /// Legend label style
    pub legend_style: TextStyle,
    /// Opacity of marks whose category is hidden
    pub hidden_opacity: f64,
    /// Swatch fill used while a category is hidden
    pub hidden_swatch: Color,
    /// Outline drawn around brushed marks
    pub selected_stroke: Color,
    pub selected_stroke_width: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            axis_color: Color::BLACK,
            title_style: TextStyle::new()
                .class("title")
                .font_size(32.0)
                .bold()
                .anchor(TextAnchor::Middle),
            label_style: TextStyle::new()
                .class("axis-label")
                .font_size(20.0)
                .anchor(TextAnchor::Middle),
            tick_style: TextStyle::new().class("tick").font_size(14.0),
            legend_style: TextStyle::new().class("legend").font_size(18.0),
            hidden_opacity: HIDDEN_OPACITY,
            hidden_swatch: Color::LIGHT_GRAY,
            selected_stroke: Color::BLACK,
            selected_stroke_width: 2.0,
        }
    }
}

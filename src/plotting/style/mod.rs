//! Styling module.
//!
//! Colors, fill/line/text styles, and the chart theme.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod text_style;
pub mod theme;

pub use color::Color;
pub use fill_style::FillStyle;
pub use line_style::LineStyle;
pub use text_style::{DominantBaseline, TextAnchor, TextStyle};
pub use theme::{HIDDEN_OPACITY, ThemeConfig};

//! Rendering backends.

mod svg;

pub use svg::SvgBackend;

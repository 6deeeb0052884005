//! Legend layout: one swatch and label per category.

use crate::plotting::style::FillStyle;

/// A resolved legend row, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Category label
    pub label: String,
    /// Swatch fill reflecting the category's current visibility
    pub swatch: FillStyle,
    /// Whether the category is currently shown
    pub visible: bool,
    /// Whether any record of the chart carries this category
    pub in_data: bool,
}

/// Geometry of the legend block.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    /// Top-left corner of the first row
    pub origin: (f64, f64),
    /// Vertical distance between rows
    pub row_height: f64,
    /// Swatch side length
    pub swatch_size: f64,
    /// Label offset from the row origin
    pub label_offset: (f64, f64),
    /// Width of the clickable band, measured from the swatch's left edge
    pub band_width: f64,
}

impl LegendLayout {
    /// Legend anchored at `x`, top aligned with the plot margin.
    pub fn new(x: f64, margin: f64) -> Self {
        LegendLayout {
            origin: (x, margin),
            row_height: 45.0,
            swatch_size: 40.0,
            label_offset: (45.0, 25.0),
            band_width: 200.0,
        }
    }

    /// Set the clickable band width, usually the distance to the canvas edge.
    pub fn band_width(mut self, width: f64) -> Self {
        self.band_width = width;
        self
    }

    /// Top-left corner of row `i`.
    pub fn row_origin(&self, i: usize) -> (f64, f64) {
        (self.origin.0, self.origin.1 + i as f64 * self.row_height)
    }

    /// Position of the label baseline for row `i`.
    pub fn label_position(&self, i: usize) -> (f64, f64) {
        let (x, y) = self.row_origin(i);
        (x + self.label_offset.0, y + self.label_offset.1)
    }

    /// Index of the row whose swatch or label contains the point, if any.
    ///
    /// A row's clickable area spans the swatch and the label band to its right.
    pub fn hit_test(&self, rows: usize, x: f64, y: f64) -> Option<usize> {
        if x < self.origin.0 || x > self.origin.0 + self.band_width || y < self.origin.1 {
            return None;
        }
        let i = ((y - self.origin.1) / self.row_height).floor() as usize;
        if i >= rows {
            return None;
        }
        let (_, row_y) = self.row_origin(i);
        (y <= row_y + self.swatch_size).then_some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stack_every_45px() {
        let layout = LegendLayout::new(800.0, 50.0);
        assert_eq!(layout.row_origin(0), (800.0, 50.0));
        assert_eq!(layout.row_origin(2), (800.0, 140.0));
        assert_eq!(layout.label_position(1), (845.0, 120.0));
    }

    #[test]
    fn test_hit_test() {
        let layout = LegendLayout::new(800.0, 50.0);
        assert_eq!(layout.hit_test(3, 810.0, 60.0), Some(0));
        assert_eq!(layout.hit_test(3, 900.0, 100.0), Some(1));
        // gap between rows
        assert_eq!(layout.hit_test(3, 810.0, 92.0), None);
        assert_eq!(layout.hit_test(3, 810.0, 500.0), None);
        assert_eq!(layout.hit_test(3, 700.0, 60.0), None);
        // right of the band
        assert_eq!(layout.hit_test(3, 1000.0, 60.0), Some(0));
        assert_eq!(layout.hit_test(3, 5000.0, 60.0), None);
        assert_eq!(layout.band_width(50.0).hit_test(3, 860.0, 60.0), None);
    }
}

//! Visual elements for charts.

mod axis;
mod legend;
pub mod text;

pub use axis::{AxisConfig, AxisPosition};
pub use legend::{LegendEntry, LegendLayout};
pub use text::{Text, escape_xml};

/// Axis-aligned rectangle, in pixel or data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create bounds from two corner points in any order.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds {
            x_min: x1.min(x2),
            x_max: x1.max(x2),
            y_min: y1.min(y2),
            y_max: y1.max(y2),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when the rectangle has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Check if a point is inside the bounds, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Clamp a point into the bounds.
    pub fn clamp_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x.clamp(self.x_min, self.x_max),
            y.clamp(self.y_min, self.y_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_normalizes() {
        let b = Bounds::from_points(10.0, 2.0, 4.0, 8.0);
        assert_eq!(b, Bounds::new(4.0, 10.0, 2.0, 8.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = Bounds::new(0.0, 5.0, 0.0, 5.0);
        assert!(b.contains(5.0, 5.0));
        assert!(b.contains(0.0, 0.0));
        assert!(!b.contains(5.0001, 1.0));
    }

    #[test]
    fn test_degenerate() {
        assert!(Bounds::from_points(3.0, 1.0, 3.0, 9.0).is_degenerate());
        assert!(Bounds::from_points(1.0, 4.0, 9.0, 4.0).is_degenerate());
        assert!(!Bounds::from_points(1.0, 1.0, 2.0, 2.0).is_degenerate());
    }

    #[test]
    fn test_clamp_point() {
        let b = Bounds::new(50.0, 950.0, 50.0, 950.0);
        assert_eq!(b.clamp_point(10.0, 990.0), (50.0, 950.0));
        assert_eq!(b.clamp_point(100.0, 200.0), (100.0, 200.0));
    }
}

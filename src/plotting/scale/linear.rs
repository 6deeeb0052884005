//! Linear scale transformation.

use super::Scale;
use crate::plotting::error::{PlotError, PlotResult};

/// A linear mapping from a data domain to a pixel range, with inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a new linear scale. The range may be descending (flipped Y).
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> PlotResult<Self> {
        let finite = [domain.0, domain.1, range.0, range.1]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(PlotError::InvalidConfig(format!(
                "Linear scale needs finite bounds, got domain {:?} range {:?}",
                domain, range
            )));
        }
        if domain.0 == domain.1 {
            return Err(PlotError::InvalidConfig(
                "Linear scale domain must have non-zero width".to_string(),
            ));
        }
        Ok(LinearScale { domain, range })
    }

    /// Map a range value back into the data domain.
    pub fn invert(&self, pixel: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return (self.domain.0 + self.domain.1) / 2.0;
        }
        let t = (pixel - self.range.0) / span;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }
}

impl Scale for LinearScale {
    fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_and_invert() {
        let s = LinearScale::new((0.0, 10.0), (50.0, 950.0)).unwrap();
        assert_eq!(s.map(0.0), 50.0);
        assert_eq!(s.map(10.0), 950.0);
        assert!((s.invert(500.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_descending_range() {
        let s = LinearScale::new((0.0, 100.0), (950.0, 50.0)).unwrap();
        assert!(s.map(100.0) < s.map(0.0));
        assert!((s.invert(500.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let s = LinearScale::new((-3.7, 12.1), (950.0, 50.0)).unwrap();
        let mut p = 50.0;
        while p <= 950.0 {
            assert!((s.map(s.invert(p)) - p).abs() < 1e-9);
            p += 17.5;
        }
    }

    #[test]
    fn test_rejects_zero_width_domain() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 10.0)).is_err());
        assert!(LinearScale::new((0.0, f64::NAN), (0.0, 10.0)).is_err());
    }
}

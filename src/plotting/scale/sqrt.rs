//! Square-root scale, used for bubble radii so that area tracks the value.

use super::Scale;

/// A power scale with exponent 0.5.
///
/// Values are transformed with `sign(v) * sqrt(|v|)` and then mapped
/// linearly. A zero-width domain maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        SqrtScale { domain, range }
    }
}

fn signed_sqrt(v: f64) -> f64 {
    v.signum() * v.abs().sqrt()
}

impl Scale for SqrtScale {
    fn map(&self, value: f64) -> f64 {
        let d0 = signed_sqrt(self.domain.0);
        let d1 = signed_sqrt(self.domain.1);
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (signed_sqrt(value) - d0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

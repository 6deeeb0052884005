//! Scales mapping data values to pixel positions, radii and colors.

mod linear;
mod ordinal;
mod sqrt;

pub use linear::LinearScale;
pub use ordinal::{CategoryDomain, OrdinalScale, TABLEAU10};
pub use sqrt::SqrtScale;

/// Fraction of an extent's width added on each side of a position domain.
pub const DOMAIN_PADDING: f64 = 0.05;

/// Trait for continuous scales.
pub trait Scale: std::fmt::Debug {
    /// Map a data value into range space.
    fn map(&self, value: f64) -> f64;

    /// The data domain `(d0, d1)`.
    fn domain(&self) -> (f64, f64);

    /// The output range `(r0, r1)`.
    fn range(&self) -> (f64, f64);

    /// Generate nice tick values inside the domain.
    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        let (d0, d1) = self.domain();
        nice_ticks(d0.min(d1), d0.max(d1), num_ticks)
    }
}

/// Pad an extent by `fraction` of its width on each side.
///
/// A zero-width extent becomes `[v - 1, v + 1]` and a missing extent (no
/// finite values) becomes `[-1, 1]`, so the result never has zero width.
pub fn padded_domain(extent: Option<(f64, f64)>, fraction: f64) -> (f64, f64) {
    match extent {
        None => (-1.0, 1.0),
        Some((lo, hi)) if hi - lo == 0.0 => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * fraction;
            (lo - pad, hi + pad)
        }
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions for a given range.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max > min) {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let first = (min / tick_spacing).ceil();
    let last = (max / tick_spacing).floor();

    // Multiply from an integer step count so ticks land on exact multiples.
    let mut ticks = Vec::new();
    let mut step = first;
    while step <= last {
        let tick = step * tick_spacing;
        ticks.push(if tick == 0.0 { 0.0 } else { tick });
        step += 1.0;
    }

    ticks
}

//! Scale construction from a dataset.

use log::{debug, warn};

use super::Columns;
use crate::plotting::data::{Record, extent};
use crate::plotting::element::Bounds;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::scale::{
    CategoryDomain, DOMAIN_PADDING, LinearScale, OrdinalScale, Scale, SqrtScale, padded_domain,
};

/// Side of the square logical canvas, in pixels.
pub const CANVAS_SIZE: f64 = 1000.0;

/// Default inset of the plot area from each canvas edge.
pub const DEFAULT_MARGIN: f64 = 50.0;

/// Output range of the radius scale.
pub const RADIUS_RANGE: (f64, f64) = (4.0, 12.0);

/// The four mappings a scatter chart draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    /// Data x to pixel x
    pub x: LinearScale,
    /// Data y to pixel y (range flipped so larger values draw higher)
    pub y: LinearScale,
    /// Data size to circle radius
    pub r: SqrtScale,
    /// Category to fill color
    pub color: OrdinalScale,
    margin: f64,
}

impl ChartScales {
    /// Build the scales, validating that every record carries the chart's columns.
    pub fn build(records: &[Record], columns: &Columns, margin: f64) -> PlotResult<Self> {
        if !(margin.is_finite() && margin >= 0.0 && margin < CANVAS_SIZE / 2.0) {
            return Err(PlotError::InvalidConfig(format!(
                "margin must be in [0, {}), got {}",
                CANVAS_SIZE / 2.0,
                margin
            )));
        }

        let mut xs = Vec::with_capacity(records.len());
        let mut ys = Vec::with_capacity(records.len());
        let mut rs = Vec::with_capacity(records.len());
        let mut categories = CategoryDomain::new();
        for (i, record) in records.iter().enumerate() {
            xs.push(record.require_number(&columns.x, i)?);
            ys.push(record.require_number(&columns.y, i)?);
            rs.push(record.require_number(&columns.r, i)?);
            categories.insert(record.require_text(&columns.color, i)?);
        }

        if records.is_empty() {
            warn!("No records to plot; drawing empty axes");
        }

        let x_extent = extent(xs);
        let y_extent = extent(ys);
        for (column, ext) in [(&columns.x, x_extent), (&columns.y, y_extent)] {
            if let Some((lo, hi)) = ext
                && lo == hi
            {
                debug!("Column '{}' has a single value {}; widening domain by 1", column, lo);
            }
        }

        let x = LinearScale::new(
            padded_domain(x_extent, DOMAIN_PADDING),
            (margin, CANVAS_SIZE - margin),
        )?;
        let y = LinearScale::new(
            padded_domain(y_extent, DOMAIN_PADDING),
            (CANVAS_SIZE - margin, margin),
        )?;
        let r = SqrtScale::new(extent(rs).unwrap_or((0.0, 1.0)), RADIUS_RANGE);
        let color = OrdinalScale::new(categories);

        debug!(
            "Scales: x {:?} y {:?} r {:?}, {} categories",
            x.domain(),
            y.domain(),
            r.domain(),
            color.domain().len()
        );

        Ok(ChartScales {
            x,
            y,
            r,
            color,
            margin,
        })
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// The pixel rectangle inside the margins; also the brush extent.
    pub fn plot_area(&self) -> Bounds {
        Bounds::new(
            self.margin,
            CANVAS_SIZE - self.margin,
            self.margin,
            CANVAS_SIZE - self.margin,
        )
    }

    /// Pixel position of a data point.
    pub fn position(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.map(x), self.y.map(y))
    }

    /// Data-space point under a pixel.
    pub fn invert(&self, px: f64, py: f64) -> (f64, f64) {
        (self.x.invert(px), self.y.invert(py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: f64, y: f64, r: f64, c: &str) -> Record {
        Record::new()
            .with("x", x)
            .with("y", y)
            .with("r", r)
            .with("c", c)
    }

    fn columns() -> Columns {
        Columns::new("x", "y", "r", "c")
    }

    #[test]
    fn test_extremes_stay_inside_margin() {
        let records = vec![
            record(2.0, -10.0, 1.0, "a"),
            record(9.0, 40.0, 5.0, "b"),
            record(5.0, 12.0, 3.0, "a"),
        ];
        let scales = ChartScales::build(&records, &columns(), DEFAULT_MARGIN).unwrap();
        let (x_min, y_min) = scales.position(2.0, -10.0);
        let (x_max, y_max) = scales.position(9.0, 40.0);
        assert!(x_min > DEFAULT_MARGIN);
        assert!(x_max < CANVAS_SIZE - DEFAULT_MARGIN);
        // flipped: smallest y value draws lowest
        assert!(y_min < CANVAS_SIZE - DEFAULT_MARGIN);
        assert!(y_max > DEFAULT_MARGIN);
        assert!(y_max < y_min);
    }

    #[test]
    fn test_pixel_round_trip() {
        let records = vec![record(-3.0, 0.5, 1.0, "a"), record(17.0, 2.5, 2.0, "a")];
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        for p in [50.0, 123.4, 500.0, 777.7, 950.0] {
            let (dx, dy) = scales.invert(p, p);
            let (px, py) = scales.position(dx, dy);
            assert!((px - p).abs() < 1e-9);
            assert!((py - p).abs() < 1e-9);
        }
    }

    #[test]
    fn test_radius_range() {
        let records = vec![record(0.0, 0.0, 4.0, "a"), record(1.0, 1.0, 100.0, "a")];
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        assert_eq!(scales.r.map(4.0), RADIUS_RANGE.0);
        assert_eq!(scales.r.map(100.0), RADIUS_RANGE.1);
    }

    #[test]
    fn test_single_point_is_finite() {
        let records = vec![record(3.0, 3.0, 3.0, "a")];
        let scales = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let (px, py) = scales.position(3.0, 3.0);
        assert_eq!((px, py), (500.0, 500.0));
        assert_eq!(scales.r.map(3.0), 8.0);
    }

    #[test]
    fn test_empty_dataset() {
        let scales = ChartScales::build(&[], &columns(), 50.0).unwrap();
        assert_eq!(scales.x.domain(), (-1.0, 1.0));
        assert!(scales.color.domain().is_empty());
    }

    #[test]
    fn test_missing_column_is_reported() {
        let records = vec![record(1.0, 1.0, 1.0, "a"), Record::new().with("x", 2.0)];
        match ChartScales::build(&records, &columns(), 50.0) {
            Err(PlotError::MissingColumn { column, index }) => {
                assert_eq!(column, "y");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_margin_validated() {
        assert!(ChartScales::build(&[], &columns(), 500.0).is_err());
        assert!(ChartScales::build(&[], &columns(), -1.0).is_err());
    }

    #[test]
    fn test_same_data_same_scales() {
        let records = vec![record(1.0, 2.0, 3.0, "a"), record(4.0, 5.0, 6.0, "b")];
        let a = ChartScales::build(&records, &columns(), 50.0).unwrap();
        let b = ChartScales::build(&records, &columns(), 50.0).unwrap();
        assert_eq!(a, b);
    }
}

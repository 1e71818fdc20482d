use thiserror::Error;

use crate::geometry::Bounds;

/// Geometry that parsed but cannot be rendered
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid WKT format: polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("zero-area polygon: all points share one x coordinate")]
    ZeroWidth,

    #[error("zero-height polygon: all points share one y coordinate")]
    ZeroHeight,
}

/// A parsed river outline: provenance name, ring, and bounds
///
/// Built once per successful parse and never mutated; a re-parse replaces
/// the whole value. The ring is stored exactly as parsed - when the input
/// repeats its first point as a closing vertex, that duplicate is kept and
/// participates in the vertex mean.
#[derive(Debug, Clone)]
pub struct RiverPolygon {
    /// Where the text came from (file stem, or a tag for pasted input)
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub bounds: Bounds,
}

impl RiverPolygon {
    /// Validate a point sequence into a renderable polygon
    ///
    /// Enforces the two invariants every caller relies on: at least 3
    /// points, and strictly positive bounds in both dimensions.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Result<Self, GeometryError> {
        let count = points.len();
        if count < 3 {
            return Err(GeometryError::TooFewPoints(count));
        }

        // Non-empty per the check above
        let bounds = Bounds::from_points(&points).ok_or(GeometryError::TooFewPoints(count))?;

        if bounds.width() == 0.0 {
            return Err(GeometryError::ZeroWidth);
        }
        if bounds.height() == 0.0 {
            return Err(GeometryError::ZeroHeight);
        }

        Ok(Self {
            name: name.into(),
            points,
            bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_river_polygon_valid() {
        let river = RiverPolygon::new(
            "test",
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        )
        .unwrap();

        assert_eq!(river.name, "test");
        assert_eq!(river.points.len(), 5);
        assert_eq!(river.bounds.width(), 10.0);
        assert_eq!(river.bounds.height(), 10.0);
    }

    #[test]
    fn test_too_few_points() {
        let err = RiverPolygon::new("test", vec![(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(err, GeometryError::TooFewPoints(2));
    }

    #[test]
    fn test_collinear_vertical_rejected() {
        let err =
            RiverPolygon::new("test", vec![(5.0, 0.0), (5.0, 4.0), (5.0, 9.0)]).unwrap_err();
        assert_eq!(err, GeometryError::ZeroWidth);
    }

    #[test]
    fn test_collinear_horizontal_rejected() {
        let err =
            RiverPolygon::new("test", vec![(0.0, 3.0), (4.0, 3.0), (9.0, 3.0)]).unwrap_err();
        assert_eq!(err, GeometryError::ZeroHeight);
    }
}

use serde::Serialize;

/// Axis-aligned bounding box of a point sequence
///
/// Width and height are derived differences and therefore never negative.
/// A zero in either dimension means the points are collinear along one
/// axis; callers treat that as degenerate geometry and refuse to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    ///
    /// Returns `None` for an empty slice; a single point yields a
    /// zero-size box.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&(first_x, first_y), rest) = points.split_first()?;

        let mut bounds = Self {
            min_x: first_x,
            max_x: first_x,
            min_y: first_y,
            max_y: first_y,
        };

        for &(x, y) in rest {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }

        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box has no area in at least one dimension
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![(3.0, -1.0), (0.5, 7.0), (-2.0, 2.0)];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 7.0);
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 8.0);
    }

    #[test]
    fn test_bounds_bracket_every_point() {
        let points: Vec<(f64, f64)> = (0..20)
            .map(|i| {
                let t = i as f64 * 0.7;
                (t.sin() * 13.0, t.cos() * 5.0 + 1.0)
            })
            .collect();
        let bounds = Bounds::from_points(&points).unwrap();

        for &(x, y) in &points {
            assert!(bounds.min_x <= x && x <= bounds.max_x);
            assert!(bounds.min_y <= y && y <= bounds.max_y);
        }
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_single_point_degenerate() {
        let bounds = Bounds::from_points(&[(4.0, 4.0)]).unwrap();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_bounds_collinear_degenerate() {
        let horizontal = Bounds::from_points(&[(0.0, 3.0), (5.0, 3.0), (9.0, 3.0)]).unwrap();
        assert_eq!(horizontal.height(), 0.0);
        assert!(horizontal.is_degenerate());

        let square = Bounds::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap();
        assert!(!square.is_degenerate());
    }
}

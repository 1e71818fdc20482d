use geo::{Contains, LineString, Point, Polygon, Rect, coord};

/// Build a geo polygon from a raw ring
///
/// geo closes the exterior ring itself, so an unclosed input ring is fine.
fn to_geo_polygon(ring: &[(f64, f64)]) -> Polygon<f64> {
    let exterior: LineString<f64> = ring.iter().map(|&(x, y)| coord! { x: x, y: y }).collect();
    Polygon::new(exterior, Vec::new())
}

/// True when the point lies strictly inside the ring interior
pub fn ring_contains_point(ring: &[(f64, f64)], x: f64, y: f64) -> bool {
    to_geo_polygon(ring).contains(&Point::new(x, y))
}

/// True when an axis-aligned box sits entirely inside the ring interior
///
/// A box that touches the boundary does not count as contained.
pub fn ring_contains_box(ring: &[(f64, f64)], center: (f64, f64), width: f64, height: f64) -> bool {
    let (cx, cy) = center;
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    let rect = Rect::new(
        coord! { x: cx - half_w, y: cy - half_h },
        coord! { x: cx + half_w, y: cy + half_h },
    );

    to_geo_polygon(ring).contains(&rect.to_polygon())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [(f64, f64); 5] = [
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (0.0, 0.0),
    ];

    // U shape: two tall prongs joined by a thin base, open at the top
    const U_SHAPE: [(f64, f64); 9] = [
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (8.0, 10.0),
        (8.0, 2.0),
        (2.0, 2.0),
        (2.0, 10.0),
        (0.0, 10.0),
        (0.0, 0.0),
    ];

    #[test]
    fn test_point_inside_square() {
        assert!(ring_contains_point(&SQUARE, 5.0, 5.0));
        assert!(ring_contains_point(&SQUARE, 0.5, 9.5));
    }

    #[test]
    fn test_point_outside_square() {
        assert!(!ring_contains_point(&SQUARE, -1.0, 5.0));
        assert!(!ring_contains_point(&SQUARE, 5.0, 11.0));
    }

    #[test]
    fn test_vertex_mean_of_concave_ring_falls_outside() {
        // The mean of the U's vertices sits in the notch between the
        // prongs, which is exterior - exactly the case a fake
        // containment flag would get wrong
        assert!(!ring_contains_point(&U_SHAPE, 5.0, 6.0));
    }

    #[test]
    fn test_box_inside_square() {
        assert!(ring_contains_box(&SQUARE, (5.0, 5.0), 4.0, 2.0));
    }

    #[test]
    fn test_box_crossing_boundary() {
        assert!(!ring_contains_box(&SQUARE, (9.0, 5.0), 4.0, 2.0));
        assert!(!ring_contains_box(&SQUARE, (5.0, 5.0), 12.0, 2.0));
    }

    #[test]
    fn test_box_spanning_concave_notch() {
        // Both ends of the box are inside a prong but the middle spans
        // the exterior notch
        assert!(!ring_contains_box(&U_SHAPE, (5.0, 6.0), 8.0, 1.0));
        assert!(ring_contains_box(&U_SHAPE, (5.0, 1.0), 8.0, 1.0));
    }
}

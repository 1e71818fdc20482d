/// Unweighted arithmetic mean of a vertex sequence
///
/// This is the vertex mean, not the area centroid of the enclosed region.
/// A ring that repeats its closing vertex counts that vertex twice, which
/// pulls the mean toward it; that behavior is deliberate and relied upon
/// by the placement tests.
pub fn vertex_mean(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));

    Some((sum_x / n, sum_y / n))
}

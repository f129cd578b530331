/// Degenerate-line threshold: below this length the extremes line
/// contributes zero distance for every point.
const DEGENERATE_LENGTH: f64 = 1e-12;

/// Perpendicular distance from `p` to the line through `p0` and `p1`, in
/// 2-objective space. Returns 0 for a degenerate (near-zero-length) line.
pub fn compute(p0: (f64, f64), p1: (f64, f64), p: (f64, f64)) -> f64 {
    let v = (p1.0 - p0.0, p1.1 - p0.1);
    let length = (v.0 * v.0 + v.1 * v.1).sqrt();
    if length < DEGENERATE_LENGTH {
        return 0.0;
    }
    let u = (v.0 / length, v.1 / length);
    let w = (p.0 - p0.0, p.1 - p0.1);
    let projection = w.0 * u.0 + w.1 * u.1;
    let perpendicular = (w.0 - projection * u.0, w.1 - projection * u.1);
    (perpendicular.0 * perpendicular.0 + perpendicular.1 * perpendicular.1).sqrt()
}

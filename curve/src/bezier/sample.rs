use super::basis::*;
use crate::geo::*;

///
/// The number of curve samples generated per control point
///
/// The sample count scales with the control point count so that higher-degree curves
/// (which can wander further between parameter values) are drawn with proportionally
/// more line segments.
///
pub const SAMPLES_PER_POINT: usize = 10;

///
/// Samples the bezier curve defined by a set of control points, producing the points
/// of a polyline that approximates it
///
/// The curve is evaluated at `10 × points.len()` evenly spaced parameter values on
/// the closed interval: `t = i / (sample_count - 1)`, so both endpoints are always
/// included and the first and last samples coincide with the first and last control
/// points.
///
/// Fewer than 2 control points do not define a curve, and produce an empty sample
/// list (this is documented behaviour, not an error). The samples are regenerated
/// from scratch on every call: adding a control point reshapes the entire curve, so
/// there is nothing useful to retain from a previous sampling pass.
///
pub fn sample_curve(points: &[Point2D]) -> Vec<Point2D> {
    if points.len() < 2 {
        return vec![];
    }

    let sample_count = SAMPLES_PER_POINT * points.len();

    (0..sample_count)
        .map(|i| {
            let t = (i as f64) / ((sample_count - 1) as f64);
            bezier_point(t, points)
        })
        .collect()
}

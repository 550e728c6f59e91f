use super::binomial::*;
use crate::geo::*;

///
/// The Bernstein basis weight `C(n, i) · t^i · (1-t)^(n-i)`
///
/// This is the weight the `i`th control point of a degree `n` curve contributes at
/// parameter `t`. The weights for a given `n` and `t` sum to 1 over all `i`.
///
#[inline]
pub fn bernstein_weight(n: usize, i: usize, t: f64) -> f64 {
    // powi(0) is exactly 1.0 even for a 0.0 base, which keeps the first and last
    // basis terms well defined at t=0 and t=1 (the Bernstein convention 0^0 = 1)
    (binomial(n, i) as f64) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

///
/// Evaluates the bezier curve defined by a set of control points at parameter `t`
///
/// The result is the Bernstein sum `Σ C(n,i) · t^i · (1-t)^(n-i) · points[i]` for
/// degree `n = points.len() - 1`, with the x and y coordinates weighted identically.
/// A single control point is a degree 0 curve and is returned unchanged for every
/// value of `t`.
///
/// Rather than calling [`binomial`] once per term, the coefficient is updated
/// incrementally with `binom = binom × (n-i) / (i+1)` as the loop advances; the
/// division is exact at every step (asserted in debug builds) and the two strategies
/// produce identical results.
///
pub fn bezier_point(t: f64, points: &[Point2D]) -> Point2D {
    assert!(!points.is_empty(), "cannot evaluate a bezier curve with no control points");

    let n = points.len() - 1;
    assert!(n <= MAX_DEGREE, "a curve of degree {} exceeds the audited maximum of {}", n, MAX_DEGREE);

    let mut result  = Point2D::origin();
    let mut binom   = 1u128;

    for (i, point) in points.iter().enumerate() {
        let basis   = (binom as f64) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32);
        result      = result + *point * basis;

        // Step C(n, i) to C(n, i+1): the intermediate product is C(n, i+1) × (i+1),
        // so the integer division is always exact
        if i < n {
            binom *= (n - i) as u128;
            debug_assert!(binom % (i as u128 + 1) == 0, "running binomial product must divide exactly by {} (was {})", i + 1, binom);
            binom /= i as u128 + 1;
        }
    }

    result
}

///
/// The highest curve degree the binomial computation is audited for
///
/// This matches the control point capacity of the selection state machine (100 points
/// is degree 99). The largest intermediate value either evaluation strategy produces
/// at this degree is `C(99, 50) × 50 ≈ 2.5×10³⁰`, which is comfortably inside `u128`,
/// so raising this bound requires re-checking the accumulator width.
///
pub const MAX_DEGREE: usize = 99;

///
/// Computes the binomial coefficient `C(n, k)`
///
/// This uses the symmetric identity `C(n, k) = C(n, n-k)` to pick the shorter of the
/// two equivalent products, then forms the running product `r = r × (n+1-i) / i` for
/// `i` in `1..=k`. The division at each step is exact: immediately before it, `r` is
/// `C(n, i) × i`, so truncation never loses precision (this is checked in debug
/// builds rather than relied on silently).
///
/// Panics if `k > n` or if `n` exceeds [`MAX_DEGREE`]: an out-of-range degree would
/// produce silently wrong curve geometry, so it is treated as a precondition
/// violation rather than a runtime error.
///
pub fn binomial(n: usize, k: usize) -> u128 {
    assert!(k <= n, "binomial(n, k) requires k <= n (n was {}, k was {})", n, k);
    assert!(n <= MAX_DEGREE, "binomial coefficients are only audited against overflow for n <= {} (n was {})", MAX_DEGREE, n);

    // C(n, k) and C(n, n-k) are the same value: compute whichever has fewer terms
    let k = k.min(n - k);

    let mut result = 1u128;
    for i in 1..=k {
        result *= (n + 1 - i) as u128;
        debug_assert!(result % (i as u128) == 0, "running binomial product must divide exactly by {} (was {})", i, result);
        result /= i as u128;
    }

    result
}

use spline_curve::*;

#[test]
fn pascal_triangle_rows() {
    // Rows of Pascal's triangle that are easy to check by hand
    assert!(binomial(0, 0) == 1);
    assert!(binomial(1, 0) == 1);
    assert!(binomial(1, 1) == 1);
    assert!(binomial(4, 2) == 6);
    assert!(binomial(5, 2) == 10);
    assert!(binomial(10, 5) == 252);
    assert!(binomial(29, 14) == 67863915);
    assert!(binomial(30, 15) == 155117520);
}

#[test]
fn symmetry() {
    for n in 0..=MAX_DEGREE {
        for k in 0..=n {
            let left    = binomial(n, k);
            let right   = binomial(n, n - k);

            assert!(left == right, "C({}, {}) = {} but C({}, {}) = {}", n, k, left, n, n - k, right);
        }
    }
}

#[test]
fn row_sums_are_powers_of_two() {
    // Σ C(n, k) over k is 2^n, which exercises every coefficient in the row
    for n in 0..=64usize {
        let sum = (0..=n).map(|k| binomial(n, k)).sum::<u128>();

        assert!(sum == 1u128 << n, "row {} sums to {} not 2^{}", n, sum, n);
    }
}

#[test]
fn incremental_update_matches_closed_form() {
    // The evaluator steps the coefficient with binom = binom * (n-i) / (i+1) per
    // iteration: check the stepped value equals C(n, i) at every i, for every degree
    // the selection can reach
    for n in 0..=MAX_DEGREE {
        let mut binom = 1u128;

        for i in 0..=n {
            assert!(binom == binomial(n, i), "incremental coefficient diverged at C({}, {}): {} vs {}", n, i, binom, binomial(n, i));

            if i < n {
                binom *= (n - i) as u128;
                assert!(binom % (i as u128 + 1) == 0, "intermediate product {} is not divisible by {}", binom, i + 1);
                binom /= i as u128 + 1;
            }
        }
    }
}

#[test]
fn largest_audited_coefficient_is_finite() {
    // The peak of the capacity-99 row: the computation must get here without
    // overflowing (an overflow panics in debug builds and wraps visibly here)
    let peak = binomial(99, 49);

    assert!(peak == binomial(99, 50));
    assert!(peak > 5_000_000_000_000_000_000_000_000_000u128, "C(99, 49) came out implausibly small: {}", peak);
}

#[test]
#[should_panic]
fn degree_beyond_audited_bound_is_rejected() {
    binomial(MAX_DEGREE + 1, 2);
}

#[test]
#[should_panic]
fn k_larger_than_n_is_rejected() {
    binomial(3, 4);
}

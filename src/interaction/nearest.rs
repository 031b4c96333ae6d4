/// First index `i` in `0..=len` with `x_at(i) >= query`, assuming `x_at` is
/// ascending.
///
/// Probes alternate between interpolation (guessing the position from the
/// values at the window edges) and plain bisection, so evenly spaced
/// timestamps resolve in a handful of pivots while skewed data still costs
/// at most about `2 * log2(len)` pivots.
pub fn insertion_index<F>(len: usize, x_at: F, query: f64) -> usize
where
    F: Fn(usize) -> f64,
{
    let mut lo = 0;
    let mut hi = len;
    let mut interpolate = true;
    while lo < hi {
        let pivot = if interpolate {
            interpolation_pivot(lo, hi, &x_at, query)
        } else {
            lo + (hi - lo) / 2
        };
        interpolate = !interpolate;

        if x_at(pivot) < query {
            lo = pivot + 1;
        } else {
            hi = pivot;
        }
    }
    lo
}

fn interpolation_pivot<F>(lo: usize, hi: usize, x_at: &F, query: f64) -> usize
where
    F: Fn(usize) -> f64,
{
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;
    if last == lo {
        return lo;
    }
    let lo_x = x_at(lo);
    let hi_x = x_at(last);
    let span = hi_x - lo_x;
    if !span.is_finite() || span <= 0.0 || !query.is_finite() {
        return mid;
    }
    let ratio = ((query - lo_x) / span).clamp(0.0, 1.0);
    let offset = (ratio * (last - lo) as f64) as usize;
    (lo + offset).min(last)
}

/// Index of the record whose X is nearest to `query`.
///
/// With `i` the insertion index clamped to `1..len`, the candidates are
/// `i - 1` and `i`; the closer one wins and an exact tie resolves to the
/// later record. Queries before the first or after the last X clamp to the
/// first or last record. `None` only for an empty sequence.
pub fn nearest_index<F>(len: usize, x_at: F, query: f64) -> Option<usize>
where
    F: Fn(usize) -> f64,
{
    match len {
        0 => None,
        1 => Some(0),
        _ => {
            let index = insertion_index(len, &x_at, query).clamp(1, len - 1);
            let before = query - x_at(index - 1);
            let after = x_at(index) - query;
            if before >= after {
                Some(index)
            } else {
                Some(index - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn nearest(xs: &[f64], query: f64) -> Option<usize> {
        nearest_index(xs.len(), |i| xs[i], query)
    }

    #[test]
    fn insertion_index_matches_partition_point() {
        let xs = [0.0, 1.0, 1.0, 4.0, 9.0, 16.0, 25.0];
        for query in [-1.0, 0.0, 0.5, 1.0, 2.0, 9.0, 20.0, 25.0, 30.0] {
            let expected = xs.partition_point(|&x| x < query);
            assert_eq!(insertion_index(xs.len(), |i| xs[i], query), expected, "query {query}");
        }
    }

    #[test]
    fn picks_closer_neighbour() {
        let xs = [0.0, 1.0, 2.0];
        assert_eq!(nearest(&xs, 1.4), Some(1));
        assert_eq!(nearest(&xs, 1.6), Some(2));
        assert_eq!(nearest(&xs, 0.2), Some(0));
    }

    #[test]
    fn exact_tie_resolves_to_later_record() {
        let xs = [0.0, 1.0, 2.0];
        assert_eq!(nearest(&xs, 0.5), Some(1));
        assert_eq!(nearest(&xs, 1.5), Some(2));
    }

    #[test]
    fn out_of_range_queries_clamp() {
        let xs = [10.0, 20.0, 30.0];
        assert_eq!(nearest(&xs, -100.0), Some(0));
        assert_eq!(nearest(&xs, 10.0), Some(0));
        assert_eq!(nearest(&xs, 30.0), Some(2));
        assert_eq!(nearest(&xs, 1e9), Some(2));
    }

    #[test]
    fn tiny_sequences() {
        assert_eq!(nearest(&[], 1.0), None);
        assert_eq!(nearest(&[5.0], -3.0), Some(0));
        assert_eq!(nearest(&[5.0, 6.0], f64::NAN).map(|i| i < 2), Some(true));
    }

    #[test]
    fn pivot_count_stays_logarithmic_on_skewed_data() {
        let xs: Vec<f64> = (0..100_000).map(|i| (i as f64).powi(3)).collect();
        let pivots = Cell::new(0usize);
        let index = insertion_index(
            xs.len(),
            |i| {
                pivots.set(pivots.get() + 1);
                xs[i]
            },
            12_345.0,
        );
        assert_eq!(index, xs.partition_point(|&x| x < 12_345.0));
        // 17 bisection steps, at most 18 interpolation steps reading three values each.
        assert!(pivots.get() <= 72, "pivots: {}", pivots.get());
    }
}

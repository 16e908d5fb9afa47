//! Statistical helper functions for hydrolag.

/// Arithmetic mean, or 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        n => values.iter().sum::<f64>() / n as f64,
    }
}

/// Middle value of an ascending slice; the two middle values are averaged
/// for even lengths.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    assert!(n > 0, "median of an empty slice");
    let mid = n / 2;
    if n % 2 == 0 {
        0.5 * (sorted[mid - 1] + sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Sorts values ascending using IEEE 754 total ordering.
///
/// NaN sorts after every finite value, so callers that need plain numbers
/// should filter before sorting.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(f64::total_cmp);
}

/// Linearly interpolated quantile of an ascending slice (Hyndman-Fan
/// type 7, the default in R and pandas).
///
/// The position is `h = (n - 1) * p`; the result interpolates between the
/// order statistics on either side of `h`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "quantile of an empty slice");
    let last = sorted.len() - 1;
    let h = last as f64 * p;
    let below = (h.floor() as usize).min(last);
    let above = (below + 1).min(last);
    let frac = h - below as f64;
    let (lo, hi) = (sorted[below], sorted[above]);
    // Equal neighbours (including two infinities) need no interpolation.
    if frac == 0.0 || lo == hi {
        return lo;
    }
    lo + frac * (hi - lo)
}

/// Index of the first maximum.
///
/// Exact ties resolve to the lowest index. Returns `None` for an empty slice.
/// NaN values never win.
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Ordinary least-squares line through `(i, values[i])` for `i = 0..n`.
///
/// Returns `(slope, intercept)`, or `None` when fewer than two points are
/// given.
pub fn linear_fit(values: &[f64]) -> Option<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mx = (nf - 1.0) / 2.0;
    let my = mean(values);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - mx;
        sxy += dx * (y - my);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    Some((slope, my - slope * mx))
}

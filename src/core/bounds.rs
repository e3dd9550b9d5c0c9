//! Geometry helpers: value ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{DEFAULT_CHART_WIDTH, MIN_CHART_WIDTH},
    data::Series,
};

/// Inclusive value bounds without any padding.
///
/// * If the series is empty or contains only non-finite values the
///   fallback is `(0.0, 1.0)`.
/// * If *all* finite points are identical we expand by +-0.5 so the track
///   still has non-zero length.
#[must_use]
pub fn value_bounds(series: &Series) -> (f64, f64) {
    let (low, high) = series
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    if (high - low).abs() < f64::EPSILON {
        return (low - 0.5, high + 0.5);
    }
    (low, high)
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Chart width that fills the terminal, never below [`MIN_CHART_WIDTH`].
#[inline]
#[must_use]
pub fn terminal_chart_width() -> usize {
    let (w, _) = terminal_geometry();
    match usize::from(w.0) {
        0 => DEFAULT_CHART_WIDTH,
        cols => cols.max(MIN_CHART_WIDTH),
    }
}

/// How wide will `value` be once formatted with `decimals`?
#[inline]
#[must_use]
pub fn value_label_width(series: &Series, decimals: usize) -> usize {
    series
        .iter()
        .map(|p| format!("{:.decimals$}", p.value).len())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_falls_back_to_unit_range() {
        assert_eq!(value_bounds(&Series::default()), (0.0, 1.0));
    }

    #[test]
    fn flat_series_is_padded() {
        assert_eq!(value_bounds(&Series::from_values([3.0, 3.0])), (2.5, 3.5));
    }

    #[test]
    fn bounds_are_exact_extrema() {
        assert_eq!(value_bounds(&Series::from_values([4.0, -1.0, 9.0])), (-1.0, 9.0));
    }

    #[test]
    fn value_labels_measure_the_widest_number() {
        let s = Series::from_values([1.0, -12.25]);
        assert_eq!(value_label_width(&s, 1), 5);
        assert_eq!(value_label_width(&Series::default(), 1), 0);
    }
}

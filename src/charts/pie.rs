//! Pie chart, flattened for the terminal: a proportional strip followed by
//! a percentage legend.

use std::any::Any;

use crate::{
    charts::{
        Chart, Construct,
        frame::{self, Line},
    },
    core::{config::ChartOptions, constants::PIE_SYMBOLS, data::Series, error::ChartError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    data: Series,
    options: ChartOptions,
}

/// Split `cells` between `values` by largest remainder.  The counts always
/// sum to `cells` unless every value is zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn apportion(values: &[f64], cells: usize) -> Vec<usize> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0; values.len()];
    }
    let exact: Vec<f64> = values.iter().map(|v| v / total * cells as f64).collect();
    let mut counts: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();
    let mut left = cells.saturating_sub(counts.iter().sum());

    let mut order: Vec<usize> = (0..values.len()).collect();
    let frac = |i: usize| exact[i] - exact[i].floor();
    // stable: equal remainders keep series order
    order.sort_by(|&a, &b| frac(b).total_cmp(&frac(a)));
    for i in order {
        if left == 0 {
            break;
        }
        counts[i] += 1;
        left -= 1;
    }
    counts
}

impl PieChart {
    pub const KIND: &'static str = "pie";

    /// # Errors
    /// [`ChartError::InvalidData`] when a slice is negative or not finite,
    /// or when the slices sum past the largest finite `f64`.
    pub fn new(data: Series, options: ChartOptions) -> Result<Self, ChartError> {
        if let Some(bad) = data.iter().find(|p| !p.value.is_finite() || p.value < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "pie slice `{}` must be a non-negative number, got {}",
                bad.label, bad.value
            )));
        }
        if !data.total().is_finite() {
            return Err(ChartError::InvalidData(
                "pie slices overflow when summed".to_owned(),
            ));
        }
        Ok(Self { data, options })
    }

    #[must_use]
    pub fn data(&self) -> &Series {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    fn glyph(&self, slice: usize) -> char {
        self.options
            .symbol
            .unwrap_or(PIE_SYMBOLS[slice % PIE_SYMBOLS.len()])
    }

    fn rows(&self) -> Vec<Line> {
        let total = self.data.total();
        if self.data.is_empty() || !total.is_finite() || total <= 0.0 {
            return frame::no_data();
        }
        let color = self.options.color.as_ref();
        let decimals = self.options.decimals;
        let values: Vec<f64> = self.data.iter().map(|p| p.value).collect();
        let cells = self.options.inner_width().saturating_sub(2);

        let mut strip = Line::new();
        strip.push_spaces(1);
        for (i, n) in apportion(&values, cells).into_iter().enumerate() {
            strip.push_run(self.glyph(i), n, color);
        }

        let inner = self.options.inner_width();
        let label_w = self.data.label_width().min(inner / 3);
        let pct_w = format!("{:.decimals$}", 100.0).len();

        let mut rows = vec![strip, Line::new()];
        for (i, p) in self.data.iter().enumerate() {
            let mut line = Line::new();
            line.push_spaces(1);
            line.push_run(self.glyph(i), 1, color);
            line.push_spaces(1);
            line.push_padded(&p.label, label_w);
            line.push_str(&format!("  {:>pct_w$.decimals$}%", p.value / total * 100.0));
            if self.options.show_values {
                let value = format!("  ({:.decimals$})", p.value);
                // the value goes only where it fits whole
                if line.cells() + value.len() <= inner {
                    line.push_str(&value);
                }
            }
            rows.push(line);
        }
        rows
    }
}

impl Construct<Series, ChartOptions> for PieChart {
    fn construct(data: Series, options: ChartOptions) -> Result<Self, ChartError> {
        Self::new(data, options)
    }
}

impl Chart for PieChart {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn render(&self) -> String {
        frame::framed(&self.options, &self.rows())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::DataPoint;

    fn opts(width: usize) -> ChartOptions {
        ChartOptions::builder().width(width).build().expect("options")
    }

    #[test]
    fn apportion_uses_largest_remainder() {
        assert_eq!(apportion(&[1.0, 2.0, 3.0], 36), vec![6, 12, 18]);
        assert_eq!(apportion(&[1.0, 1.0, 1.0], 10), vec![4, 3, 3]);
        assert_eq!(apportion(&[0.0, 0.0], 10), vec![0, 0]);
        assert_eq!(apportion(&[], 10), Vec::<usize>::new());
    }

    #[test]
    fn strip_and_legend() {
        let pie = PieChart::new(Series::from_values([1.0, 2.0, 3.0]), opts(40)).expect("pie");
        let out = pie.render();
        let rows: Vec<&str> = out.lines().collect();
        let strip = format!("│ {}{}{} │", "█".repeat(6), "▓".repeat(12), "▒".repeat(18));
        assert_eq!(rows[2], strip);
        assert!(rows[4].starts_with("│ █ 1   16.7%"));
        assert!(rows[5].starts_with("│ ▓ 2   33.3%"));
        assert!(rows[6].starts_with("│ ▒ 3   50.0%"));
        assert!(out.lines().all(|r| r.chars().count() == 40));
    }

    #[test]
    fn negative_slice_is_rejected() {
        let data = Series::new(vec![DataPoint::new("ok", 1.0), DataPoint::new("debt", -2.0)]);
        let err = PieChart::new(data, opts(40)).unwrap_err();
        match err {
            ChartError::InvalidData(msg) => assert!(msg.contains("debt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_total_has_no_data() {
        let pie = PieChart::new(Series::from_values([0.0, 0.0]), opts(30)).expect("pie");
        assert!(pie.render().contains("(no data)"));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let err = PieChart::new(Series::from_values([1e308, 1e308]), opts(30)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn values_that_do_not_fit_are_left_out() {
        let options = ChartOptions::builder()
            .width(20)
            .show_values(true)
            .build()
            .expect("options");
        let out = PieChart::new(Series::from_values([1.0, 2.0]), options)
            .expect("pie")
            .render();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[4], "│ █ 1   33.3%      │");
        assert_eq!(rows[5], "│ ▓ 2   66.7%      │");
        assert!(rows.iter().all(|r| r.chars().count() == 20));
    }

    #[test]
    fn values_follow_the_percentage() {
        let options = ChartOptions::builder()
            .width(40)
            .show_values(true)
            .decimals(0)
            .build()
            .expect("options");
        let data = Series::new(vec![DataPoint::new("rent", 3.0), DataPoint::new("food", 1.0)]);
        let out = PieChart::new(data, options).expect("pie").render();
        assert!(out.contains("│ █ rent   75%  (3)"));
        assert!(out.contains("│ ▓ food   25%  (1)"));
    }
}

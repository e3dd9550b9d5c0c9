//! Horizontal bar chart: one row per point, bar length proportional to the
//! largest positive value.

use std::any::Any;

use crate::{
    charts::{
        Chart, Construct,
        frame::{self, Line, RowLayout, cells_for},
    },
    core::{config::ChartOptions, constants::BAR_SYMBOL, data::Series, error::ChartError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    data: Series,
    options: ChartOptions,
}

impl BarChart {
    pub const KIND: &'static str = "bar";

    #[must_use]
    pub fn new(data: Series, options: ChartOptions) -> Self {
        Self { data, options }
    }

    #[must_use]
    pub fn data(&self) -> &Series {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    fn rows(&self) -> Vec<Line> {
        if self.data.is_empty() {
            return frame::no_data();
        }
        let layout = RowLayout::of(&self.data, &self.options);
        let glyph = self.options.symbol.unwrap_or(BAR_SYMBOL);
        let color = self.options.color.as_ref();
        let max = self
            .data
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max);

        self.data
            .iter()
            .map(|p| {
                let len = if max > 0.0 && p.value > 0.0 {
                    cells_for(p.value / max, layout.track)
                } else {
                    0
                };
                let mut line = Line::new();
                line.push_spaces(1);
                line.push_padded(&p.label, layout.label);
                line.push_spaces(1);
                line.push_run(glyph, len, color);
                line.push_spaces(layout.track - len);
                layout.push_value(&mut line, p.value, self.options.decimals);
                line
            })
            .collect()
    }
}

impl Construct<Series, ChartOptions> for BarChart {
    fn construct(data: Series, options: ChartOptions) -> Result<Self, ChartError> {
        Ok(Self::new(data, options))
    }
}

impl Chart for BarChart {
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
    fn bars_scale_to_the_largest_value() {
        let data = Series::new(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]);
        let out = BarChart::new(data, opts(20)).render();
        let rows: Vec<&str> = out.lines().collect();
        // top, blank, a, b, blank, bottom
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], "│ a ███████        │");
        assert_eq!(rows[3], "│ b ██████████████ │");
    }

    #[test]
    fn non_positive_values_draw_empty_bars() {
        let data = Series::from_values([-3.0, 0.0]);
        let out = BarChart::new(data, opts(20)).render();
        assert!(!out.contains('█'));
    }

    #[test]
    fn values_are_right_aligned_after_the_track() {
        let data = Series::from_values([5.0, 10.0]);
        let options = ChartOptions::builder()
            .width(24)
            .show_values(true)
            .symbol('=')
            .build()
            .expect("options");
        let out = BarChart::new(data, options).render();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[2], "│ 1 =======        5.0 │");
        assert_eq!(rows[3], "│ 2 ============= 10.0 │");
    }

    #[test]
    fn huge_values_keep_the_bar_inside_the_frame() {
        let data = Series::new(vec![DataPoint::new("a", 1e12)]);
        let options = ChartOptions::builder()
            .width(20)
            .show_values(true)
            .build()
            .expect("options");
        let out = BarChart::new(data, options).render();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[2], "│ a ██████████████ │");
        assert!(rows.iter().all(|r| r.chars().count() == 20));
    }

    #[test]
    fn empty_series_says_so() {
        let out = BarChart::new(Series::default(), opts(20)).render();
        assert!(out.contains("(no data)"));
    }
}

//! Dot chart: one row per point, a single marker placed on a track that
//! spans the series minimum to maximum.

use std::any::Any;

use crate::{
    charts::{
        Chart, Construct,
        frame::{self, Line, RowLayout, cells_for},
    },
    core::{
        bounds::value_bounds,
        config::ChartOptions,
        constants::{DOT_SYMBOL, DOT_TRACK},
        data::Series,
        error::ChartError,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct DotChart {
    data: Series,
    options: ChartOptions,
}

impl DotChart {
    pub const KIND: &'static str = "dot";

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
        let glyph = self.options.symbol.unwrap_or(DOT_SYMBOL);
        let color = self.options.color.as_ref();
        let (lo, hi) = value_bounds(&self.data);

        self.data
            .iter()
            .map(|p| {
                let mut line = Line::new();
                line.push_spaces(1);
                line.push_padded(&p.label, layout.label);
                line.push_spaces(1);
                if layout.track > 0 {
                    let at = cells_for((p.value - lo) / (hi - lo), layout.track - 1);
                    line.push_run(DOT_TRACK, at, None);
                    line.push_run(glyph, 1, color);
                    line.push_run(DOT_TRACK, layout.track - at - 1, None);
                }
                layout.push_value(&mut line, p.value, self.options.decimals);
                line
            })
            .collect()
    }
}

impl Construct<Series, ChartOptions> for DotChart {
    fn construct(data: Series, options: ChartOptions) -> Result<Self, ChartError> {
        Ok(Self::new(data, options))
    }
}

impl Chart for DotChart {
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

    fn opts(width: usize) -> ChartOptions {
        ChartOptions::builder().width(width).build().expect("options")
    }

    #[test]
    fn markers_span_min_to_max() {
        let out = DotChart::new(Series::from_values([1.0, 3.0, 2.0]), opts(20)).render();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[2], "│ 1 ●············· │");
        assert_eq!(rows[3], "│ 2 ·············● │");
        assert_eq!(rows[4], "│ 3 ·······●······ │");
    }

    #[test]
    fn flat_series_sits_in_the_middle() {
        let out = DotChart::new(Series::from_values([4.0]), opts(20)).render();
        let row = out.lines().nth(2).expect("row");
        assert_eq!(row, "│ 1 ·······●······ │");
    }

    #[test]
    fn custom_symbol_and_values() {
        let options = ChartOptions::builder()
            .width(20)
            .symbol('o')
            .show_values(true)
            .decimals(0)
            .build()
            .expect("options");
        let out = DotChart::new(Series::from_values([0.0, 10.0]), options).render();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[2], "│ 1 o··········  0 │");
        assert_eq!(rows[3], "│ 2 ··········o 10 │");
    }
}

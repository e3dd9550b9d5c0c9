//! Public-facing crate root – re-exports + one-shot helper.

pub mod charts;
pub mod cli;
pub mod core;
pub mod factory;
pub mod telemetry;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{ChartOptions, ChartOptionsBuilder},
    data::{DataPoint, ParseSeriesError, Series, parse_values, read_series},
    error::{ChartError, ConfigError},
};

pub use charts::{BarChart, Chart, Construct, DotChart, PieChart};
pub use factory::{ChartFactory, Constructor, builtin_factory, create};

/// Render a built-in chart sized to the current terminal and print it.
///
/// # Errors
/// Unknown chart type, or whatever the chosen variant rejects.
pub fn print_chart(kind: &str, data: Series, title: &str) -> Result<(), ChartError> {
    let options = ChartOptions::builder()
        .title(title)
        .width(crate::core::bounds::terminal_chart_width())
        .build()?;
    let chart = create(kind, data, options)?;
    print!("{}", chart.render());
    Ok(())
}

//! Aggregates the data/options layer shared by every chart.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{ChartOptions, ChartOptionsBuilder};
pub use constants::{DECIMAL_PRECISION, DEFAULT_CHART_WIDTH, MAX_DECIMALS, MIN_CHART_WIDTH};
pub use data::{DataPoint, ParseSeriesError, Series};
pub use error::{ChartError, ConfigError};

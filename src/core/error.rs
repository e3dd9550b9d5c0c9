//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, data::ParseSeriesError};

/// Precise option faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chart width must be at least {min} columns, got {got}")]
    TooNarrow { min: usize, got: usize },
    #[error("at most {max} decimals are supported, got {got}")]
    TooManyDecimals { max: usize, got: usize },
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No variant is registered under the requested identifier.  Carries the
    /// identifier exactly as the caller spelled it.
    #[error("unknown chart type: {0}")]
    UnknownChartType(String),
    /// Raised by a variant constructor that cannot draw the given data.
    #[error("invalid chart data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseSeriesError),
    /// Option validation, colour parsing included.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

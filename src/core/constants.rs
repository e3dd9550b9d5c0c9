//! A collection of constants.

/// Charts must be at least 14 characters wide
pub const MIN_CHART_WIDTH: usize = 14;
/// Used when no width is given and no terminal is attached
pub const DEFAULT_CHART_WIDTH: usize = 80;

/// Numbers are rounded to the first decimal place by default.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;
/// More decimals than this is never useful in a terminal cell
pub const MAX_DECIMALS: usize = 6;

/// Default glyph for bar charts
pub const BAR_SYMBOL: char = '█';
/// Default glyph for dot charts
pub const DOT_SYMBOL: char = '●';
/// Empty track cell on dot charts
pub const DOT_TRACK: char = '·';
/// Slice glyphs for pie charts, cycled when there are more slices
pub const PIE_SYMBOLS: [char; 6] = ['█', '▓', '▒', '░', '#', '*'];

/// Shown inside the frame when the series has nothing to draw
pub const NO_DATA: &str = "(no data)";

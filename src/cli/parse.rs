use clap::{Parser, Subcommand};

use crate::core::constants::DECIMAL_PRECISION;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-chart",
    about = "Bar, dot and pie charts for the terminal"
)]
pub struct Cli {
    /// Log dispatch decisions to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a chart from a file, stdin or inline values
    Render(RenderArgs),
    /// List the chart types that can be rendered
    Types,
    /// Show available color names / hex syntax
    Colors,
    /// Draw every chart type over random data
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// `ascii-chart render …`
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Chart type, any casing (see `types`)
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// `label,value` rows (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Inline values instead of FILE, e.g. `rent=900,food=350`
    #[arg(long, value_name = "LIST", conflicts_with = "file")]
    pub values: Option<String>,

    /// Chart title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Optional subtitle
    #[arg(short, long)]
    pub subtitle: Option<String>,

    /// Frame width in columns (terminal width if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,

    /// Glyph to draw with instead of the chart's default
    #[arg(long)]
    pub symbol: Option<char>,

    /// Print each value next to its bar, dot or slice
    #[arg(long)]
    pub show_values: bool,

    /// Decimals for printed numbers
    #[arg(long, default_value_t = DECIMAL_PRECISION)]
    pub decimals: usize,
}

/// `ascii-chart demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 6)]
    pub points: usize,
    /// Fixed seed for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(short, long)]
    pub width: Option<usize>,
    #[arg(long)]
    pub color: Option<String>,
}

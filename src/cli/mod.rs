mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::{core::error::ChartError, telemetry};

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    telemetry::init_tracing(cli.debug);
    match cli.cmd {
        parse::Command::Render(a) => handlers::render(a),
        parse::Command::Types => {
            handlers::types();
            Ok(())
        }
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}

//! lpaint - Command-line tool for running paint scripts and rendering the result

use std::process::ExitCode;

use env_logger::Env;
use layerpaint::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    cli::run()
}

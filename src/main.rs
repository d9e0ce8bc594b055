//! Plot the matvec benchmark results sitting in the working directory.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use mvplot::config::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    match mvplot::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

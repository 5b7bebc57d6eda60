use std::process::ExitCode;

use argsgen::args::Args;
use argsgen::{commands, logging, visuals};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.output);

    match commands::run(&args) {
        Ok(stats) => {
            if args.output.summary {
                visuals::print_summary(&stats);
                visuals::print_detailed(&stats);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use percentile_export::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}

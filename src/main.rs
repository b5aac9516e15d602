//! Spell out numbers in German.
//!
//! Prints `<input>: <words>` for every number given on the command line and
//! exits with a failure code if any of them could not be converted.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<ExitCode> {
    cli::Cli::parse().run()
}

use std::{
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

mod terminal;

use clap::{ArgAction, CommandFactory};
use serde::Serialize;
use terminal::Colorize;
use tracing::instrument;
use zahlwort::{Config, Converter};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also read whitespace-separated numbers from standard input
    #[arg(long)]
    stdin: bool,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Numbers to spell out, as decimal digit strings
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    numbers: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))?,
            None => Config::default(),
        };

        let mut inputs = self.numbers;
        if self.stdin {
            inputs.extend(read_numbers(io::stdin().lock())?);
        }

        if inputs.is_empty() {
            eprintln!("{}", Self::command().render_usage());
            return Ok(ExitCode::FAILURE);
        }

        let outcomes = convert_all(&Converter::new(config), inputs);

        match self.output {
            OutputFormat::Text => {
                for outcome in &outcomes {
                    println!("{}", outcome.to_line());
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        }

        if outcomes.iter().any(Outcome::is_error) {
            Ok(ExitCode::FAILURE)
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the results
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// The result of converting one input, in the shape it is reported.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Outcome {
    input: String,
    #[serde(flatten)]
    result: Spelled,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Spelled {
    Words(String),
    Error(String),
}

impl Outcome {
    const fn is_error(&self) -> bool {
        matches!(self.result, Spelled::Error(_))
    }

    fn to_line(&self) -> String {
        match &self.result {
            Spelled::Words(words) => format!("{}: {words}", self.input),
            Spelled::Error(message) => format!("{}: {} {message}", self.input, "Error:".error()),
        }
    }
}

#[instrument(level = "info", skip_all, fields(count = inputs.len()))]
fn convert_all(converter: &Converter, inputs: Vec<String>) -> Vec<Outcome> {
    inputs
        .into_iter()
        .map(|input| {
            let result = match converter.convert(&input) {
                Ok(words) => Spelled::Words(words),
                Err(e) => Spelled::Error(e.to_string()),
            };
            Outcome { input, result }
        })
        .collect()
}

fn read_numbers(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        numbers.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(numbers)
}

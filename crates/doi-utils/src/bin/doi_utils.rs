//! doi-utils command line
//!
//! Thin wrapper over the library: one result per input, plain or JSON.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use doi_utils::{
    build_url, is_open_funder_registry, normalize, parse, validate, NormalizeOptions,
};

#[derive(Parser)]
#[command(name = "doi-utils", version, about = "Normalize and validate DOIs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Only accept doi: / doi.org forms and bare parts
    #[arg(long, global = true)]
    strict: bool,

    /// Emit JSON lines instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical DOI part
    Normalize { inputs: Vec<String> },
    /// Check that each input contains a valid DOI
    Validate { inputs: Vec<String> },
    /// Print the https://doi.org/ URL
    Url { inputs: Vec<String> },
    /// Check for the Open Funder Registry prefix
    Funder { inputs: Vec<String> },
    /// Split into prefix and suffix
    Part { inputs: Vec<String> },
}

#[derive(Serialize)]
struct Output<'a> {
    input: &'a str,
    result: Value,
}

/// Lines to print and whether any input failed
#[derive(Debug, Default, PartialEq)]
struct Report {
    lines: Vec<String>,
    failed: bool,
}

impl Report {
    fn push(&mut self, json: bool, input: &str, result: Value, plain: String) {
        if !json {
            self.lines.push(plain);
            return;
        }
        match serde_json::to_string(&Output { input, result }) {
            Ok(line) => self.lines.push(line),
            Err(e) => tracing::error!("failed to serialize result: {}", e),
        }
    }
}

fn run(cli: &Cli) -> Report {
    let options = NormalizeOptions { strict: cli.strict };
    let mut report = Report::default();

    match &cli.command {
        Command::Normalize { inputs } => {
            for input in inputs {
                let doi = normalize(input, options);
                report.failed |= doi.is_none();
                let plain = doi.clone().unwrap_or_default();
                report.push(cli.json, input, json!(doi), plain);
            }
        }
        Command::Validate { inputs } => {
            for input in inputs {
                let valid = validate(input, options);
                report.failed |= !valid;
                report.push(cli.json, input, json!(valid), valid.to_string());
            }
        }
        Command::Url { inputs } => {
            for input in inputs {
                let url = build_url(input);
                report.failed |= url.is_none();
                let plain = url.clone().unwrap_or_default();
                report.push(cli.json, input, json!(url), plain);
            }
        }
        Command::Funder { inputs } => {
            for input in inputs {
                let funder = is_open_funder_registry(input);
                report.push(cli.json, input, json!(funder), funder.to_string());
            }
        }
        Command::Part { inputs } => {
            for input in inputs {
                match parse(input, options) {
                    Ok(part) => {
                        let plain = format!("{}\t{}", part.prefix, part.suffix);
                        report.push(cli.json, input, json!(part), plain);
                    }
                    Err(e) => {
                        report.failed = true;
                        tracing::warn!(input = input.as_str(), "{}", e);
                        if cli.json {
                            report.push(true, input, json!({ "error": e.to_string() }), String::new());
                        }
                    }
                }
            }
        }
    }

    report
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let report = run(&Cli::parse());
    for line in &report.lines {
        println!("{}", line);
    }

    if report.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

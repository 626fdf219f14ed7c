//! Grade a wiring file against one of the standard transformer banks.
//!
//! ```bash
//! grader list
//! grader count delta-delta-240
//! grader check open-wye-open-delta wiring.json --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wiregrade::wiring::read_connections;
use wiregrade::{catalog, find, Result};

/// Transformer bank wiring grader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available scenarios
    List,
    /// Print how many wirings count as correct for a scenario
    Count {
        /// Scenario id, as shown by `list`
        scenario: String,
    },
    /// Grade a JSON list of wires
    Check {
        /// Scenario id, as shown by `list`
        scenario: String,
        /// JSON file of wires: `[{"from": .., "to": ..}, ..]` or `[[from, to], ..]`
        #[arg(value_name = "WIRING_FILE")]
        wiring: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::List => {
            for scenario in catalog() {
                println!("{:<22} {} [{}]", scenario.id, scenario.title, scenario.transformer_hints.join(", "));
            }
            Ok(true)
        }
        Command::Count { scenario } => {
            println!("{}", find(&scenario)?.configurations.len());
            Ok(true)
        }
        Command::Check { scenario, wiring, json } => {
            let scenario = find(&scenario)?;
            let connections = read_connections(&wiring)?;
            tracing::info!(scenario = %scenario.id, wires = connections.len(), "grading");

            let result = scenario.validate(&connections);
            if json {
                println!("{}", result.to_json(true)?);
            } else {
                println!("{}: {} ({:.0}%)", scenario.title, if result.passed { "PASS" } else { "FAIL" }, result.score);
                for message in result.messages() {
                    println!("  {message}");
                }
            }
            Ok(result.passed)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

//! lem-in — move N agents from `##start` to `##end` in the fewest steps.
//!
//! ```bash
//! # Echo the input, then the movement log
//! lem-in colony.txt
//!
//! # Movement log only, with step numbers and the flow value
//! lem-in --quiet --step-headers --report-flow colony.txt
//!
//! # Machine-readable moves, schedule re-checked before printing
//! lem-in --format csv --verify colony.txt > moves.csv
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=info` (or `debug`) for detail.

mod pipeline;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use lem_core::{OutputFormat, RunConfig};
use lem_graph::load_farm;

/// Route a colony of agents through single-occupancy rooms.
#[derive(Parser, Debug)]
#[command(name = "lem-in")]
#[command(version, about, long_about = None)]
struct Args {
    /// Colony description file
    file: PathBuf,

    /// Movement log format: text or csv
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Do not echo the input before the movement log
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Prefix each step line with `Step n:`
    #[arg(long)]
    step_headers: bool,

    /// Print `Max flow: F` before the movement log
    #[arg(long)]
    report_flow: bool,

    /// Replay the schedule and check every movement rule before printing
    #[arg(long)]
    verify: bool,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            output_format:   self.format,
            // Echo is on by default for text; csv never echoes.
            echo_input:      !self.quiet && self.format == OutputFormat::Text,
            step_headers:    self.step_headers,
            report_flow:     self.report_flow,
            verify_schedule: self.verify,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<()> {
    let config = args.run_config();
    config.validate()?;

    let farm = load_farm(&args.file)?;
    let stdout = std::io::stdout();
    pipeline::run(&config, &farm, stdout.lock())
}

//! Graph → flow → lanes → schedule → emitter.

use std::io::Write;

use anyhow::{Context, Result};

use lem_core::{OutputFormat, RunConfig};
use lem_flow::{EdmondsKarp, find_lanes};
use lem_graph::AntFarm;
use lem_output::{CsvEmitter, RunSummary, StepEmitter, TextEmitter, TextOptions, emit_schedule};
use lem_schedule::Scheduler;

/// Solve `farm` and write its movement log to `out` as `config` asks.
pub fn run<W: Write>(config: &RunConfig, farm: &AntFarm, out: W) -> Result<()> {
    let colony = &farm.colony;
    let lanes = find_lanes(&EdmondsKarp, colony).context("computing lanes")?;
    let max_flow = lanes.len() as u32;
    for lane in &lanes {
        log::debug!("lane {}: {}", lane.id.0, lane.describe(colony));
    }

    let schedule = Scheduler.plan(lanes, farm.agents)?;
    if config.verify_schedule {
        schedule.verify(colony).context("schedule failed verification")?;
        log::info!("schedule verified: {} moves", schedule.total_moves());
    }

    let summary = RunSummary {
        agents:     farm.agents,
        max_flow,
        lanes_used: schedule.assignment().lanes_used(),
        steps:      schedule.step_count(),
        input:      &farm.lines,
    };

    match config.output_format {
        OutputFormat::Text => {
            let options = TextOptions {
                echo_input:   config.echo_input,
                report_flow:  config.report_flow,
                step_headers: config.step_headers,
            };
            emit(&schedule, farm, &summary, &mut TextEmitter::new(out, options))?;
        }
        OutputFormat::Csv => {
            emit(&schedule, farm, &summary, &mut CsvEmitter::from_writer(out)?)?;
        }
    }

    Ok(())
}

fn emit<E: StepEmitter>(
    schedule: &lem_schedule::Schedule,
    farm:     &AntFarm,
    summary:  &RunSummary<'_>,
    emitter:  &mut E,
) -> Result<()> {
    emit_schedule(schedule, &farm.colony, summary, emitter).context("writing movement log")?;
    Ok(())
}

//! Driving an emitter from a schedule.

use lem_graph::Colony;
use lem_schedule::Schedule;

use crate::{MoveRow, OutputResult, RunSummary, StepEmitter};

/// Feed `schedule` to `emitter`: `begin`, one `write_step` per step with at
/// least one move, then `finish`.  Returns the number of step lines written.
pub fn emit_schedule<E: StepEmitter>(
    schedule: &Schedule,
    colony:   &Colony,
    summary:  &RunSummary<'_>,
    emitter:  &mut E,
) -> OutputResult<u32> {
    emitter.begin(summary)?;

    let mut written = 0;
    let mut rows: Vec<MoveRow<'_>> = Vec::new();
    for (step, moves) in schedule.iter() {
        if moves.is_empty() {
            continue;
        }
        rows.clear();
        rows.extend(moves.iter().map(|m| MoveRow {
            step:  step.0,
            agent: m.agent.number(),
            room:  colony.name(m.room),
        }));
        emitter.write_step(step.0, &rows)?;
        written += 1;
    }

    emitter.finish()?;
    log::debug!(
        "emitted {written} of {} steps ({} agents on {} lanes)",
        summary.steps,
        summary.agents,
        summary.lanes_used
    );
    Ok(written)
}

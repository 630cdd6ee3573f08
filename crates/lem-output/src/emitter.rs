//! The `StepEmitter` trait implemented by all backends.

use crate::{MoveRow, OutputResult, RunSummary};

/// Receives a schedule one step at a time.
pub trait StepEmitter {
    /// Called once before the first step.
    fn begin(&mut self, _summary: &RunSummary<'_>) -> OutputResult<()> {
        Ok(())
    }

    /// Write every move of one step.  `moves` is never empty and is in
    /// ascending agent order.
    fn write_step(&mut self, step: u32, moves: &[MoveRow<'_>]) -> OutputResult<()>;

    /// Flush underlying handles.
    ///
    /// Calling it again after the first time does nothing.
    fn finish(&mut self) -> OutputResult<()>;
}

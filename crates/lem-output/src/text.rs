//! Plain-text movement log.
//!
//! ```text
//! 3
//! ##start
//! ...            <- input echo (optional)
//!
//! L1-a L2-b      <- step 1
//! L1-end L2-end  <- step 2
//! ```

use std::io::Write;

use crate::{MoveRow, OutputResult, RunSummary, StepEmitter};

/// What `TextEmitter` prints besides the step lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Echo the accepted input lines, then a blank line.
    pub echo_input:   bool,
    /// `Max flow: F` line before the steps.
    pub report_flow:  bool,
    /// `Step n: ` prefix on every step line.
    pub step_headers: bool,
}

pub struct TextEmitter<W: Write> {
    out:      W,
    options:  TextOptions,
    finished: bool,
}

impl<W: Write> TextEmitter<W> {
    pub fn new(out: W, options: TextOptions) -> Self {
        Self { out, options, finished: false }
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepEmitter for TextEmitter<W> {
    fn begin(&mut self, summary: &RunSummary<'_>) -> OutputResult<()> {
        if self.options.echo_input {
            for line in summary.input {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;
        }
        if self.options.report_flow {
            writeln!(self.out, "Max flow: {}", summary.max_flow)?;
        }
        Ok(())
    }

    fn write_step(&mut self, step: u32, moves: &[MoveRow<'_>]) -> OutputResult<()> {
        if self.options.step_headers {
            write!(self.out, "Step {step}: ")?;
        }
        for (i, mv) in moves.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "L{}-{}", mv.agent, mv.room)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

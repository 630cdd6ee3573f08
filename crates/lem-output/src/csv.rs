//! CSV movement log: one `step,agent,room` row per move.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{MoveRow, OutputResult, StepEmitter};

pub struct CsvEmitter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvEmitter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvEmitter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(["step", "agent", "room"])?;
        Ok(Self { rows, finished: false })
    }
}

impl<W: Write> StepEmitter for CsvEmitter<W> {
    fn write_step(&mut self, step: u32, moves: &[MoveRow<'_>]) -> OutputResult<()> {
        for mv in moves {
            self.rows.write_record(&[
                step.to_string(),
                mv.agent.to_string(),
                mv.room.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

//! `lem-output` — rendering a schedule as a movement log.
//!
//! Two backends implement [`StepEmitter`]:
//!
//! | Emitter        | Output                                                  |
//! |----------------|---------------------------------------------------------|
//! | [`TextEmitter`] | `L<n>-<room>` tokens, one line per step                |
//! | [`CsvEmitter`]  | `step,agent,room` rows                                 |
//!
//! Both are driven by [`emit_schedule`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_output::{TextEmitter, TextOptions, RunSummary, emit_schedule};
//!
//! let mut out = TextEmitter::new(std::io::stdout().lock(), TextOptions::default());
//! emit_schedule(&schedule, &colony, &summary, &mut out)?;
//! ```

pub mod csv;
pub mod emit;
pub mod emitter;
pub mod error;
pub mod row;
pub mod text;

#[cfg(test)]
mod tests;

pub use self::csv::CsvEmitter;
pub use emit::emit_schedule;
pub use emitter::StepEmitter;
pub use error::{OutputError, OutputResult};
pub use row::{MoveRow, RunSummary};
pub use text::{TextEmitter, TextOptions};

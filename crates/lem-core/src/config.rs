//! Run configuration.
//!
//! The binary builds a `RunConfig` from its command-line flags; library
//! callers (tests, other front ends) construct one directly.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// How the movement log is rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputFormat {
    /// `L<n>-<room>` tokens, one line per step.
    #[default]
    Text,
    /// `step,agent,room` rows.
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv  => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv"  => Ok(OutputFormat::Csv),
            other  => Err(CoreError::Config(format!("unknown output format '{other}'"))),
        }
    }
}

/// Top-level run configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub output_format: OutputFormat,

    /// Print the accepted input lines (and a blank line) before the
    /// movement log.  Text format only.
    pub echo_input: bool,

    /// Prefix every step line with `Step n:`.
    pub step_headers: bool,

    /// Print `Max flow: F` before the movement log.
    pub report_flow: bool,

    /// Re-check room and tunnel occupancy on the finished schedule before
    /// emitting it.
    pub verify_schedule: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_format:   OutputFormat::Text,
            echo_input:      true,
            step_headers:    false,
            report_flow:     false,
            verify_schedule: false,
        }
    }
}

impl RunConfig {
    /// Reject flag combinations that have no meaning for the chosen format.
    pub fn validate(&self) -> CoreResult<()> {
        if self.output_format != OutputFormat::Csv {
            return Ok(());
        }
        let text_only = [
            (self.echo_input,   "input echo"),
            (self.step_headers, "step headers"),
            (self.report_flow,  "max-flow report"),
        ];
        match text_only.iter().find(|(on, _)| *on) {
            Some((_, what)) => Err(CoreError::Config(format!(
                "{what} is only available in text output"
            ))),
            None => Ok(()),
        }
    }
}

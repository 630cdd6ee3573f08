//! Plain data handed to emitters.

/// One agent entering one room, with names already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow<'a> {
    pub step:  u32,
    /// 1-based agent number.
    pub agent: u32,
    pub room:  &'a str,
}

/// Facts about the run, written before the first step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary<'a> {
    pub agents:     u32,
    pub max_flow:   u32,
    pub lanes_used: usize,
    pub steps:      u32,
    /// Accepted input lines, for front ends that echo them.
    pub input:      &'a [String],
}

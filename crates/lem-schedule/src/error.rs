use lem_core::Step;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no path connects start to end")]
    Unreachable,

    #[error("schedule conflict at step {}: {what}", step.0)]
    Conflict { step: Step, what: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

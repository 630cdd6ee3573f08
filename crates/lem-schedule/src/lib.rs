//! `lem-schedule` — assigning agents to lanes and steps.
//!
//! # Model
//!
//! Every lane is a single-file pipe: agents enter one step apart and can
//! never overtake.  An agent in queue slot `s` of a lane of length `len`
//! stands in room `p` of the lane at step `s + p` and arrives at step
//! `s + len`.  A lane carrying `k` agents is therefore busy for
//! `len + k − 1` steps, and the run takes the maximum of that over all lanes.
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`assign`]     | `Scheduler`, `Assignment`, `AgentRoute`             |
//! | [`schedule`]   | `Schedule`, `Move`, occupancy verification          |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                |

pub mod assign;
pub mod error;
pub mod schedule;


pub use assign::{AgentRoute, Assignment, Scheduler};
pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{Move, Schedule};

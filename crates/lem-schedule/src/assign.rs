//! Greedy lane assignment.
//!
//! Agents are handed out one at a time, each to the lane where it would
//! arrive earliest: `load(L) + len(L)`.  Equal arrival steps go to the lane
//! carrying fewer agents, then to the lower lane id.  With equal arrival,
//! fewer agents means a longer lane, so a tie between lanes of different
//! length always goes to the longer one; lanes of equal length and load go
//! by id, which follows the shortest-first lane order.  Since every lane is
//! a FIFO pipe, this is least-loaded makespan scheduling and yields the
//! optimal `max(len + k − 1)` for the given lane set; the tie keys only
//! decide which of several optimal assignments is produced.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lem_core::{AgentId, LaneId, Step};
use lem_flow::Lane;

use crate::{Schedule, ScheduleError, ScheduleResult};

// ── AgentRoute ────────────────────────────────────────────────────────────────

/// Where and when one agent travels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRoute {
    pub agent: AgentId,
    pub lane:  LaneId,
    /// Position in the lane's queue; 0 departs at step 1.
    pub slot:  u32,
}

impl AgentRoute {
    /// Step at which the agent enters the end room of a lane of `len`
    /// tunnels.
    #[inline]
    pub fn arrival(&self, len: usize) -> Step {
        Step(self.slot + len as u32)
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// Output of [`Scheduler::assign`].
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    /// One entry per agent, indexed by `AgentId`.
    pub routes: Vec<AgentRoute>,
    /// Agents per lane, indexed by `LaneId`.
    pub load:   Vec<u32>,
}

impl Assignment {
    /// Steps needed to drain every lane: `max(len + load − 1)` over lanes
    /// with at least one agent.
    pub fn makespan(&self, lanes: &[Lane]) -> u32 {
        lanes
            .iter()
            .zip(&self.load)
            .filter(|&(_, &k)| k > 0)
            .map(|(lane, &k)| lane.len() as u32 + k - 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of lanes that carry at least one agent.
    pub fn lanes_used(&self) -> usize {
        self.load.iter().filter(|&&k| k > 0).count()
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Turns a lane set and an agent count into a [`Schedule`].
///
/// Stateless; the unit struct keeps call sites reading like the other
/// pipeline stages (`EdmondsKarp.solve(..)`, `Scheduler.plan(..)`).
pub struct Scheduler;

impl Scheduler {
    /// Distribute `agents` over `lanes` by earliest projected arrival.
    ///
    /// With no lanes every agent is left unassigned; callers that need a
    /// schedule should use [`plan`](Self::plan), which reports that case as
    /// [`ScheduleError::Unreachable`].
    pub fn assign(&self, lanes: &[Lane], agents: u32) -> Assignment {
        let mut load = vec![0u32; lanes.len()];
        let mut routes = Vec::with_capacity(agents as usize);
        if lanes.is_empty() {
            return Assignment { routes, load };
        }

        // Min-heap on (arrival if chosen next, current load, lane id).
        let mut heap: BinaryHeap<Reverse<(u32, u32, u32)>> = lanes
            .iter()
            .enumerate()
            .map(|(i, lane)| Reverse((lane.len() as u32, 0, i as u32)))
            .collect();

        for a in 0..agents {
            let Some(Reverse((arrival, slot, lane))) = heap.pop() else {
                break;
            };
            routes.push(AgentRoute { agent: AgentId(a), lane: LaneId(lane), slot });
            load[lane as usize] = slot + 1;
            heap.push(Reverse((arrival + 1, slot + 1, lane)));
        }

        for (lane, &k) in lanes.iter().zip(&load) {
            log::debug!("lane {} (len {}): {} agents", lane.id.0, lane.len(), k);
        }
        Assignment { routes, load }
    }

    /// Assign agents and expand the assignment into a per-step schedule.
    pub fn plan(&self, lanes: Vec<Lane>, agents: u32) -> ScheduleResult<Schedule> {
        if lanes.is_empty() {
            return Err(ScheduleError::Unreachable);
        }
        let assignment = self.assign(&lanes, agents);
        let schedule = Schedule::from_assignment(lanes, assignment);
        log::info!(
            "{} agents over {} of {} lanes in {} steps",
            agents,
            schedule.assignment().lanes_used(),
            schedule.lanes().len(),
            schedule.step_count()
        );
        Ok(schedule)
    }
}

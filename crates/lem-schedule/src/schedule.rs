//! The expanded per-step movement schedule.

use std::collections::HashMap;

use lem_core::{AgentId, RoomId, Step, TunnelId};
use lem_flow::Lane;
use lem_graph::Colony;

use crate::{Assignment, ScheduleError, ScheduleResult};

/// One agent entering one room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub agent: AgentId,
    pub room:  RoomId,
}

/// Moves grouped by step, step 1 first.
///
/// Within a step, moves are in ascending agent order.  Agents that are
/// waiting at start or already at end contribute nothing to a step.
#[derive(Clone, Debug)]
pub struct Schedule {
    /// `steps[t.slot()]` holds the moves of step `t`.
    steps:      Vec<Vec<Move>>,
    lanes:      Vec<Lane>,
    assignment: Assignment,
}

impl Schedule {
    /// Expand `assignment` into concrete moves.
    ///
    /// The agent in slot `s` of lane `L` enters `L.rooms[p]` at step `s + p`
    /// for every `p ≥ 1`.
    pub fn from_assignment(lanes: Vec<Lane>, assignment: Assignment) -> Self {
        let step_count = assignment.makespan(&lanes) as usize;
        let mut steps: Vec<Vec<Move>> = vec![Vec::new(); step_count];

        // Routes are in agent order, so each step's list stays sorted.
        for route in &assignment.routes {
            let lane = &lanes[route.lane.index()];
            for (p, &room) in lane.rooms.iter().enumerate().skip(1) {
                let step = Step(route.slot + p as u32);
                steps[step.slot()].push(Move { agent: route.agent, room });
            }
        }

        Schedule { steps, lanes, assignment }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Total steps until the last agent arrives (the makespan).
    pub fn step_count(&self) -> u32 {
        self.steps.len() as u32
    }

    pub fn agent_count(&self) -> usize {
        self.assignment.routes.len()
    }

    pub fn total_moves(&self) -> usize {
        self.steps.iter().map(Vec::len).sum()
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Moves made during `step`; empty outside `1..=step_count`.
    pub fn moves_at(&self, step: Step) -> &[Move] {
        if step == Step::ZERO {
            return &[];
        }
        self.steps.get(step.slot()).map_or(&[], Vec::as_slice)
    }

    /// `(step, moves)` pairs in step order.
    pub fn iter(&self) -> impl Iterator<Item = (Step, &[Move])> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, moves)| (Step(i as u32 + 1), moves.as_slice()))
    }

    // ── Verification ──────────────────────────────────────────────────────

    /// Replay the schedule on `colony` and check every movement rule:
    ///
    /// - each move follows a tunnel from the agent's current room;
    /// - nobody re-enters start;
    /// - per step, no interior room holds two agents and no tunnel carries
    ///   two agents;
    /// - after the last step every agent is in the end room.
    ///
    /// The replay does not trust the lane arithmetic used to build the
    /// schedule, so it doubles as an independent check of it.
    pub fn verify(&self, colony: &Colony) -> ScheduleResult<()> {
        let mut position = vec![colony.start(); self.agent_count()];
        // Interior room → agent standing in it.
        let mut occupant: HashMap<RoomId, AgentId> = HashMap::new();

        for (step, moves) in self.iter() {
            let conflict = |what: String| ScheduleError::Conflict { step, what };
            let mut used_tunnels: HashMap<TunnelId, AgentId> = HashMap::new();
            let mut moved = vec![false; position.len()];

            // Leave first, so a room vacated this step can be re-entered
            // this step by the next agent in the queue.
            for mv in moves {
                let Some(&from) = position.get(mv.agent.index()) else {
                    return Err(conflict(format!("unknown agent {}", mv.agent.number())));
                };
                if std::mem::replace(&mut moved[mv.agent.index()], true) {
                    return Err(conflict(format!("agent {} moves twice", mv.agent.number())));
                }
                if occupant.get(&from) == Some(&mv.agent) {
                    occupant.remove(&from);
                }
            }

            for mv in moves {
                let from = position[mv.agent.index()];
                let agent = mv.agent.number();
                let Some(tunnel) = colony.tunnel_between(from, mv.room) else {
                    return Err(conflict(format!(
                        "agent {agent} jumps {} -> {} without a tunnel",
                        colony.name(from),
                        colony.name(mv.room)
                    )));
                };
                if mv.room == colony.start() {
                    return Err(conflict(format!("agent {agent} re-enters start")));
                }
                if let Some(other) = used_tunnels.insert(tunnel, mv.agent) {
                    return Err(conflict(format!(
                        "agents {} and {agent} share tunnel {}-{}",
                        other.number(),
                        colony.name(from),
                        colony.name(mv.room)
                    )));
                }
                if colony.is_interior(mv.room) {
                    if let Some(other) = occupant.insert(mv.room, mv.agent) {
                        return Err(conflict(format!(
                            "agents {} and {agent} both in room {}",
                            other.number(),
                            colony.name(mv.room)
                        )));
                    }
                }
                position[mv.agent.index()] = mv.room;
            }
        }

        if let Some(i) = position.iter().position(|&r| r != colony.end()) {
            return Err(ScheduleError::Conflict {
                step: Step(self.step_count()),
                what: format!("agent {} never reaches end", AgentId(i as u32).number()),
            });
        }
        Ok(())
    }
}

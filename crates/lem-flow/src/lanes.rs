//! Decomposing a saturated flow into lanes.
//!
//! After max flow, the forward arcs carrying one unit form F edge-disjoint
//! source → sink paths (plus possibly some closed cycles, which are
//! ignored).  Each extraction pass runs a BFS restricted to those arcs and
//! then cancels the flow on the path it found, so the next pass sees a
//! strictly smaller subgraph.  Because interior rooms are split with a unit
//! arc, the resulting lanes share no interior room and no tunnel.

use std::collections::VecDeque;

use lem_core::{ArcId, LaneId, RoomId};
use lem_graph::Colony;

use crate::network::{FlowNetwork, FlowNode};
use crate::solver::{FlowSolver, MaxFlow};
use crate::{FlowError, FlowResult};

// ── Lane ──────────────────────────────────────────────────────────────────────

/// One start → end path, as the ordered list of rooms visited.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub id:    LaneId,
    /// `rooms[0]` is start, `rooms[len]` is end.
    pub rooms: Vec<RoomId>,
}

impl Lane {
    /// Number of tunnels on the lane (= steps for one agent to cross it).
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len() - 1
    }

    /// Always `false`: a lane has at least one tunnel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.len() < 2
    }

    /// Rooms strictly between start and end.
    pub fn interior(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }

    /// Consecutive room pairs, i.e. the tunnels in travel order.
    pub fn hops(&self) -> impl Iterator<Item = (RoomId, RoomId)> + '_ {
        self.rooms.windows(2).map(|w| (w[0], w[1]))
    }

    /// Render as `start -> a -> end` using colony names.
    pub fn describe(&self, colony: &Colony) -> String {
        self.rooms
            .iter()
            .map(|&r| colony.name(r))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Run `solver` on `colony` and decompose the result into lanes.
pub fn find_lanes<S: FlowSolver>(solver: &S, colony: &Colony) -> FlowResult<Vec<Lane>> {
    let MaxFlow { value, mut network } = solver.solve(colony)?;
    extract_lanes(&mut network, value)
}

/// Pull `value` lanes out of a saturated `network`, consuming its flow.
///
/// Lanes are returned shortest first (ties keep discovery order) and their
/// `id`s follow that order.
pub fn extract_lanes(network: &mut FlowNetwork, value: u32) -> FlowResult<Vec<Lane>> {
    let mut lanes: Vec<Vec<RoomId>> = Vec::with_capacity(value as usize);
    let mut parent = vec![ArcId::INVALID; network.node_count()];

    for found in 0..value {
        let Some(arcs) = flow_path(network, &mut parent) else {
            return Err(FlowError::Decomposition { found, expected: value });
        };
        for &arc in &arcs {
            // Cancel the unit: the forward arc drops to 0, its partner back to 0.
            let pair = network.arc_pair[arc.index()];
            network.arc_flow[arc.index()]  -= 1;
            network.arc_flow[pair.index()] += 1;
        }
        lanes.push(rooms_along(network, &arcs));
    }

    // Stable: equal lengths keep discovery order.
    lanes.sort_by_key(|rooms| rooms.len());
    let lanes: Vec<Lane> = lanes
        .into_iter()
        .enumerate()
        .map(|(i, rooms)| Lane { id: LaneId(i as u32), rooms })
        .collect();

    for lane in &lanes {
        log::debug!("lane {}: {} tunnels", lane.id.0, lane.len());
    }
    Ok(lanes)
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// BFS from source to sink over forward arcs that carry flow.  Returns the
/// arcs of the path in travel order.
fn flow_path(network: &FlowNetwork, parent: &mut [ArcId]) -> Option<Vec<ArcId>> {
    parent.fill(ArcId::INVALID);
    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::new();
    visited[network.source.index()] = true;
    queue.push_back(network.source);

    'search: while let Some(node) = queue.pop_front() {
        for &arc in network.out_arcs(node) {
            let next = network.arc_to[arc.index()];
            if visited[next.index()]
                || !network.is_forward(arc)
                || network.arc_flow[arc.index()] <= 0
            {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = arc;
            if next == network.sink {
                break 'search;
            }
            queue.push_back(next);
        }
    }

    if !visited[network.sink.index()] {
        return None;
    }
    let mut arcs = Vec::new();
    let mut node: FlowNode = network.sink;
    while node != network.source {
        let arc = parent[node.index()];
        arcs.push(arc);
        node = network.arc_from[arc.index()];
    }
    arcs.reverse();
    Some(arcs)
}

/// Collapse a split-node arc path back into colony rooms.  `in(r) → out(r)`
/// arcs stay inside one room, so only tunnel arcs add a room.
fn rooms_along(network: &FlowNetwork, arcs: &[ArcId]) -> Vec<RoomId> {
    let mut rooms = vec![network.source.room()];
    for &arc in arcs {
        let room = network.arc_to[arc.index()].room();
        if rooms.last() != Some(&room) {
            rooms.push(room);
        }
    }
    rooms
}

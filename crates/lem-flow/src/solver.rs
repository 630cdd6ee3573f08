//! Max-flow trait and the default Edmonds–Karp implementation.
//!
//! # Pluggability
//!
//! Callers go through [`FlowSolver`], so an alternative (Dinic, a solver
//! that prefers short lanes over many lanes, …) can be swapped in without
//! touching lane extraction or scheduling.
//!
//! # Cost
//!
//! Every arc has unit capacity, so each breadth-first search finds a
//! shortest augmenting path and saturates it in one push.  At most F
//! searches run, each O(V + E): O(F·(V + E)) in total.

use std::collections::VecDeque;

use lem_core::ArcId;
use lem_graph::Colony;

use crate::network::{FlowNetwork, FlowNode};
use crate::{FlowError, FlowResult};

// ── MaxFlow ───────────────────────────────────────────────────────────────────

/// Result of a max-flow run: the flow value and the saturated network.
pub struct MaxFlow {
    pub value:   u32,
    pub network: FlowNetwork,
}

// ── FlowSolver trait ──────────────────────────────────────────────────────────

/// Pluggable maximum-flow engine.
pub trait FlowSolver {
    /// Saturate `network` in place and return the flow value.
    ///
    /// `bound` is an upper limit on the flow known to the caller (for a
    /// colony, the start room's degree).  Implementations fail with
    /// [`FlowError::IterationCap`] rather than exceed it.
    fn max_flow(&self, network: &mut FlowNetwork, bound: u32) -> FlowResult<u32>;

    /// Build the network for `colony` and saturate it.
    ///
    /// A colony whose start and end coincide has flow 0: there is nowhere
    /// to go.
    fn solve(&self, colony: &Colony) -> FlowResult<MaxFlow> {
        let mut network = FlowNetwork::from_colony(colony);
        if colony.start() == colony.end() {
            log::info!("start and end are the same room; max flow is 0");
            return Ok(MaxFlow { value: 0, network });
        }
        let bound = colony.degree(colony.start()) as u32;
        let value = self.max_flow(&mut network, bound)?;
        log::info!("max flow: {value}");
        Ok(MaxFlow { value, network })
    }
}

// ── EdmondsKarp ───────────────────────────────────────────────────────────────

/// Breadth-first augmenting paths over the residual graph.
pub struct EdmondsKarp;

impl FlowSolver for EdmondsKarp {
    fn max_flow(&self, network: &mut FlowNetwork, bound: u32) -> FlowResult<u32> {
        let mut parent = vec![ArcId::INVALID; network.node_count()];
        let mut value = 0u32;

        while shortest_augmenting_path(network, &mut parent)? {
            if value == bound {
                return Err(FlowError::IterationCap { cap: bound });
            }
            let hops = augment(network, &parent);
            value += 1;
            log::debug!("augmentation {value}: {hops} arcs");
        }
        Ok(value)
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// BFS from source over arcs with positive residual capacity.
///
/// On success `parent[v]` holds the arc that reached `v` for every node on
/// the path back to the source.  Stops the moment the sink is discovered.
fn shortest_augmenting_path(network: &FlowNetwork, parent: &mut [ArcId]) -> FlowResult<bool> {
    parent.fill(ArcId::INVALID);
    let source = network.source;
    let sink   = network.sink;

    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::new();
    visited[source.index()] = true;
    queue.push_back(source);

    // Each node is enqueued at most once; the counter guards that invariant.
    let mut dequeued = 0usize;
    while let Some(node) = queue.pop_front() {
        dequeued += 1;
        if dequeued > network.node_count() {
            return Err(FlowError::IterationCap { cap: network.node_count() as u32 });
        }
        for &arc in network.out_arcs(node) {
            let next = network.arc_to[arc.index()];
            if visited[next.index()] || network.residual(arc) <= 0 {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = arc;
            if next == sink {
                return Ok(true);
            }
            queue.push_back(next);
        }
    }
    Ok(false)
}

/// Push one unit along the parent chain from sink to source.  Returns the
/// number of arcs on the path.
fn augment(network: &mut FlowNetwork, parent: &[ArcId]) -> usize {
    let mut hops = 0;
    let mut node: FlowNode = network.sink;
    while node != network.source {
        let arc = parent[node.index()];
        debug_assert_ne!(arc, ArcId::INVALID, "broken parent chain");
        network.push_unit(arc);
        node = network.arc_from[arc.index()];
        hops += 1;
    }
    hops
}

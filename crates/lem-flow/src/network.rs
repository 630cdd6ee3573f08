//! Residual flow network built from a [`Colony`].
//!
//! # Node splitting
//!
//! Every room `r` owns two flow nodes, `in(r) = 2r` and `out(r) = 2r + 1`.
//! For interior rooms a unit arc `in(r) → out(r)` caps the traffic through
//! the room at one lane, which is what keeps lanes room-disjoint and lets
//! the scheduler treat each lane as an independent single-file pipe.  Start
//! and end are not split: the source is `out(start)` and the sink is
//! `in(end)`.
//!
//! Each tunnel `a–b` contributes `out(a) → in(b)` and `out(b) → in(a)`, one
//! unit each.  Tunnel multiplicity never raises that capacity: a tunnel
//! carries one agent per step however often it was declared.
//!
//! # Data layout
//!
//! Arcs live in an arena indexed by `ArcId`.  Every arc is created together
//! with its residual partner; `arc_pair[a]` points at the partner and
//! `arc_pair[arc_pair[a]] == a`.  Pushing one unit along `a` means
//! `flow[a] += 1; flow[pair] -= 1`, so the partner's residual grows by one
//! and a later augmenting path can cancel the push.
//!
//! Outgoing arcs use the same **CSR** row-pointer layout as a road network:
//! the arcs leaving node `n` are `out_arcs[node_out_start[n] .. node_out_start[n+1]]`,
//! in arena order.

use lem_core::{ArcId, RoomId, TunnelId};
use lem_graph::Colony;

/// Index of a node in the split flow graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FlowNode(pub u32);

impl FlowNode {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn entry(room: RoomId) -> FlowNode {
        FlowNode(room.0 * 2)
    }

    #[inline]
    pub fn exit(room: RoomId) -> FlowNode {
        FlowNode(room.0 * 2 + 1)
    }

    /// The room this node belongs to.
    #[inline]
    pub fn room(self) -> RoomId {
        RoomId(self.0 / 2)
    }
}

/// What an arc stands for in the colony.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArcKind {
    /// `in(r) → out(r)` for an interior room.
    Room(RoomId),
    /// One direction of a tunnel.
    Tunnel(TunnelId),
    /// Zero-capacity partner of a forward arc.
    Residual,
}

/// Directed unit-capacity network with paired residual arcs.
///
/// All fields are `pub` for direct indexed access in the solver loops.
/// Construct with [`FlowNetwork::from_colony`].
pub struct FlowNetwork {
    // ── Endpoints ─────────────────────────────────────────────────────────
    pub source: FlowNode,
    pub sink:   FlowNode,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,
    /// Arc ids grouped by tail node.
    pub out_arcs:       Vec<ArcId>,

    // ── Arc arena (indexed by ArcId) ──────────────────────────────────────
    pub arc_from: Vec<FlowNode>,
    pub arc_to:   Vec<FlowNode>,
    pub arc_cap:  Vec<i32>,
    pub arc_flow: Vec<i32>,
    pub arc_pair: Vec<ArcId>,
    pub arc_kind: Vec<ArcKind>,
}

impl FlowNetwork {
    /// Build the split network for `colony` with all flows at zero.
    pub fn from_colony(colony: &Colony) -> Self {
        let node_count = colony.room_count() * 2;
        let mut arena = ArcArena::with_capacity(
            (colony.room_count() + colony.tunnel_count() * 2) * 2,
        );

        for i in 0..colony.room_count() {
            let room = RoomId(i as u32);
            if colony.is_interior(room) {
                arena.push_pair(FlowNode::entry(room), FlowNode::exit(room), ArcKind::Room(room));
            }
        }
        for (id, tunnel) in colony.tunnels() {
            arena.push_pair(FlowNode::exit(tunnel.a), FlowNode::entry(tunnel.b), ArcKind::Tunnel(id));
            arena.push_pair(FlowNode::exit(tunnel.b), FlowNode::entry(tunnel.a), ArcKind::Tunnel(id));
        }

        // CSR row pointer over arc tails; a stable counting sort keeps arena
        // order within each row so BFS visits neighbours deterministically.
        let mut node_out_start = vec![0u32; node_count + 1];
        for from in &arena.from {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        let mut cursor = node_out_start.clone();
        let mut out_arcs = vec![ArcId::INVALID; arena.from.len()];
        for (i, from) in arena.from.iter().enumerate() {
            let slot = &mut cursor[from.index()];
            out_arcs[*slot as usize] = ArcId(i as u32);
            *slot += 1;
        }
        debug_assert_eq!(node_out_start[node_count] as usize, out_arcs.len());

        FlowNetwork {
            source: FlowNode::exit(colony.start()),
            sink:   FlowNode::entry(colony.end()),
            node_out_start,
            out_arcs,
            arc_from: arena.from,
            arc_to:   arena.to,
            arc_cap:  arena.cap,
            arc_flow: vec![0; arena.kind.len()],
            arc_pair: arena.pair,
            arc_kind: arena.kind,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Arcs leaving `node`, forward and residual alike.
    #[inline]
    pub fn out_arcs(&self, node: FlowNode) -> &[ArcId] {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        &self.out_arcs[start..end]
    }

    /// Remaining capacity on `arc`.
    #[inline]
    pub fn residual(&self, arc: ArcId) -> i32 {
        self.arc_cap[arc.index()] - self.arc_flow[arc.index()]
    }

    /// `true` for arcs that exist in the colony (not residual partners).
    #[inline]
    pub fn is_forward(&self, arc: ArcId) -> bool {
        self.arc_kind[arc.index()] != ArcKind::Residual
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Push one unit along `arc`, cancelling one on its partner.
    #[inline]
    pub fn push_unit(&mut self, arc: ArcId) {
        let pair = self.arc_pair[arc.index()];
        self.arc_flow[arc.index()]  += 1;
        self.arc_flow[pair.index()] -= 1;
    }
}

// ── Arena builder ─────────────────────────────────────────────────────────────

struct ArcArena {
    from: Vec<FlowNode>,
    to:   Vec<FlowNode>,
    cap:  Vec<i32>,
    pair: Vec<ArcId>,
    kind: Vec<ArcKind>,
}

impl ArcArena {
    fn with_capacity(n: usize) -> Self {
        Self {
            from: Vec::with_capacity(n),
            to:   Vec::with_capacity(n),
            cap:  Vec::with_capacity(n),
            pair: Vec::with_capacity(n),
            kind: Vec::with_capacity(n),
        }
    }

    /// Add a unit forward arc `from → to` and its zero-capacity partner.
    fn push_pair(&mut self, from: FlowNode, to: FlowNode, kind: ArcKind) {
        let fwd = ArcId(self.kind.len() as u32);
        let rev = ArcId(fwd.0 + 1);

        self.from.push(from);
        self.to.push(to);
        self.cap.push(1);
        self.pair.push(rev);
        self.kind.push(kind);

        self.from.push(to);
        self.to.push(from);
        self.cap.push(0);
        self.pair.push(fwd);
        self.kind.push(ArcKind::Residual);
    }
}

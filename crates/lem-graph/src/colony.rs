//! Colony graph representation and builder.
//!
//! # Data layout
//!
//! Rooms are stored in a `Vec<Room>` indexed by `RoomId`, assigned in
//! declaration order.  Tunnels are undirected and stored once in a
//! `Vec<Tunnel>` indexed by `TunnelId`; every room keeps the ids of its
//! incident tunnels in the order they were declared, so neighbour iteration
//! is deterministic.
//!
//! A second `Colony` is never derived from a first one: the flow solver
//! works on its own arc arena (`lem-flow`) and leaves the colony untouched.

use rustc_hash::FxHashMap;

use lem_core::{Coord, RoomId, TunnelId};

use crate::{GraphError, GraphResult};

// ── Role ──────────────────────────────────────────────────────────────────────

/// The two distinguished rooms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Start,
    End,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::Start => "start",
            Role::End   => "end",
        })
    }
}

// ── Room / Tunnel ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name:    String,
    pub coord:   Coord,
    /// Incident tunnels in declaration order.
    pub tunnels: Vec<TunnelId>,
}

/// An undirected link between two distinct rooms.
///
/// Declaring the same pair twice bumps `multiplicity` instead of adding a
/// parallel tunnel.  Traffic through a tunnel is still limited to one agent
/// per step regardless of multiplicity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tunnel {
    pub a:            RoomId,
    pub b:            RoomId,
    pub multiplicity: u32,
}

impl Tunnel {
    /// The endpoint opposite `room`.
    ///
    /// # Panics
    /// Panics in debug mode if `room` is not an endpoint.
    #[inline]
    pub fn other(&self, room: RoomId) -> RoomId {
        debug_assert!(room == self.a || room == self.b);
        if room == self.a { self.b } else { self.a }
    }
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// Immutable room/tunnel graph with designated start and end rooms.
///
/// Do not construct directly; use [`ColonyBuilder`].
#[derive(Clone, Debug)]
pub struct Colony {
    rooms:   Vec<Room>,
    tunnels: Vec<Tunnel>,
    by_name: FxHashMap<String, RoomId>,
    /// Normalised `(min, max)` endpoint pair → tunnel.
    by_pair: FxHashMap<(RoomId, RoomId), TunnelId>,
    start:   RoomId,
    end:     RoomId,
}

impl Colony {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnels.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

    /// `true` for every room other than start and end.
    #[inline]
    pub fn is_interior(&self, room: RoomId) -> bool {
        room != self.start && room != self.end
    }

    #[inline]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    #[inline]
    pub fn name(&self, id: RoomId) -> &str {
        &self.rooms[id.index()].name
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn tunnel(&self, id: TunnelId) -> &Tunnel {
        &self.tunnels[id.index()]
    }

    pub fn tunnels(&self) -> impl Iterator<Item = (TunnelId, &Tunnel)> + '_ {
        self.tunnels
            .iter()
            .enumerate()
            .map(|(i, t)| (TunnelId(i as u32), t))
    }

    /// The tunnel joining `a` and `b`, in either direction.
    pub fn tunnel_between(&self, a: RoomId, b: RoomId) -> Option<TunnelId> {
        self.by_pair.get(&pair_key(a, b)).copied()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Neighbours of `room` as `(tunnel, neighbour)` pairs, in tunnel
    /// declaration order.
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = (TunnelId, RoomId)> + '_ {
        self.rooms[room.index()]
            .tunnels
            .iter()
            .map(move |&t| (t, self.tunnel(t).other(room)))
    }

    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        self.rooms[room.index()].tunnels.len()
    }
}

#[inline]
fn pair_key(a: RoomId, b: RoomId) -> (RoomId, RoomId) {
    if a <= b { (a, b) } else { (b, a) }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// All structural rules are enforced here, so any front end (the text
/// loader, a test harness, a generator) gets the same guarantees.
///
/// # Example
///
/// ```
/// use lem_core::Coord;
/// use lem_graph::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new();
/// b.add_room("start", Coord::new(0, 0)).unwrap();
/// b.add_room("a", Coord::new(1, 0)).unwrap();
/// b.add_room("end", Coord::new(2, 0)).unwrap();
/// b.add_tunnel("start", "a").unwrap();
/// b.add_tunnel("a", "end").unwrap();
/// b.set_start("start").unwrap();
/// b.set_end("end").unwrap();
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 3);
/// assert_eq!(colony.tunnel_count(), 2);
/// ```
#[derive(Default)]
pub struct ColonyBuilder {
    rooms:   Vec<Room>,
    tunnels: Vec<Tunnel>,
    by_name: FxHashMap<String, RoomId>,
    by_pair: FxHashMap<(RoomId, RoomId), TunnelId>,
    start:   Option<RoomId>,
    end:     Option<RoomId>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its id.
    ///
    /// Idempotent: re-declaring an existing name keeps the first
    /// declaration (including its coordinate) and returns its id.
    pub fn add_room(&mut self, name: &str, coord: Coord) -> GraphResult<RoomId> {
        if let Some(&id) = self.by_name.get(name) {
            log::debug!("room '{name}' declared again; keeping first declaration");
            return Ok(id);
        }
        validate_name(name)?;
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room { name: name.to_owned(), coord, tunnels: Vec::new() });
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Add an undirected tunnel between two declared rooms.
    ///
    /// A repeated pair (in either order) increments the existing tunnel's
    /// multiplicity and returns its id.
    pub fn add_tunnel(&mut self, a: &str, b: &str) -> GraphResult<TunnelId> {
        let ra = self.lookup(a)?;
        let rb = self.lookup(b)?;
        if ra == rb {
            return Err(GraphError::InvalidTunnel {
                a:      a.to_owned(),
                b:      b.to_owned(),
                reason: "a tunnel cannot connect a room to itself",
            });
        }

        let key = pair_key(ra, rb);
        if let Some(&id) = self.by_pair.get(&key) {
            let tunnel = &mut self.tunnels[id.index()];
            tunnel.multiplicity += 1;
            log::warn!(
                "duplicate tunnel {a}-{b} merged (multiplicity {})",
                tunnel.multiplicity
            );
            return Ok(id);
        }

        let id = TunnelId(self.tunnels.len() as u32);
        self.tunnels.push(Tunnel { a: ra, b: rb, multiplicity: 1 });
        self.rooms[ra.index()].tunnels.push(id);
        self.rooms[rb.index()].tunnels.push(id);
        self.by_pair.insert(key, id);
        Ok(id)
    }

    pub fn set_start(&mut self, name: &str) -> GraphResult<RoomId> {
        self.set_role(Role::Start, name)
    }

    pub fn set_end(&mut self, name: &str) -> GraphResult<RoomId> {
        self.set_role(Role::End, name)
    }

    /// Assign `role` to an already-declared room.
    pub fn set_role(&mut self, role: Role, name: &str) -> GraphResult<RoomId> {
        let id = self.lookup(name)?;
        let slot = match role {
            Role::Start => &mut self.start,
            Role::End   => &mut self.end,
        };
        if let Some(existing) = *slot {
            return Err(GraphError::DuplicateRole {
                role,
                existing:  self.rooms[existing.index()].name.clone(),
                duplicate: name.to_owned(),
            });
        }
        *slot = Some(id);
        Ok(id)
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnels.len() }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// Fails with [`GraphError::MissingRole`] if start or end was never set.
    /// Start and end may be the same room; that colony is valid but has no
    /// route, which the scheduler reports as unreachable.
    pub fn build(self) -> GraphResult<Colony> {
        let start = self.start.ok_or(GraphError::MissingRole(Role::Start))?;
        let end   = self.end.ok_or(GraphError::MissingRole(Role::End))?;
        log::debug!(
            "colony built: {} rooms, {} tunnels",
            self.rooms.len(),
            self.tunnels.len()
        );
        Ok(Colony {
            rooms:   self.rooms,
            tunnels: self.tunnels,
            by_name: self.by_name,
            by_pair: self.by_pair,
            start,
            end,
        })
    }

    fn lookup(&self, name: &str) -> GraphResult<RoomId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownRoom(name.to_owned()))
    }
}

/// Names end up in `L<n>-<name>` tokens and `<a>-<b>` tunnel lines, so they
/// must not be ambiguous in either.
fn validate_name(name: &str) -> GraphResult<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.starts_with('L') {
        "name starts with 'L'"
    } else if name.starts_with('#') {
        "name starts with '#'"
    } else if name.contains('-') {
        "name contains '-'"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else {
        return Ok(());
    };
    Err(GraphError::InvalidRoomName { name: name.to_owned(), reason })
}

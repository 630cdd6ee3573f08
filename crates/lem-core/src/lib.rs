//! `lem-core` — foundational types for the lem-in colony router.
//!
//! Every other `lem-*` crate depends on this one.  It has no `lem-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `RoomId`, `TunnelId`, `ArcId`, `AgentId`, `LaneId`    |
//! | [`coord`]    | `Coord` (room position, informational only)           |
//! | [`step`]     | `Step` counter                                        |
//! | [`config`]   | `RunConfig`, `OutputFormat`                           |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{OutputFormat, RunConfig};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ArcId, LaneId, RoomId, TunnelId};
pub use step::Step;

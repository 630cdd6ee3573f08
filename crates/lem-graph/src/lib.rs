//! `lem-graph` — the colony graph and its text loader.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`colony`]  | `Colony`, `ColonyBuilder`, `Room`, `Tunnel`                 |
//! | [`loader`]  | `AntFarm`, `load_farm`, `load_farm_reader`, `parse_farm`    |
//! | [`error`]   | `GraphError`, `ParseError`, result aliases                  |

pub mod colony;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use colony::{Colony, ColonyBuilder, Role, Room, Tunnel};
pub use error::{GraphError, GraphResult, ParseError, ParseResult};
pub use loader::{AntFarm, load_farm, load_farm_reader, parse_farm};

//! `lem-flow` — maximum flow and lane extraction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `FlowNetwork` (arc arena + CSR adjacency), `ArcKind`       |
//! | [`solver`]   | `FlowSolver` trait, `EdmondsKarp`, `MaxFlow`               |
//! | [`lanes`]    | `Lane`, `extract_lanes`, `find_lanes`                      |
//! | [`error`]    | `FlowError`, `FlowResult<T>`                               |
//!
//! # Pipeline
//!
//! ```text
//! Colony ──FlowNetwork::from_colony──▶ FlowNetwork
//!        ──EdmondsKarp::max_flow────▶ MaxFlow { value, network }
//!        ──extract_lanes────────────▶ Vec<Lane>   (sorted by length)
//! ```

pub mod error;
pub mod lanes;
pub mod network;
pub mod solver;


pub use error::{FlowError, FlowResult};
pub use lanes::{Lane, extract_lanes, find_lanes};
pub use network::{ArcKind, FlowNetwork, FlowNode};
pub use solver::{EdmondsKarp, FlowSolver, MaxFlow};

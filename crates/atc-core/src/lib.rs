//! `atc-core` — foundational types for the `rust_atc` runway simulator.
//!
//! This crate is a dependency of every other `atc-*` crate.  It has no
//! `atc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AirportId`, `PlaneId`, `RunwayIndex`                 |
//! | [`grid`]        | `GridPos`, Manhattan distance, unit stepping          |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`config`]      | `WorldConfig`, `AdmissionKind`, `LearningParams`      |
//! | [`rng`]         | `EntityRng` (per-airport), `SimRng` (global)          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AdmissionKind, LearningParams, MAX_GRID_SIDE, WorldConfig};
pub use error::{CoreError, CoreResult};
pub use grid::GridPos;
pub use ids::{AirportId, PlaneId, RunwayIndex};
pub use rng::{EntityRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};

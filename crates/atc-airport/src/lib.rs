//! `atc-airport` — runway allocation and admission policies.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`runway`]   | `RunwayBank` — availability flags, last-use stamps, spacing    |
//! | [`qtable`]   | `StateKey`, `Action`, `QTable` (absent keys read as 0)         |
//! | [`policy`]   | `AdmissionPolicy` (`FirstAvailable` / `Learned`), `LearnedGate`|
//! | [`airport`]  | `Airport` — `request_runway` / `release_runway`                |
//! | [`registry`] | `AirportRegistry` — `AirportId → Airport`                      |
//! | [`error`]    | `AirportError`, `AirportResult<T>`                             |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                |
//! |-----------|-------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the learned table.      |
//! | `serde`   | Serde derives on `StateKey`, `Action`, `GateStats`.   |

pub mod airport;
pub mod error;
pub mod policy;
pub mod qtable;
pub mod registry;
pub mod runway;

#[cfg(test)]
mod tests;

pub use airport::Airport;
pub use error::{AirportError, AirportResult};
pub use policy::{AdmissionPolicy, DENY_REWARD, GRANT_REWARD, GateStats, LearnedGate};
pub use qtable::{Action, QTable, StateKey};
pub use registry::AirportRegistry;
pub use runway::RunwayBank;

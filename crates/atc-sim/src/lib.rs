//! `atc-sim` — tick scheduler for the rust_atc runway simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   on_tick_start(tick)
//!   for plane in fleet order:
//!     plane.step(&mut airports, tick)       // at most one transition
//!       Err(UnknownAirport) → halt with SimError::ConfigViolation
//!       Some(transition)    → on_transition(tick, plane, from, to)
//!   on_tick_end(tick, &TickStats)
//!   every output_interval_ticks: on_snapshot(tick, planes, airports)
//! on_sim_end(final_tick)
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `serde`   | Serde derives on the core, plane, and scenario types.  |
//! | `fx-hash` | FxHash-backed Q-tables in every learning airport.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use atc_core::{SimConfig, WorldConfig};
//! use atc_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), WorldConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use sim::Sim;

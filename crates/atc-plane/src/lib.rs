//! `atc-plane` — the plane lifecycle state machine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                            |
//! |-----------|---------------------------------------------------------------------|
//! | [`state`] | `PlaneState`, `Transition`, `PlaneParams`, `PlaneCounters`          |
//! | [`plane`] | `Plane` and its per-tick `step`                                     |
//! | [`error`] | `PlaneError`, `PlaneResult<T>`                                      |
//!
//! # Movement model (grid walk)
//!
//! While `Flying`, a plane takes up to `round(speed)` unit steps per tick
//! toward its destination cell, closing the x gap before the y gap, and
//! stops on arrival.  Once on the destination cell it requests a landing
//! runway every tick until one is granted.

pub mod error;
pub mod plane;
pub mod state;


pub use error::{PlaneError, PlaneResult};
pub use plane::Plane;
pub use state::{PlaneCounters, PlaneParams, PlaneState, Transition};

//! `atc-scenario` — what a run starts from: airports, fleet, and parameters.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`scenario`]    | `AirportSpec`, `PlaneSpec`, `Scenario` (+ `validate`)   |
//! | [`dispersion`]  | `dispersed_values`, `DEFAULT_SPREAD`                    |
//! | [`generate`]    | `generate_scenario` from a `WorldConfig` and `SimRng`   |
//! | [`loader`]      | `load_scenario_dir`, `load_scenario_reader`             |
//! | [`error`]       | `ScenarioError`, `ScenarioResult<T>`                    |
//!
//! A `Scenario` is inert data.  `atc-sim`'s builder turns it into airports
//! and planes.

pub mod dispersion;
pub mod error;
pub mod generate;
pub mod loader;
pub mod scenario;


pub use dispersion::{DEFAULT_SPREAD, dispersed_values};
pub use error::{ScenarioError, ScenarioResult};
pub use generate::generate_scenario;
pub use loader::{
    AIRPORTS_FILE, FLEET_FILE, load_airports_reader, load_fleet_reader, load_scenario_dir,
    load_scenario_reader,
};
pub use scenario::{AirportSpec, PlaneSpec, Scenario};

pub mod config;
pub mod state;

pub use config::{AircraftModel, AircraftSpec, ConfigError, RawAircraftFile, RawAircraftSpec};
pub use state::AircraftState;

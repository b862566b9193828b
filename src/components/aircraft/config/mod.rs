mod aircraft;
mod loader;

pub use aircraft::{AircraftModel, AircraftSpec};
pub use loader::{ConfigError, RawAircraftFile, RawAircraftSpec};

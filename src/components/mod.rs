pub mod aircraft;
pub mod airport;
pub mod camera;
pub mod controller;
pub mod controls;
pub mod flight_phase;
pub mod physics;
pub mod runway;

pub use aircraft::{AircraftModel, AircraftSpec, AircraftState, ConfigError};
pub use airport::Airport;
pub use camera::{CameraComponent, CameraMode};
pub use controller::{FlightEntity, PlayerController};
pub use controls::{AxisKeys, ControlKeys, FlightControls};
pub use flight_phase::FlightPhase;
pub use physics::{FlightInfo, FlightPhysics};
pub use runway::Runway;

pub mod aircraft;
pub mod airports;
pub mod config;
mod hud;
mod session;

pub use aircraft::AircraftCatalog;
pub use airports::{AirportCatalog, FlightRoute, RouteManager};
pub use config::{PhysicsConfig, SimConfig, WindowConfig};
pub use hud::HudSettings;
pub use session::{prepare_flight, wrap_index, ActiveFlight, MenuSelection};

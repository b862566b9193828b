mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_aircraft_state_valid, assert_controls_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};

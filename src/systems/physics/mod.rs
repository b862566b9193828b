mod atmosphere;
mod integrator;

pub use atmosphere::air_density;
pub use integrator::{
    flight_physics_system, frame_limit_system, long_frame_warning_system,
    update_aircraft_physics, MAX_PITCH, MAX_ROLL,
};

pub mod physics;
pub mod render;
pub mod simulation;

pub use physics::PhysicsConfig;
pub use render::WindowConfig;
pub use simulation::SimConfig;

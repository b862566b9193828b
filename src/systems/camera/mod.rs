mod controller;

pub use controller::{camera_follow_system, camera_transform_system};

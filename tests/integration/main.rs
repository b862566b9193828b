#[path = "../common/mod.rs"]
mod common;

mod aircraft_tests;
mod menu_tests;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use simflight::{
    plugins::{FlightPlugin, MenuPlugin, SimState, StartFlight},
    resources::{AircraftCatalog, MenuSelection, PhysicsConfig, SimConfig},
};
use std::time::Duration;

/// Builder for a headless simulator app driven frame by frame.
pub struct TestAppBuilder {
    physics_config: Option<PhysicsConfig>,
    catalog: Option<AircraftCatalog>,
    with_menus: bool,
    frame_time: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            physics_config: None,
            catalog: None,
            with_menus: false,
            frame_time: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_catalog(mut self, catalog: AircraftCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_menus(mut self) -> Self {
        self.with_menus = true;
        self
    }

    pub fn build(self) -> TestApp {
        let config = SimConfig {
            physics: self.physics_config.unwrap_or_default(),
            ..Default::default()
        };
        let catalog = self.catalog.unwrap_or_default();

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            // Written directly by the tests instead of the input plugin
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.frame_time,
            )))
            .add_plugins(FlightPlugin::new(config, catalog));

        if self.with_menus {
            app.add_plugins(MenuPlugin);
        }

        // Startup and the initial state transition
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_frame(&mut self) {
        self.app.update();
        self.keyboard().clear();
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.run_frame();
        }
    }

    /// Length of every following frame.
    pub fn set_frame_time(&mut self, seconds: f64) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                seconds,
            )));
    }

    fn keyboard(&mut self) -> Mut<ButtonInput<KeyCode>> {
        self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
    }

    pub fn hold(&mut self, key: KeyCode) {
        self.keyboard().press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keyboard().release(key);
    }

    /// Presses and releases `key` across one frame.
    pub fn tap(&mut self, key: KeyCode) {
        self.hold(key);
        self.run_frame();
        self.release(key);
    }

    /// Requests a flight and runs until the state switch has been applied.
    pub fn start_flight(&mut self, selection: MenuSelection) {
        self.app.world_mut().send_event(StartFlight(selection));
        self.run_steps(2);
    }

    pub fn sim_state(&self) -> SimState {
        self.app.world().resource::<State<SimState>>().get().clone()
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn count<T: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).count()
    }
}

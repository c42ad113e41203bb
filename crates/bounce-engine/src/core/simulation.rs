use crate::api::config::SimConfig;
use crate::api::types::{BounceEvent, EntityId};
use crate::components::entity::Entity;
use crate::components::mover::BoundedMover;
use crate::core::camera::Camera2D;
use crate::core::scene::Scene;
use crate::core::time::FixedTimestep;
use crate::systems::bounce::tick_movers;
use crate::systems::rng::Rng;

/// Headless driver: owns the scene and turns host frames into ticks.
///
/// The host calls [`Simulation::init`] once, then [`Simulation::frame`] with
/// each frame's elapsed time. Hosts that drive ticks themselves can call
/// [`Simulation::step`] directly instead.
pub struct Simulation {
    config: SimConfig,
    camera: Camera2D,
    scene: Scene,
    rng: Rng,
    timestep: FixedTimestep,
    /// Reflections from the most recent frame.
    events: Vec<BounceEvent>,
    tick: u64,
    next_id: u32,
    initialized: bool,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let camera = Camera2D::new(config.camera.width, config.camera.height)
            .with_center(config.camera.center);
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);
        let scene = Scene::with_capacity(config.movers.len());
        let rng = Rng::new(config.seed);
        Self {
            config,
            camera,
            scene,
            rng,
            timestep,
            events: Vec::new(),
            tick: 0,
            next_id: 1,
            initialized: false,
        }
    }

    /// Spawn one entity per configured mover. Call once before the first frame.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("simulation already initialized, ignoring init");
            return;
        }
        for desc in &self.config.movers {
            let id = EntityId(self.next_id);
            self.next_id += 1;
            let mover = BoundedMover::init(desc, &self.camera, &mut self.rng)
                .with_vertical_rule(self.config.vertical_rule);
            log::debug!(
                "spawned entity {} at {:?} with velocity {:?}, radius {}",
                id.0,
                mover.position,
                mover.velocity,
                mover.radius
            );
            self.scene.spawn(Entity::new(id, mover).with_tag(desc.tag.clone()));
        }
        self.initialized = true;
        log::info!(
            "simulation initialized: {} movers in a {}x{} viewport",
            self.scene.len(),
            self.camera.width,
            self.camera.height
        );
    }

    /// Run one host frame. Returns the number of ticks executed.
    /// Events from the previous frame are cleared first.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        if !self.initialized {
            return 0;
        }
        self.events.clear();
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Advance every mover by exactly one tick.
    /// Events accumulate until the next [`Simulation::frame`].
    pub fn step(&mut self) {
        self.tick += 1;
        tick_movers(&mut self.scene, self.tick, &mut self.events);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn events(&self) -> &[BounceEvent] {
        &self.events
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// The camera can change after init; existing movers keep their extents.
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Total ticks executed.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

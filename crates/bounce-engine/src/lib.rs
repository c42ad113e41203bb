//! Headless kinematics for entities that bounce inside a camera viewport.
//!
//! The core is [`BoundedMover`]: each tick it moves by `velocity * speed` and
//! reflects its velocity off the edges of a fixed rectangle. Everything else
//! is host plumbing: a scene, a camera, a seeded random source, a fixed-step
//! clock and the [`Simulation`] driver tying them together.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{CameraConfig, ConfigError, MoverConfig, SimConfig};
pub use api::types::{BounceEvent, EntityId, Wall, WallContacts};
pub use components::entity::Entity;
pub use components::mover::{BoundedMover, VerticalRule};
pub use core::camera::{Camera2D, FixedViewport, Viewport};
pub use core::scene::Scene;
pub use core::simulation::Simulation;
pub use core::time::FixedTimestep;
pub use systems::bounce::tick_movers;
pub use systems::rng::{RandomSource, Rng};

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::mover::VerticalRule;

/// Errors raised while loading a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for a simulation run, provided by the host.
/// Loaded from JSON; every field except a mover's `speed` has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of ticks run per host frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Seed for the random initial velocities (default: 42).
    pub seed: u64,
    /// Camera whose viewport confines the movers.
    pub camera: CameraConfig,
    /// Which conditions trigger top/bottom reflections (default: passage).
    pub vertical_rule: VerticalRule,
    /// One entry per bouncing entity.
    pub movers: Vec<MoverConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            seed: 42,
            camera: CameraConfig::default(),
            vertical_rule: VerticalRule::default(),
            movers: vec![MoverConfig::new(0.05)],
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Orthographic camera description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center in world space.
    pub center: Vec2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            center: Vec2::ZERO,
        }
    }
}

/// Tunables for a single bouncing entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverConfig {
    /// Tag attached to the spawned entity.
    #[serde(default)]
    pub tag: String,
    /// Initial position in world space.
    #[serde(default)]
    pub position: Vec3,
    /// Radius of the entity's collider.
    #[serde(default = "default_collider_radius")]
    pub collider_radius: f32,
    /// Added to the collider radius to tweak when a wall counts as hit.
    #[serde(default = "default_radius_offset")]
    pub radius_offset: f32,
    /// Displacement per tick along the velocity direction.
    pub speed: f32,
}

impl MoverConfig {
    /// A mover at the origin with default collider and offset.
    pub fn new(speed: f32) -> Self {
        Self {
            tag: String::new(),
            position: Vec3::ZERO,
            collider_radius: default_collider_radius(),
            radius_offset: default_radius_offset(),
            speed,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_collider_radius(mut self, radius: f32) -> Self {
        self.collider_radius = radius;
        self
    }

    pub fn with_radius_offset(mut self, offset: f32) -> Self {
        self.radius_offset = offset;
        self
    }
}

fn default_collider_radius() -> f32 {
    0.5
}

fn default_radius_offset() -> f32 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r#"{ "movers": [ { "speed": 0.2 } ] }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_steps_per_frame, 10);
        assert_eq!(config.vertical_rule, VerticalRule::Passage);
        assert_eq!(config.movers.len(), 1);

        let mover = &config.movers[0];
        assert_eq!(mover.speed, 0.2);
        assert_eq!(mover.collider_radius, 0.5);
        assert_eq!(mover.radius_offset, 0.1);
        assert_eq!(mover.position, Vec3::ZERO);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "fixed_dt": 0.02,
            "seed": 7,
            "camera": { "width": 16.0, "height": 9.0, "center": [1.0, 2.0] },
            "vertical_rule": "contact",
            "movers": [
                { "tag": "ball", "position": [1.0, -1.0, 0.0], "collider_radius": 0.25,
                  "radius_offset": 0.0, "speed": 0.1 }
            ]
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.fixed_dt, 0.02);
        assert_eq!(config.seed, 7);
        assert_eq!(config.camera.center, Vec2::new(1.0, 2.0));
        assert_eq!(config.vertical_rule, VerticalRule::Contact);
        assert_eq!(config.movers[0].tag, "ball");
        assert_eq!(config.movers[0].position, Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(config.movers[0].radius_offset, 0.0);
    }

    #[test]
    fn mover_without_speed_is_rejected() {
        let json = r#"{ "movers": [ { "collider_radius": 1.0 } ] }"#;
        let err = SimConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimConfig::load("does/not/exist.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SimConfig::from_json(&json).unwrap(), config);
    }
}

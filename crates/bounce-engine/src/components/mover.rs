//! Bounded mover: straight-line motion reflected off the edges of a viewport.
//!
//! Each tick advances the position by `velocity * speed` and then checks the
//! four boundaries. Reflection only flips the sign of one velocity component;
//! positions are never clamped, so a mover can overshoot a wall by up to one
//! tick of displacement before it turns around.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::api::config::MoverConfig;
use crate::api::types::{Wall, WallContacts};
use crate::core::camera::Viewport;
use crate::systems::rng::RandomSource;

/// Conditions used for the top and bottom walls.
///
/// The left/right walls reflect on first contact (`x - r < -hx`, `x + r > hx`).
/// The top/bottom checks historically compare the opposite edge of the
/// bounding circle, so they only fire once the mover has passed the wall
/// entirely. `Passage` keeps that behavior; `Contact` mirrors the x-axis
/// checks and has to be selected explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalRule {
    /// `y - r > hy` hits the top, `y + r < -hy` hits the bottom.
    #[default]
    Passage,
    /// `y + r > hy` hits the top, `y - r < -hy` hits the bottom.
    Contact,
}

/// Position and velocity of a single entity confined to a rectangle
/// centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedMover {
    pub position: Vec3,
    /// Direction and per-tick rate of change; not normalized.
    pub velocity: Vec3,
    pub speed: f32,
    /// Collider radius plus the configured offset.
    pub radius: f32,
    /// Half-width and half-height of the confining rectangle.
    pub half_extent: Vec2,
    pub vertical_rule: VerticalRule,
}

impl BoundedMover {
    /// Initialize a mover from its tunables.
    ///
    /// The viewport is read once; later camera changes do not affect this
    /// mover. Velocity x and y are drawn independently from `[-1, 1]`, x first.
    pub fn init(desc: &MoverConfig, viewport: &impl Viewport, rng: &mut impl RandomSource) -> Self {
        let vx = rng.range(-1.0, 1.0);
        let vy = rng.range(-1.0, 1.0);
        Self {
            position: desc.position,
            velocity: Vec3::new(vx, vy, 0.0),
            speed: desc.speed,
            radius: desc.collider_radius + desc.radius_offset,
            half_extent: viewport.half_extent(),
            vertical_rule: VerticalRule::default(),
        }
    }

    /// Build a mover with every field given, velocity included.
    pub fn from_parts(position: Vec3, velocity: Vec3, speed: f32, radius: f32, half_extent: Vec2) -> Self {
        Self {
            position,
            velocity,
            speed,
            radius,
            half_extent,
            vertical_rule: VerticalRule::default(),
        }
    }

    pub fn with_vertical_rule(mut self, rule: VerticalRule) -> Self {
        self.vertical_rule = rule;
        self
    }

    /// Advance one tick, then reflect off any wall that was hit.
    /// Speed is applied per tick; there is no time-step scaling.
    pub fn tick(&mut self) -> WallContacts {
        self.position += self.velocity * self.speed;
        self.track_position()
    }

    /// Check the current position against the four walls and reflect the
    /// velocity for each wall hit. The x and y pairs are independent, so a
    /// corner can flip both components in the same tick.
    pub fn track_position(&mut self) -> WallContacts {
        let Vec3 { x, y, .. } = self.position;
        let r = self.radius;
        let Vec2 { x: hx, y: hy } = self.half_extent;

        let hit_x = if x - r < -hx {
            Some(Wall::Left)
        } else if x + r > hx {
            Some(Wall::Right)
        } else {
            None
        };

        let hit_y = match self.vertical_rule {
            VerticalRule::Passage => {
                if y - r > hy {
                    Some(Wall::Top)
                } else if y + r < -hy {
                    Some(Wall::Bottom)
                } else {
                    None
                }
            }
            VerticalRule::Contact => {
                if y + r > hy {
                    Some(Wall::Top)
                } else if y - r < -hy {
                    Some(Wall::Bottom)
                } else {
                    None
                }
            }
        };

        let contacts = WallContacts { x: hit_x, y: hit_y };
        for wall in contacts.iter() {
            self.velocity = reflect(self.velocity, wall.normal());
        }
        contacts
    }
}

/// Reflect `v` across the plane with unit normal `n`.
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

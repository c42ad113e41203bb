use glam::Vec3;

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// One of the four boundaries of the confining rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    /// Axis-aligned normal used to reflect velocity off this wall.
    pub fn normal(self) -> Vec3 {
        match self {
            Wall::Left => Vec3::NEG_X,
            Wall::Right => Vec3::X,
            Wall::Top => Vec3::Y,
            Wall::Bottom => Vec3::NEG_Y,
        }
    }
}

/// Walls hit during a single boundary check.
/// At most one wall per axis: the left/right and top/bottom pairs are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub x: Option<Wall>,
    pub y: Option<Wall>,
}

impl WallContacts {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Iterate over the walls hit, x-axis first.
    pub fn iter(&self) -> impl Iterator<Item = Wall> {
        self.x.into_iter().chain(self.y)
    }
}

/// A reflection that happened during a simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceEvent {
    pub entity: EntityId,
    pub wall: Wall,
    /// Tick number (1-based) in which the reflection happened.
    pub tick: u64,
    /// Entity position at the time of the reflection.
    pub position: Vec3,
}

use crate::api::types::EntityId;
use crate::components::mover::BoundedMover;

/// A scene entity carrying a bounded mover.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are not ticked).
    pub active: bool,
    pub mover: BoundedMover,
}

impl Entity {
    pub fn new(id: EntityId, mover: BoundedMover) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            mover,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

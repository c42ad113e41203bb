use crate::api::types::BounceEvent;
use crate::core::scene::Scene;

/// Advance every active mover by one tick.
/// Each wall hit is appended to `events`, tagged with `tick`.
pub fn tick_movers(scene: &mut Scene, tick: u64, events: &mut Vec<BounceEvent>) {
    for entity in scene.iter_mut().filter(|e| e.active) {
        let contacts = entity.mover.tick();
        for wall in contacts.iter() {
            log::debug!(
                "tick {}: entity {} hit {:?} wall at {:?}",
                tick,
                entity.id.0,
                wall,
                entity.mover.position
            );
            events.push(BounceEvent {
                entity: entity.id,
                wall,
                tick,
                position: entity.mover.position,
            });
        }
    }
}

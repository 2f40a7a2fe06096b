//! Cleanup system: removes entities queued for despawn and any enemy left
//! at zero hit points.

use hecs::{Entity, World};

use voidrunner_core::components::Enemy;

/// Despawn everything queued in the buffer and clear it.
pub fn flush(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// End-of-step sweep. No enemy with non-positive hit points survives a
/// step boundary.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.hp <= 0 {
            despawn_buffer.push(entity);
        }
    }
    flush(world, despawn_buffer);
}

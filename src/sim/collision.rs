//! Swept rectangle collision detection and response
//!
//! The tricky part of the simulation: moving a rectangle through a whole frame of
//! displacement without tunnelling, bouncing off every obstacle it meets on the way.
//!
//! Rectangle-vs-rectangle sweeps are reduced to a point sweep against an expanded
//! rectangle (the Minkowski sum of both sizes, centered on the obstacle). The
//! mover's center then travels along a ray, and the earliest crossing of one of
//! the expanded rectangle's sides is the time of impact.

use glam::Vec2;

use super::entity::{EntityIndex, EntityKind};
use super::geometry::{Ray2, Rect2, ray_segment_intersection, reflect};
use super::store::EntityStore;
use crate::consts::MAX_COLLISION_ITERATIONS;

/// Earliest impact found by a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Entity that was hit
    pub entity: EntityIndex,
    /// Outward normal of the face that was hit
    pub normal: Vec2,
    /// Fraction of the swept displacement travelled before contact
    pub t: f32,
}

/// Summary of one `move_entity` call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveOutcome {
    /// Solver iterations run (at most `MAX_COLLISION_ITERATIONS`)
    pub iterations: u32,
    /// Reflections applied
    pub bounces: u32,
    /// Blocks destroyed by this move
    pub destroyed_blocks: u32,
    /// Most recent contact
    pub last_hit: Option<Contact>,
    /// Displacement still unresolved when the iteration cap was reached
    pub dropped: Vec2,
}

/// Find the earliest impact of a rectangle of `size` centered at `position`
/// moving by `dp`.
///
/// Only faces the mover is travelling toward are tested. Hits at exactly
/// `t == 1` are not reported (touching at the end of the move is not a bounce),
/// and equal-time hits keep the first entity in index order.
pub fn sweep(
    store: &EntityStore,
    mover: EntityIndex,
    position: Vec2,
    size: Vec2,
    dp: Vec2,
) -> Option<Contact> {
    let mut closest: Option<Contact> = None;
    let mut t_min = 1.0;

    for other in store.each_live() {
        if other.index == mover || !other.is_obstacle() {
            continue;
        }

        let expanded = Rect2::from_center_size(Vec2::ZERO, size + other.size);
        let ray = Ray2::new(position - other.position, dp);

        for (edge, normal) in expanded.edges() {
            // Skip faces we are moving away from or sliding along
            if dp.dot(normal) >= 0.0 {
                continue;
            }
            if let Some(t) = ray_segment_intersection(ray, edge) {
                if t < t_min {
                    t_min = t;
                    closest = Some(Contact {
                        entity: other.index,
                        normal,
                        t,
                    });
                }
            }
        }
    }

    closest
}

/// Move an entity by `velocity * dt`, bouncing off collidable entities.
///
/// Each iteration advances to the earliest contact, then reflects both the
/// remaining displacement and the velocity about the contact normal. Blocks
/// are destroyed when hit. Whatever displacement remains after
/// `MAX_COLLISION_ITERATIONS` is dropped for this frame.
pub fn move_entity(store: &mut EntityStore, mover: EntityIndex, dt: f32) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    let Some(entity) = store.get(mover) else {
        return outcome;
    };
    let size = entity.size;
    let mut position = entity.position;
    let mut velocity = entity.velocity;
    let mut dp = velocity * dt;

    while dp.length_squared() > 0.0 && outcome.iterations < MAX_COLLISION_ITERATIONS {
        outcome.iterations += 1;
        let target = position + dp;

        let Some(contact) = sweep(store, mover, position, size, dp) else {
            position = target;
            dp = Vec2::ZERO;
            break;
        };

        position += contact.t * dp;
        dp = reflect(target - position, contact.normal);
        velocity = reflect(velocity, contact.normal);
        outcome.bounces += 1;
        outcome.last_hit = Some(contact);

        log::trace!(
            "entity {} bounced off {} at t={:.3} normal={}",
            mover.0,
            contact.entity.0,
            contact.t,
            contact.normal
        );

        let hit_block = store
            .get(contact.entity)
            .is_some_and(|other| other.kind == EntityKind::Block);
        if hit_block && store.destroy(contact.entity) {
            outcome.destroyed_blocks += 1;
            log::debug!("block {} destroyed", contact.entity.0);
        }
    }

    if dp.length_squared() > 0.0 {
        outcome.dropped = dp;
        log::debug!(
            "entity {} hit the {}-bounce cap, dropping {}",
            mover.0,
            MAX_COLLISION_ITERATIONS,
            dp
        );
    }

    if let Some(entity) = store.get_mut(mover) {
        entity.position = position;
        entity.velocity = velocity;
    }

    outcome
}

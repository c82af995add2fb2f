//! Fixed-capacity entity table with a free-list and soft deletion
//!
//! Destroying an entity never moves another one: the slot is flagged Removed and
//! its index goes back on the free stack. Iteration skips Removed slots, so an
//! entity can be destroyed mid-frame while other code still holds indices.

use glam::Vec2;
use thiserror::Error;

use super::entity::{Entity, EntityFlags, EntityIndex, EntityKind};

/// Number of slots in the store, including the reserved null slot
pub const ENTITY_CAPACITY: usize = 1024;

/// Errors from the entity store
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Every slot is in use
    #[error("entity store full: capacity {capacity}")]
    Full { capacity: usize },
}

/// Arena of entities addressed by stable index
#[derive(Debug, Clone)]
pub struct EntityStore {
    slots: Vec<Entity>,
    /// One past the highest slot ever handed out
    entity_count: u32,
    live_count: u32,
    /// Stack of reusable indices (top is handed out next)
    free: Vec<EntityIndex>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        let mut slots = vec![Entity::default(); ENTITY_CAPACITY];
        // The null slot is permanently removed so iteration never yields it
        slots[0].flags = EntityFlags::REMOVED;

        let free = (1..ENTITY_CAPACITY as u32).rev().map(EntityIndex).collect();

        Self {
            slots,
            entity_count: 1,
            live_count: 0,
            free,
        }
    }

    /// Allocate a slot, or report that the store is full
    pub fn try_create(
        &mut self,
        kind: EntityKind,
        position: Vec2,
    ) -> Result<EntityIndex, StoreError> {
        let index = self.free.pop().ok_or(StoreError::Full {
            capacity: ENTITY_CAPACITY,
        })?;

        let slot = &mut self.slots[index.slot()];
        *slot = Entity::default();
        slot.index = index;
        slot.kind = kind;
        slot.position = position;

        self.entity_count = self.entity_count.max(index.0 + 1);
        self.live_count += 1;
        Ok(index)
    }

    /// Allocate a slot.
    ///
    /// # Panics
    /// When the store is full. The starting scene plus the bounded trail count
    /// always fits, so running out is a logic error.
    pub fn create(&mut self, kind: EntityKind, position: Vec2) -> EntityIndex {
        match self.try_create(kind, position) {
            Ok(index) => index,
            Err(err) => panic!("cannot create {kind:?}: {err}"),
        }
    }

    /// Flag an entity Removed and recycle its slot.
    ///
    /// Returns false (and leaves the free-list alone) for the null index, an
    /// index outside the store, or a slot that is already removed.
    pub fn destroy(&mut self, index: EntityIndex) -> bool {
        let Some(entity) = self.get_mut(index) else {
            log::warn!("destroy of dead or unknown entity {}", index.0);
            return false;
        };
        entity.flags.insert(EntityFlags::REMOVED);
        self.free.push(index);
        self.live_count -= 1;
        true
    }

    /// Live entity at `index`
    pub fn get(&self, index: EntityIndex) -> Option<&Entity> {
        if index.is_null() {
            return None;
        }
        self.slots
            .get(index.slot())
            .filter(|entity| !entity.is_removed())
    }

    pub fn get_mut(&mut self, index: EntityIndex) -> Option<&mut Entity> {
        if index.is_null() {
            return None;
        }
        self.slots
            .get_mut(index.slot())
            .filter(|entity| !entity.is_removed())
    }

    /// Whether `index` still refers to a live entity
    pub fn is_live(&self, index: EntityIndex) -> bool {
        self.get(index).is_some()
    }

    /// Live entities in index order
    pub fn each_live(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.slots[1..self.entity_count as usize]
            .iter()
            .filter(|entity| !entity.is_removed())
    }

    /// Cursor over live indices that does not borrow the store between steps
    pub fn live_cursor(&self) -> LiveCursor {
        LiveCursor { next: 1 }
    }

    pub fn entity_count(&self) -> u32 {
        self.entity_count
    }

    pub fn live_count(&self) -> u32 {
        self.live_count
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.each_live().filter(|entity| entity.kind == kind).count()
    }

    fn create_sized(
        &mut self,
        kind: EntityKind,
        position: Vec2,
        size: Vec2,
        collidable: bool,
    ) -> EntityIndex {
        let index = self.create(kind, position);
        let slot = &mut self.slots[index.slot()];
        slot.size = size;
        if collidable {
            slot.flags.insert(EntityFlags::COLLIDABLE);
        }
        index
    }

    pub fn add_block(&mut self, position: Vec2, size: Vec2) -> EntityIndex {
        self.create_sized(EntityKind::Block, position, size, true)
    }

    pub fn add_wall(&mut self, position: Vec2, size: Vec2) -> EntityIndex {
        self.create_sized(EntityKind::Wall, position, size, true)
    }

    pub fn add_paddle(&mut self, position: Vec2, size: Vec2) -> EntityIndex {
        self.create_sized(EntityKind::Paddle, position, size, true)
    }

    pub fn add_ball(&mut self, position: Vec2, size: Vec2, velocity: Vec2) -> EntityIndex {
        let index = self.create_sized(EntityKind::Ball, position, size, true);
        self.slots[index.slot()].velocity = velocity;
        index
    }

    /// Trail particles are visual only and never collide
    pub fn add_trail_particle(&mut self, position: Vec2, size: Vec2) -> EntityIndex {
        self.create_sized(EntityKind::BallTrailParticle, position, size, false)
    }
}

/// Restartable walk over live indices `1..entity_count`.
///
/// Each step re-reads the store, so entities destroyed mid-walk are skipped and
/// entities created mid-walk are visited.
#[derive(Debug, Clone, Copy)]
pub struct LiveCursor {
    next: u32,
}

impl LiveCursor {
    pub fn next(&mut self, store: &EntityStore) -> Option<EntityIndex> {
        while self.next < store.entity_count {
            let index = EntityIndex(self.next);
            self.next += 1;
            if store.is_live(index) {
                return Some(index);
            }
        }
        None
    }
}

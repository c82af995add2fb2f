//! Entity record stored in the fixed-capacity entity table

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect2;

/// Stable slot index into the entity store. Slot 0 is the null entity.
///
/// Indices are weak references: a slot may be recycled after its entity is
/// destroyed, so holders must recheck the Removed flag before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EntityIndex(pub u32);

impl EntityIndex {
    pub const NULL: EntityIndex = EntityIndex(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityKind {
    #[default]
    Block,
    Paddle,
    Ball,
    /// Visual-only particle left behind the ball
    BallTrailParticle,
    Wall,
}

/// Entity flag bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityFlags(u8);

impl EntityFlags {
    pub const NONE: EntityFlags = EntityFlags(0);
    pub const REMOVED: EntityFlags = EntityFlags(1 << 0);
    pub const COLLIDABLE: EntityFlags = EntityFlags(1 << 1);

    #[inline]
    pub fn contains(self, other: EntityFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: EntityFlags) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: EntityFlags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for EntityFlags {
    type Output = EntityFlags;

    fn bitor(self, rhs: EntityFlags) -> EntityFlags {
        EntityFlags(self.0 | rhs.0)
    }
}

/// A game object. Position is the rectangle center.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    pub index: EntityIndex,
    pub kind: EntityKind,
    pub flags: EntityFlags,
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl Entity {
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.flags.contains(EntityFlags::REMOVED)
    }

    #[inline]
    pub fn is_collidable(&self) -> bool {
        self.flags.contains(EntityFlags::COLLIDABLE)
    }

    /// Collidable and still live
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.is_collidable() && !self.is_removed()
    }

    pub fn rect(&self) -> Rect2 {
        Rect2::from_center_size(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_insert_remove() {
        let mut flags = EntityFlags::NONE;
        assert!(!flags.contains(EntityFlags::COLLIDABLE));

        flags.insert(EntityFlags::COLLIDABLE);
        assert!(flags.contains(EntityFlags::COLLIDABLE));
        assert!(!flags.contains(EntityFlags::REMOVED));

        flags.insert(EntityFlags::REMOVED);
        assert!(flags.contains(EntityFlags::REMOVED | EntityFlags::COLLIDABLE));

        flags.remove(EntityFlags::COLLIDABLE);
        assert_eq!(flags, EntityFlags::REMOVED);
    }

    #[test]
    fn test_entity_rect_is_centered() {
        let entity = Entity {
            position: Vec2::new(100.0, 50.0),
            size: Vec2::new(20.0, 10.0),
            ..Default::default()
        };
        let rect = entity.rect();
        assert_eq!(rect.min, Vec2::new(90.0, 45.0));
        assert_eq!(rect.max, Vec2::new(110.0, 55.0));
    }

    #[test]
    fn test_removed_entity_is_not_an_obstacle() {
        let mut entity = Entity {
            flags: EntityFlags::COLLIDABLE,
            ..Default::default()
        };
        assert!(entity.is_obstacle());
        entity.flags.insert(EntityFlags::REMOVED);
        assert!(!entity.is_obstacle());
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by entity index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{Contact, MoveOutcome, move_entity, sweep};
pub use entity::{Entity, EntityFlags, EntityIndex, EntityKind};
pub use geometry::{Line2, Ray2, Rect2, ray_segment_intersection, reflect, solve_linear_system2};
pub use state::{GamePhase, GameState, block_center};
pub use store::{ENTITY_CAPACITY, EntityStore, LiveCursor, StoreError};
pub use tick::{TickInput, TickReport, tick};

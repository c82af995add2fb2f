//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use glam::Vec2;

use super::collision::move_entity;
use super::entity::EntityKind;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer x this frame; drives the paddle directly
    pub pointer_x: Option<f32>,
    /// Quit requested (window close or Escape)
    pub quit: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub balls_moved: u32,
    pub bounces: u32,
    pub blocks_destroyed: u32,
    pub trails_spawned: u32,
    pub trails_expired: u32,
}

impl std::ops::AddAssign for TickReport {
    fn add_assign(&mut self, rhs: Self) {
        self.balls_moved += rhs.balls_moved;
        self.bounces += rhs.bounces;
        self.blocks_destroyed += rhs.blocks_destroyed;
        self.trails_spawned += rhs.trails_spawned;
        self.trails_expired += rhs.trails_expired;
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    let mut report = TickReport::default();

    if input.quit && state.phase == GamePhase::Playing {
        log::info!("Quit requested at frame {}", state.frame);
        state.phase = GamePhase::Quit;
    }
    if !state.is_running() {
        return report;
    }

    state.frame += 1;

    // Pointer motion places the paddle, no physics
    if let Some(x) = input.pointer_x {
        if let Some(paddle) = state.store.get_mut(state.paddle) {
            paddle.position.x = x;
        }
    }

    // Balls: leave a trail particle behind, then sweep
    let mut cursor = state.store.live_cursor();
    while let Some(index) = cursor.next(&state.store) {
        let Some(ball) = state.store.get(index).filter(|e| e.kind == EntityKind::Ball) else {
            continue;
        };
        let (position, size) = (ball.position, ball.size);

        state.store.add_trail_particle(position, size);
        report.trails_spawned += 1;

        let outcome = move_entity(&mut state.store, index, dt);
        report.balls_moved += 1;
        report.bounces += outcome.bounces;
        report.blocks_destroyed += outcome.destroyed_blocks;
    }

    // Trail particles shrink every frame until they are too small to keep
    let mut cursor = state.store.live_cursor();
    while let Some(index) = cursor.next(&state.store) {
        let Some(particle) = state
            .store
            .get_mut(index)
            .filter(|e| e.kind == EntityKind::BallTrailParticle)
        else {
            continue;
        };

        particle.size = (particle.size - Vec2::splat(TRAIL_SHRINK_PER_FRAME)).max(Vec2::ZERO);
        if particle.size.length_squared() < TRAIL_MIN_SIZE_SQ {
            state.store.destroy(index);
            report.trails_expired += 1;
        }
    }

    if report.blocks_destroyed > 0 {
        log::debug!(
            "frame {}: {} blocks destroyed, {} remaining",
            state.frame,
            report.blocks_destroyed,
            state.blocks_remaining()
        );
    }

    report
}

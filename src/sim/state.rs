//! Game state and starting scene
//!
//! The playfield uses a bottom-left origin with y pointing up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{EntityIndex, EntityKind};
use super::store::EntityStore;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulating
    #[default]
    Playing,
    /// Quit requested; the frame loop should stop
    Quit,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub store: EntityStore,
    /// The player's paddle
    pub paddle: EntityIndex,
    /// Frames simulated so far
    pub frame: u64,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting scene with the default ball launch velocity
    pub fn new() -> Self {
        Self::with_ball_velocity(BALL_START_VELOCITY)
    }

    /// Starting scene: block grid, four framing walls, paddle and ball
    pub fn with_ball_velocity(ball_velocity: Vec2) -> Self {
        let mut store = EntityStore::new();

        spawn_block_grid(&mut store);
        spawn_walls(&mut store);
        let paddle = store.add_paddle(Vec2::new(PLAYFIELD_WIDTH * 0.5, PADDLE_Y), PADDLE_SIZE);
        store.add_ball(BALL_START, BALL_SIZE, ball_velocity);

        log::info!(
            "Scene ready: {} blocks, {} walls, {} entities",
            store.count_kind(EntityKind::Block),
            store.count_kind(EntityKind::Wall),
            store.live_count()
        );

        Self {
            store,
            paddle,
            frame: 0,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Blocks still standing
    pub fn blocks_remaining(&self) -> usize {
        self.store.count_kind(EntityKind::Block)
    }
}

/// Center of the block at (`row`, `column`); row 0 is the top row
pub fn block_center(row: u32, column: u32) -> Vec2 {
    let pitch = BLOCK_SIZE + Vec2::splat(BLOCK_PADDING);
    let grid_width = BLOCK_COLUMNS as f32 * pitch.x - BLOCK_PADDING;
    let left = (PLAYFIELD_WIDTH - grid_width) * 0.5;
    let top = PLAYFIELD_HEIGHT - BLOCK_TOP_MARGIN;

    Vec2::new(
        left + column as f32 * pitch.x + BLOCK_SIZE.x * 0.5,
        top - row as f32 * pitch.y - BLOCK_SIZE.y * 0.5,
    )
}

fn spawn_block_grid(store: &mut EntityStore) {
    for row in 0..BLOCK_ROWS {
        for column in 0..BLOCK_COLUMNS {
            store.add_block(block_center(row, column), BLOCK_SIZE);
        }
    }
}

/// Walls sit just outside the playfield and overlap at the corners
fn spawn_walls(store: &mut EntityStore) {
    let half = WALL_THICKNESS * 0.5;
    let vertical = Vec2::new(WALL_THICKNESS, PLAYFIELD_HEIGHT + 2.0 * WALL_THICKNESS);
    let horizontal = Vec2::new(PLAYFIELD_WIDTH + 2.0 * WALL_THICKNESS, WALL_THICKNESS);

    store.add_wall(Vec2::new(-half, PLAYFIELD_HEIGHT * 0.5), vertical);
    store.add_wall(Vec2::new(PLAYFIELD_WIDTH + half, PLAYFIELD_HEIGHT * 0.5), vertical);
    store.add_wall(Vec2::new(PLAYFIELD_WIDTH * 0.5, PLAYFIELD_HEIGHT + half), horizontal);
    store.add_wall(Vec2::new(PLAYFIELD_WIDTH * 0.5, -half), horizontal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect2;

    #[test]
    fn test_initial_scene_counts() {
        let state = GameState::new();
        assert_eq!(state.store.count_kind(EntityKind::Block), 80);
        assert_eq!(state.store.count_kind(EntityKind::Wall), 4);
        assert_eq!(state.store.count_kind(EntityKind::Paddle), 1);
        assert_eq!(state.store.count_kind(EntityKind::Ball), 1);
        assert_eq!(state.store.count_kind(EntityKind::BallTrailParticle), 0);
        assert_eq!(state.store.live_count(), 86);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paddle_index_is_the_paddle() {
        let state = GameState::new();
        let paddle = state.store.get(state.paddle).unwrap();
        assert_eq!(paddle.kind, EntityKind::Paddle);
        assert_eq!(paddle.size, PADDLE_SIZE);
    }

    #[test]
    fn test_ball_starts_with_launch_velocity() {
        let state = GameState::with_ball_velocity(Vec2::new(-50.0, 120.0));
        let ball = state
            .store
            .each_live()
            .find(|e| e.kind == EntityKind::Ball)
            .unwrap();
        assert_eq!(ball.velocity, Vec2::new(-50.0, 120.0));
        assert_eq!(ball.position, BALL_START);
    }

    #[test]
    fn test_blocks_fit_inside_playfield_without_overlap() {
        let state = GameState::new();
        let playfield =
            Rect2::from_min_size(Vec2::ZERO, Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT));
        let blocks: Vec<Rect2> = state
            .store
            .each_live()
            .filter(|e| e.kind == EntityKind::Block)
            .map(|e| e.rect())
            .collect();

        for (i, a) in blocks.iter().enumerate() {
            assert!(playfield.contains(a.min) && playfield.contains(a.max));
            for b in &blocks[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_nothing_overlaps_the_ball_or_paddle_at_start() {
        let state = GameState::new();
        for mover in state
            .store
            .each_live()
            .filter(|e| matches!(e.kind, EntityKind::Ball | EntityKind::Paddle))
        {
            for other in state.store.each_live().filter(|e| e.index != mover.index) {
                assert!(
                    !mover.rect().overlaps(&other.rect()),
                    "{:?} overlaps {:?}",
                    mover.kind,
                    other.kind
                );
            }
        }
    }

    #[test]
    fn test_grid_is_centered() {
        let first = block_center(0, 0);
        let last = block_center(0, BLOCK_COLUMNS - 1);
        let left_gap = first.x - BLOCK_SIZE.x * 0.5;
        let right_gap = PLAYFIELD_WIDTH - (last.x + BLOCK_SIZE.x * 0.5);
        assert!((left_gap - right_gap).abs() < 1e-3);

        let top_edge = first.y + BLOCK_SIZE.y * 0.5;
        assert!((top_edge - (PLAYFIELD_HEIGHT - BLOCK_TOP_MARGIN)).abs() < 1e-3);
    }
}

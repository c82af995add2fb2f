//! Brick Sweep - Breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entity store, swept collisions, frame driver)
//! - `renderer`: Software rasterizer (flat-color rectangles into a pixel buffer)
//! - `platform`: Input events and frame statistics
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (one update per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions (bottom-left origin, y up)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Block grid
    pub const BLOCK_ROWS: u32 = 8;
    pub const BLOCK_COLUMNS: u32 = 10;
    pub const BLOCK_SIZE: Vec2 = Vec2::new(64.0, 24.0);
    pub const BLOCK_PADDING: f32 = 8.0;
    /// Gap between the top wall and the first block row
    pub const BLOCK_TOP_MARGIN: f32 = 60.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(100.0, 16.0);
    pub const PADDLE_Y: f32 = 40.0;

    /// Ball defaults
    pub const BALL_SIZE: Vec2 = Vec2::new(9.0, 9.0);
    pub const BALL_START: Vec2 = Vec2::new(400.0, 150.0);
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(200.0, 200.0);

    /// Trail particles shrink by this much per axis every frame
    pub const TRAIL_SHRINK_PER_FRAME: f32 = 0.5;
    /// Trail particles are removed once their squared size drops below this
    pub const TRAIL_MIN_SIZE_SQ: f32 = 16.0;

    /// Swept collision solver: bounces resolved per mover per frame
    pub const MAX_COLLISION_ITERATIONS: u32 = 4;
}

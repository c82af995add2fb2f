//! Software rendering module
//!
//! Every entity is drawn as a flat-color rectangle into a CPU pixel buffer.

pub mod color;
pub mod gamma;
pub mod pixel_buffer;

pub use color::{Rgba, colors};
pub use gamma::GammaTables;
pub use pixel_buffer::PixelBuffer;

use serde::{Deserialize, Serialize};

use crate::sim::{EntityKind, GameState, Rect2};

/// Anything the scene can be drawn into
pub trait Rasterizer {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: Rgba);
    /// Fill an axis-aligned rectangle, clipped to the frame
    fn fill_rect(&mut self, rect: Rect2, color: Rgba);
    /// Hand the finished frame to the display
    fn present(&mut self);
}

/// Per-kind colors, used when color-by-kind is enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindColors {
    pub block: Rgba,
    pub paddle: Rgba,
    pub ball: Rgba,
    pub trail: Rgba,
    pub wall: Rgba,
}

impl Default for KindColors {
    fn default() -> Self {
        Self {
            block: colors::BLOCK,
            paddle: colors::PADDLE,
            ball: colors::BALL,
            trail: colors::TRAIL,
            wall: colors::WALL,
        }
    }
}

/// Scene colors. Without `by_kind` every entity uses `foreground`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub foreground: Rgba,
    pub by_kind: Option<KindColors>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            foreground: colors::FOREGROUND,
            by_kind: None,
        }
    }
}

impl Palette {
    pub fn color_for(&self, kind: EntityKind) -> Rgba {
        let Some(kinds) = self.by_kind else {
            return self.foreground;
        };
        match kind {
            EntityKind::Block => kinds.block,
            EntityKind::Paddle => kinds.paddle,
            EntityKind::Ball => kinds.ball,
            EntityKind::BallTrailParticle => kinds.trail,
            EntityKind::Wall => kinds.wall,
        }
    }
}

/// Draw every live entity and present the frame
pub fn draw_scene(state: &GameState, target: &mut impl Rasterizer, palette: &Palette) {
    target.clear(palette.background);
    for entity in state.store.each_live() {
        target.fill_rect(entity.rect(), palette.color_for(entity.kind));
    }
    target.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    /// Records draw calls instead of rasterizing
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        rects: Vec<(Rect2, Rgba)>,
        presents: usize,
    }

    impl Rasterizer for Recorder {
        fn clear(&mut self, _color: Rgba) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, rect: Rect2, color: Rgba) {
            self.rects.push((rect, color));
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[test]
    fn test_draw_scene_submits_every_live_entity() {
        let state = GameState::new();
        let mut recorder = Recorder::default();
        draw_scene(&state, &mut recorder, &Palette::default());

        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.presents, 1);
        assert_eq!(recorder.rects.len(), 86);
        assert!(recorder.rects.iter().all(|(_, c)| *c == colors::FOREGROUND));
    }

    #[test]
    fn test_palette_by_kind() {
        let palette = Palette {
            by_kind: Some(KindColors::default()),
            ..Default::default()
        };
        assert_eq!(palette.color_for(EntityKind::Paddle), colors::PADDLE);
        assert_eq!(palette.color_for(EntityKind::Wall), colors::WALL);
        assert_eq!(Palette::default().color_for(EntityKind::Paddle), colors::FOREGROUND);
    }

    #[test]
    fn test_draw_scene_into_pixel_buffer() {
        let state = GameState::new();
        let mut buffer = PixelBuffer::new(PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32);
        draw_scene(&state, &mut buffer, &Palette::default());

        let white = colors::FOREGROUND.to_u32();
        let black = colors::BACKGROUND.to_u32();
        let ball = BALL_START;
        let paddle = Vec2::new(PLAYFIELD_WIDTH * 0.5, PADDLE_Y);
        assert_eq!(buffer.front_pixels().len(), 800 * 600);
        assert_eq!(buffer.pixel(ball.x as u32, ball.y as u32), Some(white));
        assert_eq!(buffer.pixel(paddle.x as u32, paddle.y as u32), Some(white));
        // Empty space between the paddle and the ball
        assert_eq!(buffer.pixel(400, 100), Some(black));
    }
}

//! Color types for the software rasterizer
//!
//! Pixels are packed as `0xRRGGBBAA`.

use serde::{Deserialize, Serialize};

pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Floating point RGBA color, channels in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Pack into `0xRRGGBBAA`
    pub fn to_u32(self) -> u32 {
        pack_rgba(
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        )
    }

    pub fn from_u32(color: u32) -> Self {
        Self::new(
            red(color) as f32 / 255.0,
            green(color) as f32 / 255.0,
            blue(color) as f32 / 255.0,
            alpha(color) as f32 / 255.0,
        )
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << RED_SHIFT
        | (g as u32) << GREEN_SHIFT
        | (b as u32) << BLUE_SHIFT
        | (a as u32) << ALPHA_SHIFT
}

#[inline]
pub fn red(color: u32) -> u8 {
    (color >> RED_SHIFT) as u8
}

#[inline]
pub fn green(color: u32) -> u8 {
    (color >> GREEN_SHIFT) as u8
}

#[inline]
pub fn blue(color: u32) -> u8 {
    (color >> BLUE_SHIFT) as u8
}

#[inline]
pub fn alpha(color: u32) -> u8 {
    (color >> ALPHA_SHIFT) as u8
}

#[inline]
pub fn with_red(color: u32, value: u8) -> u32 {
    (color & !(0xFF << RED_SHIFT)) | (value as u32) << RED_SHIFT
}

#[inline]
pub fn with_green(color: u32, value: u8) -> u32 {
    (color & !(0xFF << GREEN_SHIFT)) | (value as u32) << GREEN_SHIFT
}

#[inline]
pub fn with_blue(color: u32, value: u8) -> u32 {
    (color & !(0xFF << BLUE_SHIFT)) | (value as u32) << BLUE_SHIFT
}

#[inline]
pub fn with_alpha(color: u32, value: u8) -> u32 {
    (color & !(0xFF << ALPHA_SHIFT)) | (value as u32) << ALPHA_SHIFT
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const FOREGROUND: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const WALL: Rgba = Rgba::opaque(0.3, 0.3, 0.4);
    pub const PADDLE: Rgba = Rgba::opaque(0.2, 0.8, 0.4);
    pub const BALL: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const TRAIL: Rgba = Rgba::opaque(0.5, 0.6, 1.0);
    pub const BLOCK: Rgba = Rgba::opaque(0.4, 0.7, 1.0);
}

//! RGBA8888 frame buffer for software rendering
//!
//! World coordinates use a bottom-left origin, the buffer is stored top row
//! first, so rows are flipped on write.

use std::cell::OnceCell;

use super::Rasterizer;
use super::color::Rgba;
use super::gamma::GammaTables;
use crate::sim::Rect2;

/// Double-buffered `0xRRGGBBAA` pixel buffer
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// Buffer being drawn this frame
    back: Vec<u32>,
    /// Last presented frame (the "texture" handed to the display)
    front: Vec<u32>,
    gamma_correct: bool,
    /// Built on first gamma-corrected fill
    gamma: OnceCell<GammaTables>,
    frames_presented: u64,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            back: vec![0; len],
            front: vec![0; len],
            gamma_correct: false,
            gamma: OnceCell::new(),
            frames_presented: 0,
        }
    }

    /// Treat fill colors as linear and convert them on write
    pub fn with_gamma_correction(mut self, enabled: bool) -> Self {
        self.gamma_correct = enabled;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn gamma_tables(&self) -> &GammaTables {
        self.gamma.get_or_init(GammaTables::default)
    }

    /// Packed pixel at (`x`, `y`) in bottom-left coordinates, from the back buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = (self.height - 1 - y) as usize;
        self.back.get(row * self.width as usize + x as usize).copied()
    }

    /// Pixel converted back to linear space when gamma correction is on
    pub fn linear_pixel(&self, x: u32, y: u32) -> Option<u32> {
        let pixel = self.pixel(x, y)?;
        Some(if self.gamma_correct {
            self.gamma_tables().srgb_to_linear(pixel)
        } else {
            pixel
        })
    }

    /// Presented frame as raw bytes (native endian `u32` pixels, top row first)
    pub fn front_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.front)
    }

    /// Presented frame as R, G, B, A bytes per pixel, top row first
    pub fn front_rgba8(&self) -> Vec<u8> {
        self.front.iter().flat_map(|pixel| pixel.to_be_bytes()).collect()
    }

    /// Presented frame as packed pixels
    pub fn front_pixels(&self) -> &[u32] {
        &self.front
    }

    fn encode(&self, color: Rgba) -> u32 {
        let packed = color.to_u32();
        if self.gamma_correct {
            self.gamma_tables().linear_to_srgb(packed)
        } else {
            packed
        }
    }
}

impl Rasterizer for PixelBuffer {
    fn clear(&mut self, color: Rgba) {
        let packed = self.encode(color);
        self.back.fill(packed);
    }

    fn fill_rect(&mut self, rect: Rect2, color: Rgba) {
        let width = self.width as i32;
        let height = self.height as i32;

        let min_x = (rect.min.x as i32).max(0);
        let min_y = (rect.min.y as i32).max(0);
        let max_x = (rect.max.x as i32).min(width);
        let max_y = (rect.max.y as i32).min(height);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let packed = self.encode(color);
        let stride = self.width as usize;
        for y in min_y..max_y {
            let row = (height - 1 - y) as usize * stride;
            self.back[row + min_x as usize..row + max_x as usize].fill(packed);
        }
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.frames_presented += 1;
        log::trace!("presented frame {}", self.frames_presented);
    }
}

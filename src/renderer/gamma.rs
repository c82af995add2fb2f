//! Gamma lookup tables between linear and sRGB-ish (γ = 2.2) channel values

use super::color::{alpha, blue, green, pack_rgba, red};

pub const GAMMA: f32 = 2.2;

/// Both directions of the per-channel gamma mapping. Alpha is never remapped.
#[derive(Debug, Clone)]
pub struct GammaTables {
    linear_to_srgb: [u8; 256],
    srgb_to_linear: [u8; 256],
}

impl GammaTables {
    pub fn new(gamma: f32) -> Self {
        log::debug!("Building gamma tables (gamma {gamma})");
        Self {
            linear_to_srgb: build_table(1.0 / gamma),
            srgb_to_linear: build_table(gamma),
        }
    }

    pub fn linear_to_srgb(&self, color: u32) -> u32 {
        remap(&self.linear_to_srgb, color)
    }

    pub fn srgb_to_linear(&self, color: u32) -> u32 {
        remap(&self.srgb_to_linear, color)
    }
}

impl Default for GammaTables {
    fn default() -> Self {
        Self::new(GAMMA)
    }
}

fn build_table(exponent: f32) -> [u8; 256] {
    std::array::from_fn(|i| {
        let c = (i as f32 / 255.0).powf(exponent);
        (c * 255.0 + 0.5) as u8
    })
}

#[inline]
fn remap(table: &[u8; 256], color: u32) -> u32 {
    pack_rgba(
        table[red(color) as usize],
        table[green(color) as usize],
        table[blue(color) as usize],
        alpha(color),
    )
}

//! Luminance grayscale conversion.

use super::image::{CHANNELS, RasterImage};

/// Luma weights in thousandths: 0.114 B + 0.587 G + 0.299 R.
const WEIGHT_B: u32 = 114;
const WEIGHT_G: u32 = 587;
const WEIGHT_R: u32 = 299;

/// Luminance of one B,G,R pixel, truncated.
///
/// Integer arithmetic keeps gray input exact: the weights sum to 1000, so
/// `luma(v, v, v) == v` for every `v`.
#[inline]
pub fn luma(b: u8, g: u8, r: u8) -> u8 {
    ((WEIGHT_B * b as u32 + WEIGHT_G * g as u32 + WEIGHT_R * r as u32) / 1000) as u8
}

/// Replace every pixel with its luminance in all three channels.
pub fn to_grayscale(image: &RasterImage) -> RasterImage {
    let mut out = Vec::with_capacity(image.pixels().len());
    for px in image.pixels().chunks_exact(CHANNELS) {
        let gray = luma(px[0], px[1], px[2]);
        out.extend_from_slice(&[gray, gray, gray]);
    }
    image.with_same_dimensions(out)
}

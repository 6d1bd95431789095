//! Shared test utilities for the edgekit test suite.
//!
//! Provides synthetic image builders with known structure (gradients, steps,
//! isolated bright pixels) and a helper for dropping raw bytes on disk.
//!
//! # Usage
//!
//! ```text
//! use crate::imaging::{Color, sobel};
//! use crate::test_helpers::*;
//!
//! let img = vertical_step(5, 5, 2);
//! let edges = sobel(&img);
//! assert_eq!(edges.pixel(2, 2), Color::WHITE);
//! ```

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::imaging::{Color, RasterImage};

// =========================================================================
// Image builders
// =========================================================================

/// Image whose channels all vary with position, so every pixel differs
/// from its neighbours and the three channels differ from each other.
pub fn gradient_image(width: u32, height: u32) -> RasterImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 37 + y * 11) % 256) as u8);
            pixels.push(((x * 13 + y * 53) % 256) as u8);
            pixels.push(((x * 7 + y * 7 + 90) % 256) as u8);
        }
    }
    RasterImage::from_pixels(width, height, pixels).unwrap()
}

/// Black image with a single white pixel at `(x, y)`.
pub fn single_bright_pixel(width: u32, height: u32, x: u32, y: u32) -> RasterImage {
    let img = RasterImage::new(width, height).unwrap();
    let offset = img.offset(x as usize, y as usize);
    let mut pixels = img.into_pixels();
    pixels[offset..offset + 3].copy_from_slice(&Color::WHITE.bgr());
    RasterImage::from_pixels(width, height, pixels).unwrap()
}

/// Black for columns `< split`, white from `split` on.
pub fn vertical_step(width: u32, height: u32, split: u32) -> RasterImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let c = if x < split { Color::BLACK } else { Color::WHITE };
            pixels.extend_from_slice(&c.bgr());
        }
    }
    RasterImage::from_pixels(width, height, pixels).unwrap()
}

// =========================================================================
// Files
// =========================================================================

/// Write `bytes` to `name` inside `tmp` and return the full path.
pub fn write_raw(tmp: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

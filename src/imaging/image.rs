//! In-memory raster image: dimensions plus a packed B,G,R byte buffer.
//!
//! [`RasterImage`] is a plain value. Every filter in this crate borrows one
//! and returns a freshly allocated result; nothing mutates an image in place
//! after construction.
//!
//! The buffer layout is fixed:
//!
//! ```text
//! pixels[3 * (y * width + x) + 0]  blue
//! pixels[3 * (y * width + x) + 1]  green
//! pixels[3 * (y * width + x) + 2]  red
//! ```
//!
//! Rows appear in the order they are stored in the file (see
//! [`codec`](super::codec) for the scan-order note). Row padding never lives
//! in this buffer, so `pixels.len() == 3 * width * height` always holds.

use std::str::FromStr;
use thiserror::Error;

/// Bytes per pixel (B, G, R).
pub const CHANNELS: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}

/// An RGB color. Stored on disk and in [`RasterImage`] as B,G,R.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value in all three channels.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channel bytes in storage order.
    pub const fn bgr(self) -> [u8; CHANNELS] {
        [self.b, self.g, self.r]
    }

    pub const fn from_bgr(bgr: [u8; CHANNELS]) -> Self {
        Self::new(bgr[2], bgr[1], bgr[0])
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse `R,G,B`, each component 0-255.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts[..] else {
            return Err(format!("expected R,G,B (got '{s}')"));
        };
        let channel = |v: &str| {
            v.parse::<u8>()
                .map_err(|_| format!("color component '{v}' is not in 0-255"))
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

/// A width × height grid of 24-bit pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Number of bytes a `width × height` image occupies.
pub(crate) fn buffer_len(width: u32, height: u32) -> usize {
    CHANNELS * width as usize * height as usize
}

fn check_dimensions(width: u32, height: u32) -> Result<(), ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimensions { width, height });
    }
    Ok(())
}

impl RasterImage {
    /// Zero-filled (black) image.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; buffer_len(width, height)],
        })
    }

    /// Wrap an existing B,G,R buffer. Takes ownership; the length must match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        let expected = buffer_len(width, height);
        if pixels.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        let pixels = color.bgr().repeat(width as usize * height as usize);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image of the same size as `self` from a buffer produced by a
    /// filter. Filters always allocate `buffer_len(width, height)` bytes.
    pub(crate) fn with_same_dimensions(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte offset of pixel `(x, y)` in the buffer.
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        CHANNELS * (y * self.width as usize + x)
    }

    /// Color at `(x, y)`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let i = self.offset(x as usize, y as usize);
        Color::from_bgr([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// One row of pixel bytes (`3 * width` long).
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = CHANNELS * self.width as usize;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// True when every pixel has the same color.
    pub fn is_uniform(&self) -> bool {
        let first = &self.pixels[..CHANNELS];
        self.pixels.chunks_exact(CHANNELS).all(|px| px == first)
    }
}

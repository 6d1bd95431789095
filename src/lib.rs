//! # edgekit
//!
//! Gaussian smoothing and gradient edge detection on uncompressed 24-bit
//! bitmaps, plus the file codec to read and write them.
//!
//! # Architecture: Pixel Pipeline
//!
//! One input bitmap flows through a fixed sequence of image → image
//! transforms. Each stage's result is written to disk:
//!
//! ```text
//! 1. Decode     input.bmp       →  RasterImage
//! 2. Blur       RasterImage     →  blur.bmp        (vertical ×3, horizontal ×3)
//! 3. Grayscale  blurred         →  grayscale.bmp
//! 4. Edges      grayscale       →  roberts.bmp, prewitt.bmp, sobel.bmp
//! ```
//!
//! Every transform is a pure function over a borrowed [`imaging::RasterImage`],
//! so the filters are unit-tested on small synthetic images without touching
//! the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Raster image type, bitmap codec, kernels, convolution, gradients, grayscale |
//! | [`pipeline`] | Runs the configured stages on one file and writes `manifest.json` |
//! | [`config`] | `edgekit.toml` loading, merging over stock defaults, and validation |
//! | [`output`] | CLI output formatting for single commands and pipeline runs |
//!
//! # Design Decisions
//!
//! ## Unpadded Pixel Buffers
//!
//! Bitmap rows are padded to a multiple of four bytes on disk. The decoder
//! strips that padding and the encoder writes it back as zeros, so an
//! in-memory image always holds exactly `3 * width * height` bytes and filters
//! index pixels without knowing about the file format.
//!
//! ## Stored Row Order
//!
//! Rows are kept in the order they appear in the file. A standard bitmap with
//! positive height stores the bottom row first, so `y = 0` in a decoded image
//! is the visual bottom. Every filter is symmetric under a vertical flip, and
//! decode/encode round-trip the order unchanged. See [`imaging::codec`].
//!
//! ## Rounded, Clamped Channels
//!
//! Convolution sums are clamped to `0..=255` and rounded; gradient magnitudes
//! are truncated then clamped. A uniform image is a fixed point of smoothing
//! and maps to all-zero gradients.
//!
//! ## Single-Threaded
//!
//! All passes run sequentially on the calling thread. Images are processed
//! one at a time with no shared state.

pub mod config;
pub mod imaging;
pub mod output;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Separable 1-D convolution and Gaussian smoothing.
//!
//! Each pass runs one kernel along a single axis, independently for each of
//! the three channels. Samples that fall outside the image are clamped to the
//! nearest edge pixel. Sums are clamped to `[0, 255]` and rounded.

use super::image::{CHANNELS, RasterImage};
use super::kernel::{FilterError, Kernel};
use std::fmt;
use std::str::FromStr;

/// Number of times each axis pass is repeated by [`gaussian_smooth`].
pub const SMOOTH_PASSES: usize = 3;

/// Direction of a single 1-D pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along each row.
    Horizontal,
    /// Along each column.
    Vertical,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown axis '{s}' (expected horizontal or vertical)"))
    }
}

#[inline]
fn to_channel(sum: f64) -> u8 {
    sum.clamp(0.0, 255.0).round() as u8
}

/// One pass of `kernel` along `axis`.
pub fn convolve(image: &RasterImage, kernel: &Kernel, axis: Axis) -> RasterImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.pixels();
    let weights = kernel.weights();
    let radius = kernel.radius() as isize;
    let mut out = vec![0u8; src.len()];

    let last = match axis {
        Axis::Horizontal => w - 1,
        Axis::Vertical => h - 1,
    } as isize;

    for y in 0..h {
        for x in 0..w {
            let along = match axis {
                Axis::Horizontal => x,
                Axis::Vertical => y,
            } as isize;

            let mut acc = [0.0f64; CHANNELS];
            for (k, &weight) in weights.iter().enumerate() {
                let s = (along + k as isize - radius).clamp(0, last) as usize;
                let idx = match axis {
                    Axis::Horizontal => image.offset(s, y),
                    Axis::Vertical => image.offset(x, s),
                };
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += src[idx + c] as f64 * weight;
                }
            }

            let dst = image.offset(x, y);
            for (c, a) in acc.into_iter().enumerate() {
                out[dst + c] = to_channel(a);
            }
        }
    }

    image.with_same_dimensions(out)
}

/// Convolve every row with `kernel` (horizontal pass).
pub fn convolve_horizontal(image: &RasterImage, kernel: &Kernel) -> RasterImage {
    convolve(image, kernel, Axis::Horizontal)
}

/// Convolve every column with `kernel` (vertical pass).
pub fn convolve_vertical(image: &RasterImage, kernel: &Kernel) -> RasterImage {
    convolve(image, kernel, Axis::Vertical)
}

/// Smooth `image` with a Gaussian of `kernel_size` taps and standard
/// deviation `sigma`.
///
/// The vertical pass is applied [`SMOOTH_PASSES`] times, then the horizontal
/// pass the same number of times. Repeating a pass widens the effective blur,
/// so this is not equivalent to a single separable pass with the same kernel.
pub fn gaussian_smooth(
    image: &RasterImage,
    kernel_size: usize,
    sigma: f64,
) -> Result<RasterImage, FilterError> {
    let kernel = Kernel::gaussian(kernel_size, sigma)?;
    Ok(smooth_with(image, &kernel))
}

/// The pass sequence of [`gaussian_smooth`] with a prebuilt kernel.
pub fn smooth_with(image: &RasterImage, kernel: &Kernel) -> RasterImage {
    let mut current = convolve_vertical(image, kernel);
    for _ in 1..SMOOTH_PASSES {
        current = convolve_vertical(&current, kernel);
    }
    for _ in 0..SMOOTH_PASSES {
        current = convolve_horizontal(&current, kernel);
    }
    current
}

//! Gradient-magnitude edge detectors: Roberts, Prewitt and Sobel.
//!
//! Each operator correlates two small integer kernels, `Gx` and `Gy`, with
//! every channel and writes `sqrt(gx² + gy²)` (truncated, clamped to 255).
//!
//! | Operator | Extent | Anchor | Computed region |
//! |---|---|---|---|
//! | Roberts | 2×2 | top-left | rows `0..=h-2`, cols `0..=w-2` |
//! | Prewitt | 3×3 | center | rows `1..=h-2`, cols `1..=w-2` |
//! | Sobel | 3×3 | center | rows `1..=h-2`, cols `1..=w-2` |
//!
//! No sample ever leaves the image, so there is no border handling: pixels
//! outside the computed region are left at zero.

use super::image::{CHANNELS, RasterImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pair of square integer kernels applied at the same position.
#[derive(Debug, Clone, Copy)]
struct GradientKernels<const N: usize> {
    gx: [[i32; N]; N],
    gy: [[i32; N]; N],
    /// Row/column of the kernel cell that lands on the output pixel.
    anchor: usize,
}

const ROBERTS: GradientKernels<2> = GradientKernels {
    gx: [[1, 0], [0, -1]],
    gy: [[0, 1], [-1, 0]],
    anchor: 0,
};

const PREWITT: GradientKernels<3> = GradientKernels {
    gx: [[1, 1, 1], [0, 0, 0], [-1, -1, -1]],
    gy: [[1, 0, -1], [1, 0, -1], [1, 0, -1]],
    anchor: 1,
};

const SOBEL: GradientKernels<3> = GradientKernels {
    gx: [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
    gy: [[-1, -2, -1], [0, 0, 0], [1, 2, 1]],
    anchor: 1,
};

#[inline]
fn magnitude(gx: i32, gy: i32) -> u8 {
    let m = ((gx * gx + gy * gy) as f64).sqrt() as i32;
    m.clamp(0, 255) as u8
}

fn apply_kernels<const N: usize>(image: &RasterImage, kernels: &GradientKernels<N>) -> RasterImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.pixels();
    let mut out = vec![0u8; src.len()];

    // Cells after the anchor must still land inside the image.
    let tail = N - 1 - kernels.anchor;
    if w < N || h < N {
        return image.with_same_dimensions(out);
    }

    for y in kernels.anchor..h - tail {
        for x in kernels.anchor..w - tail {
            let dst = image.offset(x, y);
            for c in 0..CHANNELS {
                let mut gx = 0;
                let mut gy = 0;
                for ky in 0..N {
                    for kx in 0..N {
                        let sy = y + ky - kernels.anchor;
                        let sx = x + kx - kernels.anchor;
                        let v = src[image.offset(sx, sy) + c] as i32;
                        gx += kernels.gx[ky][kx] * v;
                        gy += kernels.gy[ky][kx] * v;
                    }
                }
                out[dst + c] = magnitude(gx, gy);
            }
        }
    }

    image.with_same_dimensions(out)
}

/// Roberts cross, 2×2.
///
/// ```text
/// Gx = [1  0]    Gy = [ 0  1]
///      [0 -1]         [-1  0]
/// ```
pub fn roberts(image: &RasterImage) -> RasterImage {
    apply_kernels(image, &ROBERTS)
}

/// Prewitt, 3×3.
///
/// ```text
/// Gx = [ 1  1  1]    Gy = [1  0 -1]
///      [ 0  0  0]         [1  0 -1]
///      [-1 -1 -1]         [1  0 -1]
/// ```
pub fn prewitt(image: &RasterImage) -> RasterImage {
    apply_kernels(image, &PREWITT)
}

/// Sobel, 3×3.
///
/// ```text
/// Gx = [-1  0  1]    Gy = [-1 -2 -1]
///      [-2  0  2]         [ 0  0  0]
///      [-1  0  1]         [ 1  2  1]
/// ```
pub fn sobel(image: &RasterImage) -> RasterImage {
    apply_kernels(image, &SOBEL)
}

/// Named edge detector, as used in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Roberts,
    Prewitt,
    Sobel,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Roberts, Operator::Prewitt, Operator::Sobel];

    pub fn apply(self, image: &RasterImage) -> RasterImage {
        match self {
            Operator::Roberts => roberts(image),
            Operator::Prewitt => prewitt(image),
            Operator::Sobel => sobel(image),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Roberts => "roberts",
            Operator::Prewitt => "prewitt",
            Operator::Sobel => "sobel",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown operator '{s}' (expected roberts, prewitt or sobel)"))
    }
}

//! Raster images, the bitmap codec, and the filters that run on them.
//!
//! | Operation | Function |
//! |---|---|
//! | **Decode / encode** | [`decode`], [`encode`] (uncompressed 24-bit bitmap) |
//! | **Gaussian kernel** | [`Kernel::gaussian`] |
//! | **Separable convolution** | [`convolve`] along an [`Axis`], or [`convolve_horizontal`], [`convolve_vertical`] |
//! | **Smoothing** | [`gaussian_smooth`] (vertical ×3, then horizontal ×3) |
//! | **Grayscale** | [`to_grayscale`] |
//! | **Edges** | [`roberts`], [`prewitt`], [`sobel`], or [`Operator::apply`] |
//!
//! The module is split into:
//! - **Image**: [`RasterImage`] value type and [`Color`]
//! - **Bitmap / Codec**: header layout and file I/O
//! - **Kernel / Params**: validated filter parameters
//! - **Convolution / Gradient / Color**: pure image → image transforms
//!
//! Every transform borrows its input and allocates a new image of the same
//! dimensions.

pub mod bitmap;
pub mod codec;
mod color;
mod convolution;
mod gradient;
mod image;
mod kernel;
mod params;

pub use codec::{CodecError, decode, decode_bytes, encode, encode_to, encode_to_vec};
pub use color::{luma, to_grayscale};
pub use convolution::{
    Axis, SMOOTH_PASSES, convolve, convolve_horizontal, convolve_vertical, gaussian_smooth,
    smooth_with,
};
pub use gradient::{Operator, prewitt, roberts, sobel};
pub use image::{CHANNELS, Color, ImageError, RasterImage};
pub use kernel::{FilterError, Kernel};
pub use params::Smoothing;

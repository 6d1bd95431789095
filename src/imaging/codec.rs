//! Reading and writing uncompressed 24-bit bitmap files.
//!
//! ## Layout
//!
//! A file is a 14-byte file header, a 40-byte info header (see
//! [`bitmap`](super::bitmap)), then `height` rows of [`row_stride`] bytes:
//! `3 * width` pixel bytes in B,G,R order followed by zero padding up to the
//! next multiple of four. The file header's offset locates the pixel array;
//! it must lie past both headers.
//!
//! ## Scan order
//!
//! Rows are written and read in buffer order: the first row of a
//! [`RasterImage`] is the first row of the pixel array. Conventional readers
//! treat a positive height as bottom-up storage and will show our images
//! vertically flipped. Files round-trip through this codec unchanged, and
//! existing output depends on this order, so it is kept.
//!
//! ## Padding
//!
//! Padding exists only on disk. Decoding strips it and encoding re-inserts
//! zeros, so an in-memory image is always exactly `3 * width * height` bytes.

use super::bitmap::{
    BITS_PER_PIXEL, COMPRESSION_NONE, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader,
    SIGNATURE, row_stride,
};
use super::image::{CHANNELS, ImageError, RasterImage, buffer_len};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Could not read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed bitmap: {0}")]
    Malformed(String),
    #[error("Unsupported bitmap: {0}")]
    Unsupported(String),
    #[error("Invalid image: {0}")]
    Image(#[from] ImageError),
}

/// Read and decode a bitmap file.
///
/// A missing or unreadable file yields [`CodecError::Unreadable`], never a
/// partially constructed image.
pub fn decode(path: &Path) -> Result<RasterImage, CodecError> {
    let data = std::fs::read(path).map_err(|source| CodecError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&data)
}

/// Decode a bitmap held in memory.
pub fn decode_bytes(data: &[u8]) -> Result<RasterImage, CodecError> {
    let file_header = FileHeader::parse(data)
        .ok_or_else(|| CodecError::Malformed("file header truncated".into()))?;
    if file_header.signature != SIGNATURE {
        return Err(CodecError::Malformed(format!(
            "bad signature {:?}, expected \"BM\"",
            String::from_utf8_lossy(&file_header.signature)
        )));
    }

    let info = InfoHeader::parse(&data[FILE_HEADER_LEN..])
        .ok_or_else(|| CodecError::Malformed("info header truncated".into()))?;
    if (info.header_size as usize) < INFO_HEADER_LEN {
        return Err(CodecError::Unsupported(format!(
            "info header of {} bytes",
            info.header_size
        )));
    }
    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(CodecError::Unsupported(format!(
            "{} bits per pixel (only {BITS_PER_PIXEL} is supported)",
            info.bits_per_pixel
        )));
    }
    if info.compression != COMPRESSION_NONE {
        return Err(CodecError::Unsupported(format!(
            "compression method {}",
            info.compression
        )));
    }
    if info.width <= 0 || info.height <= 0 {
        return Err(CodecError::Unsupported(format!(
            "dimensions {}x{} (width and height must be positive)",
            info.width, info.height
        )));
    }

    let width = info.width as u32;
    let height = info.height as u32;
    let stride = row_stride(width);
    let row_len = CHANNELS * width as usize;

    // The pixel array may start anywhere after the headers; larger info
    // headers push it further out.
    let start = file_header.image_offset as usize;
    let headers_end = FILE_HEADER_LEN.saturating_add(info.header_size as usize);
    if start < headers_end {
        return Err(CodecError::Malformed(format!(
            "pixel array offset {start} points inside the headers (which end at {headers_end})"
        )));
    }
    let end = stride
        .checked_mul(height as usize)
        .and_then(|len| start.checked_add(len))
        .ok_or_else(|| CodecError::Malformed("pixel array size overflows".into()))?;
    if end > data.len() {
        return Err(CodecError::Malformed(format!(
            "pixel array truncated: need {} bytes from offset {start}, file has {}",
            end - start,
            data.len().saturating_sub(start)
        )));
    }

    let mut pixels = Vec::with_capacity(buffer_len(width, height));
    for row in data[start..end].chunks_exact(stride) {
        pixels.extend_from_slice(&row[..row_len]);
    }

    Ok(RasterImage::from_pixels(width, height, pixels)?)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn encode(image: &RasterImage, path: &Path) -> Result<(), CodecError> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    encode_to(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Both headers for a `width` x `height` file.
///
/// Fails when the dimensions or the total file size do not fit the header
/// fields, so nothing is written for an image the format cannot describe.
pub(crate) fn headers_for(
    width: u32,
    height: u32,
) -> Result<(FileHeader, InfoHeader), CodecError> {
    let too_large =
        || CodecError::Unsupported(format!("{width}x{height} is too large for a bitmap header"));
    let pixel_array_len = row_stride(width)
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let file = FileHeader::for_pixel_array(pixel_array_len).ok_or_else(too_large)?;
    let info = InfoHeader::for_dimensions(width, height).ok_or_else(too_large)?;
    Ok((file, info))
}

/// Encode `image` into any writer.
pub fn encode_to<W: Write>(image: &RasterImage, writer: &mut W) -> Result<(), CodecError> {
    let (width, height) = image.dimensions();
    let (file_header, info_header) = headers_for(width, height)?;

    writer.write_all(&file_header.to_bytes())?;
    writer.write_all(&info_header.to_bytes())?;

    let padding = [0u8; 3];
    let pad = row_stride(width) - CHANNELS * width as usize;
    for y in 0..height {
        writer.write_all(image.row(y))?;
        writer.write_all(&padding[..pad])?;
    }
    Ok(())
}

/// Encode `image` into a byte vector.
pub fn encode_to_vec(image: &RasterImage) -> Result<Vec<u8>, CodecError> {
    let (width, height) = image.dimensions();
    let (file_header, _) = headers_for(width, height)?;
    let mut out = Vec::with_capacity(file_header.file_size as usize);
    encode_to(image, &mut out)?;
    Ok(out)
}

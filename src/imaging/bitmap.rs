//! Bitmap file and info headers.
//!
//! Both headers are packed little-endian structures:
//!
//! ```text
//! File header (14 bytes)
//!   0  u8   'B'
//!   1  u8   'M'
//!   2  u32  file size (headers + pixel array)
//!   6  u16  reserved, 0
//!   8  u16  reserved, 0
//!  10  u32  offset of the pixel array
//!
//! Info header (40 bytes, BITMAPINFOHEADER)
//!   0  u32  header size (40)
//!   4  i32  width
//!   8  i32  height
//!  12  u16  color planes (1)
//!  14  u16  bits per pixel (24)
//!  16  u32  compression (0 = none)
//!  20  u32  image size (0 allowed when uncompressed)
//!  24  i32  horizontal resolution
//!  28  i32  vertical resolution
//!  32  u32  palette colors
//!  36  u32  important colors
//! ```
//!
//! Later info header versions (V4, V5) extend the 40-byte layout; the fields
//! above keep their offsets, so only the first 40 bytes are read.

pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
/// Offset of the pixel array in files we write.
pub const PIXEL_ARRAY_OFFSET: u32 = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;

pub const SIGNATURE: [u8; 2] = *b"BM";
pub const BITS_PER_PIXEL: u16 = 24;
pub const COMPRESSION_NONE: u32 = 0;

/// Length in bytes of one stored row: `3 * width` rounded up to a multiple of 4.
pub fn row_stride(width: u32) -> usize {
    (width as usize * 3).div_ceil(4) * 4
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    read_u32(data, offset) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved_a: u16,
    pub reserved_b: u16,
    pub image_offset: u32,
}

impl FileHeader {
    /// Header for a file whose pixel array is `pixel_bytes` long.
    /// Returns `None` if the file size does not fit the 32-bit field.
    pub fn for_pixel_array(pixel_bytes: usize) -> Option<Self> {
        let file_size = u32::try_from(pixel_bytes)
            .ok()?
            .checked_add(PIXEL_ARRAY_OFFSET)?;
        Some(Self {
            signature: SIGNATURE,
            file_size,
            reserved_a: 0,
            reserved_b: 0,
            image_offset: PIXEL_ARRAY_OFFSET,
        })
    }

    /// Parse from the first [`FILE_HEADER_LEN`] bytes of `data`.
    /// Returns `None` if `data` is too short.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < FILE_HEADER_LEN {
            return None;
        }
        Some(Self {
            signature: [data[0], data[1]],
            file_size: read_u32(data, 2),
            reserved_a: read_u16(data, 6),
            reserved_b: read_u16(data, 8),
            image_offset: read_u32(data, 10),
        })
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved_a.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved_b.to_le_bytes());
        out[10..14].copy_from_slice(&self.image_offset.to_le_bytes());
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub horizontal_resolution: i32,
    pub vertical_resolution: i32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// Header for an uncompressed 24-bit image.
    /// Returns `None` if either side does not fit the signed 32-bit fields.
    pub fn for_dimensions(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            header_size: INFO_HEADER_LEN as u32,
            width: i32::try_from(width).ok()?,
            height: i32::try_from(height).ok()?,
            color_planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size: 0,
            horizontal_resolution: 0,
            vertical_resolution: 0,
            palette_colors: 0,
            important_colors: 0,
        })
    }

    /// Parse from the first [`INFO_HEADER_LEN`] bytes of `data`.
    /// Returns `None` if `data` is too short.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < INFO_HEADER_LEN {
            return None;
        }
        Some(Self {
            header_size: read_u32(data, 0),
            width: read_i32(data, 4),
            height: read_i32(data, 8),
            color_planes: read_u16(data, 12),
            bits_per_pixel: read_u16(data, 14),
            compression: read_u32(data, 16),
            image_size: read_u32(data, 20),
            horizontal_resolution: read_i32(data, 24),
            vertical_resolution: read_i32(data, 28),
            palette_colors: read_u32(data, 32),
            important_colors: read_u32(data, 36),
        })
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_LEN] {
        let mut out = [0u8; INFO_HEADER_LEN];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.color_planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.horizontal_resolution.to_le_bytes());
        out[28..32].copy_from_slice(&self.vertical_resolution.to_le_bytes());
        out[32..36].copy_from_slice(&self.palette_colors.to_le_bytes());
        out[36..40].copy_from_slice(&self.important_colors.to_le_bytes());
        out
    }
}

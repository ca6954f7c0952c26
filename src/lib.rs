//! Encode 1-bit monochrome bitmaps as minimal indexed-color PNG images.
//!
//! The produced file always has the same shape: signature, `IHDR`, a two entry `PLTE`
//! (black, white), a single `IDAT` and `IEND`. Pixels are stored one byte per pixel
//! (bit depth 8) as palette indices, every row prefixed by the "no filter" marker.

mod chunk;
mod crc;
mod deflate;
mod encode;

#[cfg(feature = "fuzz")]
pub mod fuzz;

pub use chunk::{Chunk, IDAT, IEND, IHDR, PLTE};
pub use crc::checksum;
pub use deflate::compress;
pub use encode::assemble;

use std::convert::TryFrom;
use std::io;
use thiserror::Error;

/// The fixed 8 bytes every PNG starts with
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Palette index rendered as black
pub const BLACK: u8 = 0;
/// Palette index rendered as white
pub const WHITE: u8 = 1;

/// Filter type byte at the head of each row, 0 means "no filter"
pub const FILTER_NONE: u8 = 0;

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_INDEXED: u8 = 3;

/// Largest width or height the `IHDR` record admits
const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Size of the `IHDR` payload
pub const PROPERTIES_LEN: usize = 13;

/// The two palette entries, index 0 black and index 1 white
const PALETTE: [u8; 6] = [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF];

/// Errors raised while building or encoding a [`Bitmap`]
#[derive(Error, Debug)]
pub enum PngError {
    /// Zero or oversized dimensions, or a pixel buffer not `(width + 1) * height` long
    #[error("invalid dimensions {width}x{height} for {len} pixel slots")]
    InvalidDimensions {
        /// declared width
        width: u32,
        /// declared height
        height: u32,
        /// number of slots received
        len: usize,
    },

    /// A pixel slot holding something other than [`BLACK`] or [`WHITE`]
    #[error("invalid pixel value {value} at row {row}, column {column}")]
    InvalidPixelValue {
        /// row of the pixel
        row: u32,
        /// column of the pixel, not counting the filter marker
        column: u32,
        /// offending value
        value: u8,
    },

    /// The leading slot of a row is not [`FILTER_NONE`]
    #[error("invalid filter marker {value} at row {row}")]
    InvalidFilterMarker {
        /// offending row
        row: u32,
        /// offending value
        value: u8,
    },

    /// The zlib stream could not be finalized
    #[error("compression failed: {0}")]
    Compression(#[source] io::Error),

    /// The destination rejected the finished image
    #[error("writing to sink failed: {0}")]
    Sink(#[source] io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PngError>;

/// A monochrome bitmap ready to be encoded.
///
/// Pixels are kept exactly as they go into the `IDAT` stream: `height` rows of
/// `width + 1` bytes, each row starting with [`FILTER_NONE`] and followed by `width`
/// palette indices.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Creates a bitmap from the filter-prefixed row layout, validating every slot
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Bitmap> {
        let len = pixels.len();
        let invalid = PngError::InvalidDimensions { width, height, len };
        let expected = match check_size(width, height) {
            Some(expected) => expected,
            None => {
                tracing::debug!(width, height, len, "rejecting bitmap dimensions");
                return Err(invalid);
            }
        };
        if len != expected {
            tracing::debug!(width, height, len, expected, "rejecting pixel length");
            return Err(invalid);
        }

        for (row, slots) in pixels.chunks(width as usize + 1).enumerate() {
            let row = row as u32;
            if slots[0] != FILTER_NONE {
                tracing::debug!(row, value = slots[0], "rejecting filter marker");
                return Err(PngError::InvalidFilterMarker {
                    row,
                    value: slots[0],
                });
            }
            if let Some((column, &value)) = slots[1..]
                .iter()
                .enumerate()
                .find(|&(_, &v)| v != BLACK && v != WHITE)
            {
                tracing::debug!(row, column, value, "rejecting pixel value");
                return Err(PngError::InvalidPixelValue {
                    row,
                    column: column as u32,
                    value,
                });
            }
        }

        Ok(Bitmap {
            width,
            height,
            pixels,
        })
    }

    /// Creates a bitmap from rows of pixels, `true` is white.
    /// Rows must be non-empty and all of the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Bitmap> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let slots: usize = rows.iter().map(|row| row.len() + 1).sum();
        let too_big = |_| PngError::InvalidDimensions {
            width: u32::MAX,
            height: u32::MAX,
            len: slots,
        };
        let width = u32::try_from(width).map_err(too_big)?;
        let height = u32::try_from(height).map_err(too_big)?;

        if rows.iter().any(|row| row.len() != width as usize) {
            return Err(PngError::InvalidDimensions {
                width,
                height,
                len: slots,
            });
        }

        let mut pixels = Vec::with_capacity(slots);
        for row in rows {
            pixels.push(FILTER_NONE);
            pixels.extend(row.into_iter().map(|white| if white { WHITE } else { BLACK }));
        }
        Bitmap::new(width, height, pixels)
    }

    /// return the width of the image in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// return the height of the image in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// return the palette index at column `x` of row `y`
    ///
    /// # Panics
    /// if `x >= width` or `y >= height`
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let row_len = self.width as usize + 1;
        self.pixels[y as usize * row_len + 1 + x as usize]
    }

    /// The `IHDR` payload: big-endian width and height, then bit depth 8, indexed color,
    /// default compression, default filter and no interlace
    pub fn properties(&self) -> [u8; PROPERTIES_LEN] {
        let mut properties = [0u8; PROPERTIES_LEN];
        properties[0..4].copy_from_slice(&self.width.to_be_bytes());
        properties[4..8].copy_from_slice(&self.height.to_be_bytes());
        properties[8] = BIT_DEPTH;
        properties[9] = COLOR_TYPE_INDEXED;
        // compression, filter and interlace methods stay 0
        properties
    }

    /// The `PLTE` payload
    pub fn palette() -> [u8; 6] {
        PALETTE
    }

    /// Bytes fed to the compressor, one byte per slot since bit depth is 8
    pub fn pixel_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Gives back the row layout, the bitmap is consumed
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Returns the number of slots `(width + 1) * height` if the dimensions are valid
fn check_size(width: u32, height: u32) -> Option<usize> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return None;
    }
    (width as usize + 1).checked_mul(height as usize)
}

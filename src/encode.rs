use crate::chunk::{Chunk, IDAT, IEND, IHDR, PLTE};
use crate::deflate::compress;
use crate::{Bitmap, PngError, Result, SIGNATURE};
use std::io::Write;

/// Encode `bitmap` into a complete PNG held in memory.
///
/// Chunks are laid out as `IHDR`, `PLTE`, `IDAT`, `IEND`. The buffer is sized exactly
/// from the compressed pixel data before anything is written, and is only returned
/// once every chunk is in place.
pub fn assemble(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let raw = bitmap.pixel_bytes();
    let compressed = compress(raw)?;

    let properties = bitmap.properties();
    let palette = Bitmap::palette();
    let chunks = [
        Chunk::new(IHDR, &properties),
        Chunk::new(PLTE, &palette),
        Chunk::new(IDAT, &compressed),
        Chunk::new(IEND, &[]),
    ];
    let total_size = SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();

    let mut png = vec![0u8; total_size];
    png[..SIGNATURE.len()].copy_from_slice(&SIGNATURE);
    let mut offset = SIGNATURE.len();
    for chunk in chunks.iter() {
        offset = chunk.write(&mut png, offset);
    }
    debug_assert_eq!(offset, total_size);

    tracing::debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        raw = raw.len(),
        compressed = compressed.len(),
        total = total_size,
        "png assembled"
    );
    Ok(png)
}

impl Bitmap {
    /// Returns the PNG encoding of this bitmap
    pub fn png(&self) -> Result<Vec<u8>> {
        assemble(self)
    }

    /// Write the PNG encoding of this bitmap to a Write type, such a File.
    /// Nothing is written if encoding fails.
    pub fn write<T: Write>(&self, mut to: T) -> Result<()> {
        let png = assemble(self)?;
        to.write_all(&png).map_err(PngError::Sink)?;
        to.flush().map_err(PngError::Sink)
    }
}

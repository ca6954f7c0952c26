use crate::crc::checksum;

/// Image header chunk type
pub const IHDR: [u8; 4] = *b"IHDR";
/// Palette chunk type
pub const PLTE: [u8; 4] = *b"PLTE";
/// Image data chunk type
pub const IDAT: [u8; 4] = *b"IDAT";
/// Image trailer chunk type
pub const IEND: [u8; 4] = *b"IEND";

/// Length field, type tag and CRC surrounding every payload
pub const CHUNK_OVERHEAD: usize = 12;

/// One PNG chunk, borrowed for the time it takes to serialize it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// four ASCII letters naming the chunk
    pub tag: [u8; 4],
    /// payload
    pub data: &'a [u8],
}

impl<'a> Chunk<'a> {
    /// Creates a chunk
    pub fn new(tag: [u8; 4], data: &'a [u8]) -> Self {
        Chunk { tag, data }
    }

    /// Bytes taken once serialized
    pub fn encoded_len(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }

    /// Serializes the chunk into `dest` at `offset` and returns the offset right after it.
    ///
    /// Layout is `[len u32 BE][tag][data][crc u32 BE]`, the CRC covers tag and data but
    /// not the length.
    ///
    /// # Panics
    /// if `dest` has fewer than `offset + self.encoded_len()` bytes, or the payload
    /// does not fit the 32-bit length field
    pub fn write(&self, dest: &mut [u8], offset: usize) -> usize {
        let len = self.data.len();
        assert!(len <= i32::MAX as usize, "chunk payload too long");
        let data_start = offset + 8;
        let crc_start = data_start + len;

        dest[offset..offset + 4].copy_from_slice(&(len as u32).to_be_bytes());
        dest[offset + 4..data_start].copy_from_slice(&self.tag);
        dest[data_start..crc_start].copy_from_slice(self.data);
        let crc = checksum(dest, offset + 4, 4 + len);
        dest[crc_start..crc_start + 4].copy_from_slice(&crc.to_be_bytes());

        tracing::trace!(
            tag = %String::from_utf8_lossy(&self.tag),
            offset,
            len,
            "chunk written"
        );
        crc_start + 4
    }
}

#[cfg(test)]
mod test {
    use crate::chunk::*;
    use crate::crc::checksum;

    #[test]
    fn test_iend() {
        let mut dest = [0u8; 12];
        let next = Chunk::new(IEND, &[]).write(&mut dest, 0);
        assert_eq!(next, 12);
        assert_eq!(
            dest,
            [0, 0, 0, 0, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_offset() {
        let payload = [0u8, 0, 0, 0xFF, 0xFF, 0xFF];
        let chunk = Chunk::new(PLTE, &payload);
        assert_eq!(chunk.encoded_len(), 18);

        let mut dest = vec![0xAAu8; 5 + 18 + 3];
        let next = chunk.write(&mut dest, 5);
        assert_eq!(next, 5 + 18);
        assert_eq!(&dest[..5], &[0xAA; 5]);
        assert_eq!(&dest[next..], &[0xAA; 3]);
        assert_eq!(&dest[5..9], &[0, 0, 0, 6]);
        assert_eq!(&dest[9..13], b"PLTE");
        assert_eq!(&dest[13..19], &payload);
        // well known CRC of a black and white palette
        assert_eq!(&dest[19..23], &[0xA5, 0xD9, 0x9F, 0xDD]);
    }

    #[test]
    fn test_crc_excludes_length() {
        let payload = [1u8, 2, 3];
        let mut dest = [0u8; 15];
        Chunk::new(IDAT, &payload).write(&mut dest, 0);
        let stored = u32::from_be_bytes([dest[11], dest[12], dest[13], dest[14]]);
        assert_eq!(stored, checksum(&dest, 4, 7));
        assert_ne!(stored, checksum(&dest, 0, 11));
    }

    #[test]
    #[should_panic]
    fn test_too_small() {
        let mut dest = [0u8; 11];
        Chunk::new(IEND, &[]).write(&mut dest, 0);
    }
}

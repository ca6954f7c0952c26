/// CRC-32 (IEEE, reflected polynomial `0xEDB88320`) of `length` bytes of `bytes`
/// starting at `offset`
///
/// # Panics
/// if `offset + length` exceeds `bytes.len()`
pub fn checksum(bytes: &[u8], offset: usize, length: usize) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&bytes[offset..offset + length]);
    hasher.finalize()
}

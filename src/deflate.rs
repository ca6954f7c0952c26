use crate::{PngError, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// Compress `raw` into a complete zlib stream (header, deflate blocks, Adler-32) at the
/// default level. The output grows to whatever size the encoder needs.
pub fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let capacity = raw.len() / 2 + 64;
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(capacity), Compression::default());
    encoder.write_all(raw).map_err(PngError::Compression)?;
    encoder.finish().map_err(PngError::Compression)
}

#[cfg(test)]
mod test {
    use crate::deflate::compress;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = vec![];
        ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_roundtrip() {
        let raw = vec![0u8, 1, 0];
        let compressed = compress(&raw).unwrap();
        assert_eq!(compressed[0], 0x78);
        assert_eq!(inflate(&compressed), raw);
    }

    #[test]
    fn test_empty() {
        let compressed = compress(&[]).unwrap();
        assert_eq!(compressed[0] & 0x0F, 8); // deflate method
        assert_eq!(((compressed[0] as u16) << 8 | compressed[1] as u16) % 31, 0);
        assert_eq!(&compressed[compressed.len() - 4..], &[0, 0, 0, 1]); // adler32 of nothing
        assert!(inflate(&compressed).is_empty());
    }

    #[test]
    fn test_large() {
        // bigger than any fixed scratch buffer and hard to compress
        let mut state = 0x2545_F491u32;
        let raw: Vec<u8> = (0..200_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        let compressed = compress(&raw).unwrap();
        assert!(compressed.len() > 8 * 1024);
        assert_eq!(inflate(&compressed), raw);
    }

    #[test]
    fn test_deterministic() {
        let raw: Vec<u8> = (0..5000).map(|i| (i % 3 == 0) as u8).collect();
        assert_eq!(compress(&raw).unwrap(), compress(&raw).unwrap());
    }
}

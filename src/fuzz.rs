//! fuzzing!

use crate::{Bitmap, WHITE};
use arbitrary::Arbitrary;
use image::{GenericImageView, ImageFormat, Rgba};

/// Largest side generated, keeps fuzz inputs fast
const MAX_SIDE: u8 = 16;

impl Arbitrary for Bitmap {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let width = u8::arbitrary(u)? % MAX_SIDE + 1;
        let height = u8::arbitrary(u)? % MAX_SIDE + 1;
        let mut rows = Vec::with_capacity(height as usize);
        for _ in 0..height {
            let mut row = Vec::with_capacity(width as usize);
            for _ in 0..width {
                row.push(bool::arbitrary(u)?);
            }
            rows.push(row);
        }
        Bitmap::from_rows(rows).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

impl Bitmap {
    /// check that image crate decodes the produced png to the same pixels
    pub fn check(&self) {
        let png = self.png().unwrap();
        let image = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        let (width, height) = image.dimensions();
        assert_eq!(width, self.width());
        assert_eq!(height, self.height());
        for x in 0..width {
            for y in 0..height {
                match image.get_pixel(x, y) {
                    Rgba([255, 255, 255, 255]) => assert_eq!(self.pixel(x, y), WHITE),
                    Rgba([0, 0, 0, 255]) => assert_ne!(self.pixel(x, y), WHITE),
                    other => panic!("unexpected color {:?} at {},{}", other, x, y),
                }
            }
        }
    }
}

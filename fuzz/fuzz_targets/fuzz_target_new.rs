#![no_main]
use libfuzzer_sys::fuzz_target;
use png_monochrome::Bitmap;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let width = data[0] as u32;
    let height = data[1] as u32;
    if let Ok(bitmap) = Bitmap::new(width, height, data[2..].to_vec()) {
        bitmap.check();
    }
});

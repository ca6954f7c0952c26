#![no_main]
use libfuzzer_sys::fuzz_target;
use png_monochrome::Bitmap;

fuzz_target!(|bitmap: Bitmap| {
    bitmap.check();
});

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bitmap: png_monochrome::Bitmap| {
    let mut out = vec![];
    bitmap.write(&mut out).unwrap();
    assert_eq!(&out[..8], &png_monochrome::SIGNATURE);
});

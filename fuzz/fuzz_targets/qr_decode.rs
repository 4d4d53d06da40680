//! Fuzz target for QR symbol decoding.
//!
//! Treats the first two bytes as the raster width and the rest as luma
//! pixels, so both well-formed and mismatched buffers are exercised.

#![no_main]

use libfuzzer_sys::fuzz_target;
use qrschema::symbol::{QrDecoder, SymbolDecoder};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 256 * 1024 {
        return;
    }

    let width = u16::from_le_bytes([data[0], data[1]]).max(1) as u32;
    let pixels = &data[2..];
    let height = (pixels.len() as u32) / width;

    let _ = QrDecoder.decode(pixels, width, height);
});

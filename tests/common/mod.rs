#![allow(dead_code)]

use std::fs;
use std::path::Path;

use qrschema::raster::write_png;
use qrschema::symbol::{QrEncoder, SymbolEncoder};

/// Writes a scannable QR code PNG carrying `payload`.
pub fn write_qr_png(path: &Path, payload: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    let image = QrEncoder.encode(payload, 4).expect("encode qr");
    write_png(path, &image).expect("write qr png");
}

/// Writes a plain white PNG with no QR code in it.
pub fn write_blank_png(path: &Path, side: u32) {
    let image = image::GrayImage::from_pixel(side, side, image::Luma([255]));
    write_png(path, &image).expect("write blank png");
}

/// Writes a file that is not an image.
pub fn write_garbage(path: &Path) {
    fs::write(path, b"\x00\x01not an image at all\xff").expect("write garbage file");
}

/// Reads back the payload of a QR PNG written by the tool.
pub fn scan_png(path: &Path) -> Option<String> {
    use qrschema::symbol::{QrDecoder, SymbolDecoder};

    let image = qrschema::raster::read_luma(path).expect("read png");
    QrDecoder
        .decode(image.as_raw(), image.width(), image.height())
        .expect("decode png")
}

/// Sorted file names in a directory.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

//! Raster file I/O.
//!
//! Images are read from raw file bytes (the container format is sniffed,
//! not taken from the extension) and flattened to 8-bit luma. Output is
//! always PNG, whatever name the file is given.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::error::QrSchemaError;

/// Reads an image file into an 8-bit luma raster.
///
/// # Errors
/// Returns `UnreadableInput` if the file cannot be read and `InvalidImage`
/// if its bytes are not a supported image.
pub fn read_luma(path: &Path) -> Result<GrayImage, QrSchemaError> {
    let bytes = fs::read(path).map_err(|source| QrSchemaError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;

    let image =
        image::load_from_memory(&bytes).map_err(|source| QrSchemaError::InvalidImage {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(image.to_luma8())
}

/// Encodes a luma raster as PNG bytes.
pub fn encode_png(image: &GrayImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Writes a luma raster to `path` as PNG, replacing any existing file.
///
/// The PNG is fully encoded before the file is opened.
pub fn write_png(path: &Path, image: &GrayImage) -> Result<(), QrSchemaError> {
    let bytes = encode_png(image).map_err(|source| QrSchemaError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, bytes).map_err(QrSchemaError::Io)
}

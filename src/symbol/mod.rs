//! QR symbol collaborators.
//!
//! The batch converter never touches QR internals directly. It talks to a
//! [`SymbolDecoder`] that finds a payload in a luma raster and a
//! [`SymbolEncoder`] that renders a payload into one. The default
//! implementations wrap `rqrr` and `qrcode`; tests swap in their own.

mod decode;
mod encode;

pub use decode::QrDecoder;
pub use encode::{QrEncoder, DEFAULT_MODULE_SCALE, QUIET_ZONE_MODULES};

use image::GrayImage;
use thiserror::Error;

/// Errors raised by symbol collaborators.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("invalid raster: {len} byte(s) for a {width}x{height} luma image")]
    InvalidRaster { width: u32, height: u32, len: usize },

    #[error("payload of {len} byte(s) cannot be encoded: {message}")]
    Unencodable { len: usize, message: String },

    #[error("module scale must be at least 1")]
    ZeroScale,
}

/// Finds and decodes a QR symbol in an 8-bit luma raster.
pub trait SymbolDecoder {
    /// Returns `Ok(None)` when the raster holds no readable symbol.
    ///
    /// # Errors
    /// Returns `InvalidRaster` when `pixels.len() != width * height`.
    fn decode(&self, pixels: &[u8], width: u32, height: u32)
        -> Result<Option<String>, SymbolError>;
}

/// Renders a payload as a QR raster.
pub trait SymbolEncoder {
    /// Renders `payload` with `scale` pixels per module.
    ///
    /// # Errors
    /// Returns `Unencodable` when the payload exceeds symbol capacity.
    fn encode(&self, payload: &str, scale: u32) -> Result<GrayImage, SymbolError>;
}

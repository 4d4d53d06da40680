use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use super::{SymbolEncoder, SymbolError};

/// Pixels per module used when nothing else is configured.
pub const DEFAULT_MODULE_SCALE: u32 = 8;

/// Light border around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

const DARK: u8 = 0;
const LIGHT: u8 = 255;

/// Default encoder, backed by `qrcode`.
///
/// The symbol version is the smallest that fits the payload at error
/// correction level M. Output is a square luma raster with a
/// [`QUIET_ZONE_MODULES`] border.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrEncoder;

impl SymbolEncoder for QrEncoder {
    fn encode(&self, payload: &str, scale: u32) -> Result<GrayImage, SymbolError> {
        if scale == 0 {
            return Err(SymbolError::ZeroScale);
        }

        let code = QrCode::new(payload.as_bytes()).map_err(|err| SymbolError::Unencodable {
            len: payload.len(),
            message: err.to_string(),
        })?;

        let modules = code.width() as u32;
        let colors = code.to_colors();
        let side = (modules + 2 * QUIET_ZONE_MODULES) * scale;

        Ok(GrayImage::from_fn(side, side, |x, y| {
            let mx = (x / scale).checked_sub(QUIET_ZONE_MODULES);
            let my = (y / scale).checked_sub(QUIET_ZONE_MODULES);
            let dark = match (mx, my) {
                (Some(mx), Some(my)) if mx < modules && my < modules => {
                    colors[(my * modules + mx) as usize] == Color::Dark
                }
                _ => false,
            };
            Luma([if dark { DARK } else { LIGHT }])
        }))
    }
}

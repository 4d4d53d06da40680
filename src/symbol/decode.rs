use rqrr::PreparedImage;

use super::{SymbolDecoder, SymbolError};

/// Default decoder, backed by `rqrr`.
///
/// When a raster holds several grids the first one that decodes wins. A
/// grid that is detected but fails error correction counts as "not found",
/// same as a raster with no grid at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrDecoder;

impl SymbolDecoder for QrDecoder {
    fn decode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Option<String>, SymbolError> {
        let (w, h) = (width as usize, height as usize);
        if w.checked_mul(h) != Some(pixels.len()) {
            return Err(SymbolError::InvalidRaster {
                width,
                height,
                len: pixels.len(),
            });
        }
        if pixels.is_empty() {
            return Ok(None);
        }

        let mut prepared = PreparedImage::prepare_from_greyscale(w, h, |x, y| pixels[y * w + x]);
        let payload = prepared
            .detect_grids()
            .into_iter()
            .find_map(|grid| grid.decode().ok().map(|(_meta, content)| content));

        Ok(payload)
    }
}

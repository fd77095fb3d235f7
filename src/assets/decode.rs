use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::ReelResult;

/// Decoded frame in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct FrameImage {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl FrameImage {
    /// Natural size as floating-point geometry.
    pub fn natural_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Decode encoded image bytes (any format `image` recognizes) and premultiply alpha.
pub fn decode_frame(bytes: &[u8]) -> ReelResult<FrameImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(FrameImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

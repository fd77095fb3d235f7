use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::assets::decode::FrameImage;
use crate::foundation::core::{Affine, FrameIndex, Viewport};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::cover::CoverRect;
use crate::render::presenter::Presenter;

/// A surface snapshot as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

const DEFAULT_PAINT_CACHE_FRAMES: usize = 8;

/// Options for [`CpuCanvas`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuCanvasOpts {
    /// Color the surface is cleared to before each draw. `None` clears to transparent.
    pub clear_rgba: Option<[u8; 4]>,
    /// Frames whose raster paint is kept for reuse, least recently drawn evicted first.
    /// `None` keeps 8; `Some(0)` disables reuse.
    pub paint_cache_frames: Option<usize>,
}

/// Raster drawing surface backed by `vello_cpu`.
///
/// Mirrors a 2D canvas element: resizing discards content, every draw clears first, and the
/// scale transform is kept as element state rather than baked into pixels.
pub struct CpuCanvas {
    opts: CpuCanvasOpts,
    viewport: Viewport,
    pixmap: Option<vello_cpu::Pixmap>,
    ctx: Option<vello_cpu::RenderContext>,
    paint_cache: HashMap<FrameIndex, vello_cpu::Image>,
    paint_lru: VecDeque<FrameIndex>,
    scale: f64,
    last_drawn: Option<FrameIndex>,
}

impl CpuCanvas {
    /// Create an empty (0x0) canvas. Call [`Presenter::resize`] before drawing.
    pub fn new(opts: CpuCanvasOpts) -> Self {
        Self {
            opts,
            viewport: Viewport::default(),
            pixmap: None,
            ctx: None,
            paint_cache: HashMap::new(),
            paint_lru: VecDeque::new(),
            scale: 1.0,
            last_drawn: None,
        }
    }

    /// Current backing size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scale most recently applied to the element.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Frame currently shown, if any has been drawn since the last resize.
    pub fn last_drawn(&self) -> Option<FrameIndex> {
        self.last_drawn
    }

    /// Copy the current pixels out (premultiplied RGBA8).
    pub fn snapshot(&self) -> FrameRGBA {
        let (width, height, data) = match &self.pixmap {
            Some(pm) => (
                self.viewport.width,
                self.viewport.height,
                pm.data_as_u8_slice().to_vec(),
            ),
            None => (0, 0, Vec::new()),
        };
        FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        }
    }

    fn paint_for(&mut self, index: FrameIndex, image: &FrameImage) -> ReelResult<vello_cpu::Image> {
        if let Some(p) = self.paint_cache.get(&index).cloned() {
            self.touch(index);
            return Ok(p);
        }
        let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.insert_paint(index, paint.clone());
        Ok(paint)
    }

    fn paint_capacity(&self) -> usize {
        self.opts
            .paint_cache_frames
            .unwrap_or(DEFAULT_PAINT_CACHE_FRAMES)
    }

    fn insert_paint(&mut self, index: FrameIndex, paint: vello_cpu::Image) {
        let capacity = self.paint_capacity();
        if capacity == 0 {
            return;
        }
        self.paint_cache.insert(index, paint);
        self.touch(index);
        while self.paint_lru.len() > capacity {
            if let Some(old) = self.paint_lru.pop_front() {
                self.paint_cache.remove(&old);
            }
        }
    }

    fn touch(&mut self, index: FrameIndex) {
        if let Some(pos) = self.paint_lru.iter().position(|i| *i == index) {
            self.paint_lru.remove(pos);
        }
        self.paint_lru.push_back(index);
    }
}

impl Presenter for CpuCanvas {
    fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport && self.pixmap.is_some() {
            return;
        }
        self.viewport = viewport;
        self.ctx = None;
        self.last_drawn = None;
        self.pixmap = match pixmap_dims(viewport) {
            Some((w, h)) => Some(vello_cpu::Pixmap::new(w, h)),
            None => {
                if !viewport.is_empty() {
                    tracing::warn!(?viewport, "canvas size exceeds raster limits, not drawing");
                }
                None
            }
        };
    }

    #[tracing::instrument(skip(self, image, rect))]
    fn draw_frame(
        &mut self,
        index: FrameIndex,
        image: &FrameImage,
        rect: CoverRect,
    ) -> ReelResult<()> {
        if self.viewport.is_empty() {
            return Ok(());
        }
        let Some((w, h)) = pixmap_dims(self.viewport) else {
            return Err(ReelError::render(format!(
                "canvas {}x{} exceeds raster limits",
                self.viewport.width, self.viewport.height
            )));
        };
        let paint = self.paint_for(index, image)?;
        let tr = rect.image_transform(image.natural_size());

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        ctx.flush();

        let pixmap = self
            .pixmap
            .as_mut()
            .ok_or_else(|| ReelError::render("canvas has no backing store"))?;
        clear_pixmap(pixmap, self.opts.clear_rgba);
        ctx.render_to_pixmap(pixmap);
        self.ctx = Some(ctx);
        self.last_drawn = Some(index);
        Ok(())
    }

    fn apply_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}

fn pixmap_dims(viewport: Viewport) -> Option<(u16, u16)> {
    if viewport.is_empty() {
        return None;
    }
    let w: u16 = viewport.width.try_into().ok()?;
    let h: u16 = viewport.height.try_into().ok()?;
    Some((w, h))
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: Option<[u8; 4]>) {
    match rgba {
        None => pixmap.data_as_u8_slice_mut().fill(0),
        Some(c) => {
            let c = premul_rgba8(c);
            for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
                px.copy_from_slice(&c);
            }
        }
    }
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> ReelResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ReelError::render("frame width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ReelError::render("frame height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(ReelError::render("frame byte len mismatch"));
    }
    let pixels: Vec<vello_cpu::peniko::color::PremulRgba8> = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

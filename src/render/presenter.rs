use crate::assets::decode::FrameImage;
use crate::foundation::core::{FrameIndex, Viewport};
use crate::foundation::error::ReelResult;
use crate::render::cover::CoverRect;

/// Output contract of a player: where frames and the scale transform end up.
///
/// The player decides *what* to show (`frame index`, `scale`); a presenter decides *how*
/// (raster surface, GPU texture, CSS transform, log).
pub trait Presenter {
    /// Resize the backing store. Prior pixel content is discarded.
    fn resize(&mut self, viewport: Viewport);

    /// Clear the surface and draw `image` through the cover rectangle `rect`.
    fn draw_frame(&mut self, index: FrameIndex, image: &FrameImage, rect: CoverRect)
    -> ReelResult<()>;

    /// Apply a uniform visual scale to the whole surface element.
    fn apply_scale(&mut self, scale: f64);
}

/// Entry recorded by [`RecordingPresenter`].
#[derive(Clone, Debug, PartialEq)]
pub enum PresentOp {
    /// A backing-store resize.
    Resize(Viewport),
    /// A frame draw with its placement.
    Draw {
        /// Frame drawn.
        index: FrameIndex,
        /// Placement used.
        rect: CoverRect,
    },
    /// A scale change.
    Scale(f64),
}

/// In-memory presenter for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    ops: Vec<PresentOp>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    pub fn ops(&self) -> &[PresentOp] {
        &self.ops
    }

    /// Indices of all drawn frames, in call order.
    pub fn drawn(&self) -> Vec<FrameIndex> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PresentOp::Draw { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Most recently applied scale, if any.
    pub fn last_scale(&self) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            PresentOp::Scale(s) => Some(*s),
            _ => None,
        })
    }

    /// Forget recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn resize(&mut self, viewport: Viewport) {
        self.ops.push(PresentOp::Resize(viewport));
    }

    fn draw_frame(
        &mut self,
        index: FrameIndex,
        _image: &FrameImage,
        rect: CoverRect,
    ) -> ReelResult<()> {
        self.ops.push(PresentOp::Draw { index, rect });
        Ok(())
    }

    fn apply_scale(&mut self, scale: f64) {
        self.ops.push(PresentOp::Scale(scale));
    }
}

use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Affine, Rect, Size};

/// 0-based position of a frame within its sequence (playback order).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// Index usable for slice access.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Number of frames in a sequence, validated to be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameCount(u32);

impl FrameCount {
    /// Create a validated frame count.
    pub fn new(n: u32) -> ReelResult<Self> {
        if n == 0 {
            return Err(ReelError::validation("frame count must be > 0"));
        }
        Ok(Self(n))
    }

    /// Raw count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Last valid index (`count - 1`).
    pub fn last(self) -> FrameIndex {
        FrameIndex(self.0 - 1)
    }

    /// Iterate all indices in playback order.
    pub fn indices(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }
}

/// Drawing surface backing size in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Build a viewport from a layout box, rounding to whole pixels.
    ///
    /// Negative or non-finite extents collapse to zero.
    pub fn from_box(size: Size) -> Self {
        fn px(v: f64) -> u32 {
            if !v.is_finite() || v <= 0.0 {
                return 0;
            }
            v.round().min(f64::from(u32::MAX)) as u32
        }
        Self {
            width: px(size.width),
            height: px(size.height),
        }
    }

    /// Return `true` when either extent is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Extents as floating-point geometry.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

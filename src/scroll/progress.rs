use crate::foundation::core::{FrameCount, FrameIndex};

/// Page scroll sample relative to the tracked section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Vertical page scroll offset.
    pub raw_offset: f64,
    /// Section top, in page coordinates.
    pub section_top: f64,
    /// Section height.
    pub section_height: f64,
}

/// Normalized scroll position within a section, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Start of the section.
    pub const START: Self = Self(0.0);
    /// Section bottom aligned with the viewport bottom.
    pub const END: Self = Self(1.0);

    /// Clamp into `[0, 1]`; NaN becomes 0.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Progress for a scroll sample, given the viewport height.
    ///
    /// Progress reaches 1 exactly when the section bottom meets the viewport bottom. A section
    /// no taller than the viewport has no scrollable range and always reports 0.
    pub fn from_scroll(state: ScrollState, viewport_height: f64) -> Self {
        let range = state.section_height - viewport_height;
        if !range.is_finite() || range <= 0.0 {
            return Self::START;
        }
        let travelled = state.raw_offset - state.section_top;
        if !travelled.is_finite() {
            return Self::START;
        }
        Self::new(travelled / range)
    }

    /// Select a frame: `min(N - 1, floor(progress * N))`.
    pub fn frame_index(self, count: FrameCount) -> FrameIndex {
        let n = count.get();
        let i = (self.0 * f64::from(n)).floor() as u32;
        FrameIndex(i.min(n - 1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;

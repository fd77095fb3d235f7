use crate::foundation::error::{ReelError, ReelResult};
use crate::scroll::progress::Progress;

/// Linear scale projection: `max - (max - min) * progress`.
pub fn scale_for(progress: Progress, min_scale: f64, max_scale: f64) -> f64 {
    max_scale - (max_scale - min_scale) * progress.get()
}

/// Derives the surface scale factor from scroll progress.
///
/// Below `responsive_threshold` viewport width the scale is pinned to `max_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleAnimator {
    min_scale: f64,
    max_scale: f64,
    responsive_threshold: f64,
}

impl ScaleAnimator {
    /// Validate and build. `min_scale` must be in `(0, 1]`; the threshold must be finite and >= 0.
    pub fn new(min_scale: f64, responsive_threshold: f64) -> ReelResult<Self> {
        if !min_scale.is_finite() || min_scale <= 0.0 || min_scale > 1.0 {
            return Err(ReelError::validation("min_scale must be in (0, 1]"));
        }
        if !responsive_threshold.is_finite() || responsive_threshold < 0.0 {
            return Err(ReelError::validation(
                "responsive_scale_threshold must be finite and >= 0",
            ));
        }
        Ok(Self {
            min_scale,
            max_scale: 1.0,
            responsive_threshold,
        })
    }

    /// Scale at the end of the section.
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Scale at the start of the section (always 1).
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Scale for `progress` with a viewport `viewport_width` pixels wide.
    pub fn scale(&self, progress: Progress, viewport_width: f64) -> f64 {
        if viewport_width < self.responsive_threshold {
            return self.max_scale;
        }
        scale_for(progress, self.min_scale, self.max_scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scale.rs"]
mod tests;

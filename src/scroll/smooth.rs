//! Inertial scroll smoothing.
//!
//! Sits in front of the player: raw wheel/touch targets go in, eased scroll offsets come out
//! and are fed to the player as ordinary scroll samples. The player itself never eases.

use crate::foundation::error::{ReelError, ReelResult};

/// Easing curves for normalized time `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out: `1 - (1 - t)^3`.
    #[default]
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

fn default_duration_s() -> f64 {
    1.2
}

/// Smoothing parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SmoothOpts {
    /// Time to reach a new target, in seconds.
    #[serde(default = "default_duration_s")]
    pub duration_s: f64,
    /// Curve applied over the duration.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for SmoothOpts {
    fn default() -> Self {
        Self {
            duration_s: default_duration_s(),
            ease: Ease::default(),
        }
    }
}

/// Tween from the current offset toward the latest scroll target.
///
/// Retargeting mid-flight restarts from the currently sampled offset, so motion stays continuous.
#[derive(Clone, Debug)]
pub struct ScrollSmoother {
    opts: SmoothOpts,
    from: f64,
    to: f64,
    start_s: f64,
}

impl ScrollSmoother {
    /// Start at rest at `offset`.
    pub fn new(offset: f64, opts: SmoothOpts) -> ReelResult<Self> {
        if !opts.duration_s.is_finite() || opts.duration_s < 0.0 {
            return Err(ReelError::validation(
                "smoothing duration_s must be finite and >= 0",
            ));
        }
        Ok(Self {
            opts,
            from: offset,
            to: offset,
            start_s: 0.0,
        })
    }

    /// Final offset the smoother is heading to.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Head to `target`, starting from the offset sampled at `now_s`.
    pub fn retarget(&mut self, now_s: f64, target: f64) {
        self.from = self.sample(now_s);
        self.to = target;
        self.start_s = now_s;
    }

    /// Jump to `offset` with no animation.
    pub fn snap(&mut self, offset: f64) {
        self.from = offset;
        self.to = offset;
    }

    /// Eased offset at `now_s`.
    pub fn sample(&self, now_s: f64) -> f64 {
        let t = self.t(now_s);
        self.from + (self.to - self.from) * self.opts.ease.apply(t)
    }

    /// Return `true` once the tween has reached its target.
    pub fn is_settled(&self, now_s: f64) -> bool {
        self.from == self.to || self.t(now_s) >= 1.0
    }

    fn t(&self, now_s: f64) -> f64 {
        if self.opts.duration_s <= 0.0 {
            return 1.0;
        }
        ((now_s - self.start_s) / self.opts.duration_s).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;

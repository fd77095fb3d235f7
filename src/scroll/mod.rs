//! Scroll math: progress, frame selection, scale, and optional scroll smoothing.

/// Section progress and frame selection.
pub mod progress;
/// Progress to scale projection.
pub mod scale;
/// Eased scroll smoothing.
pub mod smooth;

//! Presentation: cover placement, paint coalescing, surface sizing, and presenters.

/// CPU raster presenter.
pub mod canvas;
/// Cover-fit placement.
pub mod cover;
/// Presenter trait and a recording presenter.
pub mod presenter;
/// One-draw-per-paint coalescing.
pub mod scheduler;
/// Surface backing-store sizing.
pub mod viewport;

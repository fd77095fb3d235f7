//! Scrollreel plays a pre-rendered image sequence in lockstep with page scrolling.
//!
//! As a tall section scrolls through the window, the normalized scroll progress selects a frame
//! and a shrinking scale factor. The public API is player-oriented:
//!
//! - Describe the sequence with a [`PlayerConfig`]
//! - [`ScrubPlayer::mount`] it against a [`PageLayout`], a [`FrameSource`], and a [`Presenter`]
//! - Forward scroll, resize, and paint events; frames are drawn at most once per paint
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame catalog, sources, decoding, and background preloading.
pub mod assets;
/// Scroll-synchronized player.
pub mod player;
/// Presenters and draw scheduling.
pub mod render;
/// Scroll progress, scale, and smoothing math.
pub mod scroll;

pub use crate::foundation::core::{Affine, FrameCount, FrameIndex, Rect, Size, Viewport};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::assets::catalog::{FrameCatalog, PathTemplate};
pub use crate::assets::decode::{FrameImage, decode_frame};
pub use crate::assets::preload::{LoadEvent, PreloadOpts, PreloadReport, Preloader};
pub use crate::assets::sequence::{FrameSequence, FrameSlot, SlotState};
pub use crate::assets::source::{FrameSource, FsFrameSource};
pub use crate::player::config::PlayerConfig;
pub use crate::player::layout::{PageGeometry, PageLayout, SectionBounds};
pub use crate::player::scrub_player::{PaintOutcome, PlayerStats, ScrubPlayer, ScrubUpdate};
pub use crate::render::canvas::{CpuCanvas, CpuCanvasOpts, FrameRGBA};
pub use crate::render::cover::{CoverRect, cover_rect};
pub use crate::render::presenter::{PresentOp, Presenter, RecordingPresenter};
pub use crate::render::scheduler::RenderScheduler;
pub use crate::render::viewport::ViewportSizer;
pub use crate::scroll::progress::{Progress, ScrollState};
pub use crate::scroll::scale::{ScaleAnimator, scale_for};
pub use crate::scroll::smooth::{Ease, ScrollSmoother, SmoothOpts};

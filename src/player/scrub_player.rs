use std::sync::Arc;

use crate::assets::preload::{PreloadOpts, PreloadReport, Preloader};
use crate::assets::sequence::{FrameSequence, SlotState};
use crate::assets::source::FrameSource;
use crate::foundation::core::{FrameCount, FrameIndex, Size, Viewport};
use crate::foundation::error::ReelResult;
use crate::player::config::PlayerConfig;
use crate::player::layout::PageLayout;
use crate::render::cover::cover_rect;
use crate::render::presenter::Presenter;
use crate::render::scheduler::RenderScheduler;
use crate::render::viewport::ViewportSizer;
use crate::scroll::progress::Progress;
use crate::scroll::scale::ScaleAnimator;

/// What the player selected for the latest scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubUpdate {
    /// Normalized position within the section.
    pub progress: Progress,
    /// Frame selected for that position.
    pub frame: FrameIndex,
    /// Visual scale for the surface element.
    pub scale: f64,
}

/// Result of one paint callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Nothing to draw this cycle.
    Idle,
    /// The frame was drawn.
    Drawn(FrameIndex),
    /// The frame is not available (pending, failed, or no surface); previous pixels stay.
    Skipped(FrameIndex),
    /// The presenter rejected the draw; previous pixels stay.
    Failed(FrameIndex),
}

/// Counters collected over a player's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Scroll events handled.
    pub scroll_events: u64,
    /// Resize events handled.
    pub resize_events: u64,
    /// Paint callbacks handled.
    pub paint_callbacks: u64,
    /// Frames actually drawn.
    pub draws: u64,
    /// Draws skipped because the frame or surface was unavailable.
    pub skipped_missing: u64,
    /// Draws the presenter failed.
    pub draw_errors: u64,
}

/// Scroll-synchronized frame-sequence player.
///
/// One instance per surface. The host forwards page events:
///
/// - [`ScrubPlayer::on_scroll`] on every scroll sample,
/// - [`ScrubPlayer::on_resize`] on window resizes,
/// - [`ScrubPlayer::on_paint`] once per display refresh while [`ScrubPlayer::wants_paint`],
/// - [`ScrubPlayer::pump_loads`] whenever convenient (typically right before painting).
///
/// Handlers never block and never fail; missing frames and presenter errors degrade to "keep
/// showing the previous frame".
pub struct ScrubPlayer<P: Presenter> {
    count: FrameCount,
    preloader: Preloader,
    sizer: ViewportSizer,
    scheduler: RenderScheduler,
    scale: ScaleAnimator,
    presenter: P,
    last_update: Option<ScrubUpdate>,
    stats: PlayerStats,
}

impl<P: Presenter> ScrubPlayer<P> {
    /// Validate `config`, size the surface, start preloading, and take the initial scroll sample.
    ///
    /// Returns `Ok(None)` when the page lacks the tracked section or the surface container; the
    /// player is then disabled and nothing is loaded. Only invalid configuration is an error.
    #[tracing::instrument(skip_all, fields(frames = config.frame_count))]
    pub fn mount(
        config: &PlayerConfig,
        layout: &dyn PageLayout,
        source: Arc<dyn FrameSource>,
        presenter: P,
    ) -> ReelResult<Option<Self>> {
        config.validate()?;
        let (Some(_), Some(container)) = (layout.section_bounds(), layout.container_size()) else {
            tracing::warn!("scroll section or surface container missing, player disabled");
            return Ok(None);
        };

        let catalog = config.catalog()?;
        let scale = config.scale_animator()?;
        let preloader = Preloader::start(
            &catalog,
            source,
            PreloadOpts {
                threads: config.preload_threads,
            },
        )?;

        let mut player = Self {
            count: catalog.count(),
            preloader,
            sizer: ViewportSizer::new(),
            scheduler: RenderScheduler::new(),
            scale,
            presenter,
            last_update: None,
            stats: PlayerStats::default(),
        };
        player.apply_container(container);
        player.sample(layout);
        tracing::debug!(viewport = ?player.viewport(), "player mounted");
        Ok(Some(player))
    }

    /// Scroll event: select the frame and scale for the current position.
    ///
    /// Returns `None` (and changes nothing) if the section has disappeared from the page.
    pub fn on_scroll(&mut self, layout: &dyn PageLayout) -> Option<ScrubUpdate> {
        self.stats.scroll_events += 1;
        self.sample(layout)
    }

    /// Resize event: resync the surface size, then re-sample (the scale gate depends on width).
    pub fn on_resize(&mut self, layout: &dyn PageLayout) -> Option<ScrubUpdate> {
        self.stats.resize_events += 1;
        match layout.container_size() {
            Some(container) => self.apply_container(container),
            None => tracing::debug!("surface container missing on resize, keeping size"),
        }
        self.sample(layout)
    }

    /// Paint callback: draw at most one frame, the most recently selected one.
    pub fn on_paint(&mut self) -> PaintOutcome {
        self.stats.paint_callbacks += 1;
        match self.scheduler.take_due() {
            Some(index) => self.draw(index),
            None => PaintOutcome::Idle,
        }
    }

    /// Handle preload completions received so far. Returns how many were handled.
    ///
    /// The first frame is drawn immediately when it arrives before anything else was drawn, and a
    /// late arrival of the currently selected frame requests a paint.
    pub fn pump_loads(&mut self) -> usize {
        let events = self.preloader.poll();
        for ev in &events {
            if ev.state != SlotState::Loaded {
                continue;
            }
            if ev.index == FrameIndex(0) && self.scheduler.last_rendered().is_none() {
                self.draw(ev.index);
                if let Some(latest) = self.scheduler.latest() {
                    self.scheduler.observe(latest);
                }
            } else if self.scheduler.latest() == Some(ev.index) {
                self.scheduler.observe(ev.index);
            }
        }
        events.len()
    }

    /// Block until every frame has resolved, then handle all completions.
    pub fn wait_for_frames(&mut self) -> ReelResult<PreloadReport> {
        let report = self.preloader.wait_all()?;
        self.pump_loads();
        Ok(report)
    }

    /// Return `true` when the host should schedule a paint callback.
    pub fn wants_paint(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Latest selection, if a scroll sample has been taken.
    pub fn last_update(&self) -> Option<ScrubUpdate> {
        self.last_update
    }

    /// Frame currently on the surface.
    pub fn shown_frame(&self) -> Option<FrameIndex> {
        self.scheduler.last_rendered()
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> FrameCount {
        self.count
    }

    /// Current surface size.
    pub fn viewport(&self) -> Viewport {
        self.sizer.viewport()
    }

    /// Shared frame cache.
    pub fn sequence(&self) -> &Arc<FrameSequence> {
        self.preloader.sequence()
    }

    /// Counters so far.
    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// Borrow the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutably borrow the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Tear the player down and return its counters.
    ///
    /// Dropping the completion channel detaches the player from outstanding loads; the host must
    /// stop forwarding events (the player no longer exists to receive them).
    pub fn dispose(self) -> PlayerStats {
        tracing::debug!(stats = ?self.stats, "player disposed");
        self.stats
    }

    fn apply_container(&mut self, container: Size) {
        if let Some(viewport) = self.sizer.sync(container) {
            self.presenter.resize(viewport);
            self.scheduler.invalidate();
        }
    }

    fn sample(&mut self, layout: &dyn PageLayout) -> Option<ScrubUpdate> {
        let state = layout.scroll_state()?;
        let window = layout.viewport_size();
        let progress = Progress::from_scroll(state, window.height);
        let update = ScrubUpdate {
            progress,
            frame: progress.frame_index(self.count),
            scale: self.scale.scale(progress, window.width),
        };

        if self.last_update.map(|u| u.scale) != Some(update.scale) {
            self.presenter.apply_scale(update.scale);
        }
        self.scheduler.observe(update.frame);
        self.last_update = Some(update);
        Some(update)
    }

    fn draw(&mut self, index: FrameIndex) -> PaintOutcome {
        let Some(image) = self.preloader.sequence().image(index).cloned() else {
            self.stats.skipped_missing += 1;
            tracing::trace!(%index, "frame not available, keeping previous");
            return PaintOutcome::Skipped(index);
        };
        let Some(rect) = cover_rect(self.sizer.viewport().size(), image.natural_size()) else {
            self.stats.skipped_missing += 1;
            return PaintOutcome::Skipped(index);
        };
        match self.presenter.draw_frame(index, &image, rect) {
            Ok(()) => {
                self.scheduler.mark_rendered(index);
                self.stats.draws += 1;
                PaintOutcome::Drawn(index)
            }
            Err(e) => {
                self.stats.draw_errors += 1;
                tracing::warn!(%index, error = %e, "frame draw failed");
                PaintOutcome::Failed(index)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/scrub_player.rs"]
mod tests;

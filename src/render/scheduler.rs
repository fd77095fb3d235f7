use crate::foundation::core::FrameIndex;

/// Coalesces frame draw requests to at most one draw per paint cycle.
///
/// Scroll handlers call [`RenderScheduler::observe`] with every newly selected index; the paint
/// callback calls [`RenderScheduler::take_due`] and, once the draw was actually issued,
/// [`RenderScheduler::mark_rendered`]. The paint callback always receives the most recently
/// observed index, never a stale one captured at request time.
#[derive(Clone, Debug, Default)]
pub struct RenderScheduler {
    last_rendered: Option<FrameIndex>,
    latest: Option<FrameIndex>,
    pending: bool,
    force: bool,
}

impl RenderScheduler {
    /// Create an idle scheduler; nothing has been rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the currently selected index.
    ///
    /// Returns `true` when this call newly requested a paint (the host should ask for a paint
    /// callback). Repeated observations before the paint coalesce into the pending request.
    pub fn observe(&mut self, index: FrameIndex) -> bool {
        self.latest = Some(index);
        if self.pending || !self.needs_draw() {
            return false;
        }
        self.pending = true;
        true
    }

    /// Force the current index to be drawn again on the next paint (backing store was cleared).
    ///
    /// Returns `true` when this call newly requested a paint.
    pub fn invalidate(&mut self) -> bool {
        self.force = true;
        if self.pending || self.latest.is_none() {
            return false;
        }
        self.pending = true;
        true
    }

    /// Return `true` when a paint callback is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Paint callback: the index to draw now, if any.
    ///
    /// Clears the pending request. Yields nothing when the latest index is already on screen.
    pub fn take_due(&mut self) -> Option<FrameIndex> {
        let was_pending = std::mem::take(&mut self.pending);
        if !was_pending || !self.needs_draw() {
            return None;
        }
        self.latest
    }

    /// The draw for `index` was issued.
    pub fn mark_rendered(&mut self, index: FrameIndex) {
        self.last_rendered = Some(index);
        if self.latest == Some(index) {
            self.force = false;
        }
    }

    /// Last index that was actually drawn.
    pub fn last_rendered(&self) -> Option<FrameIndex> {
        self.last_rendered
    }

    /// Most recently observed index.
    pub fn latest(&self) -> Option<FrameIndex> {
        self.latest
    }

    fn needs_draw(&self) -> bool {
        match self.latest {
            None => false,
            Some(idx) => self.force || self.last_rendered != Some(idx),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;

use std::sync::{Arc, OnceLock};

use crate::assets::catalog::FrameCatalog;
use crate::assets::decode::FrameImage;
use crate::foundation::core::{FrameCount, FrameIndex};

/// Load state of one frame slot.
///
/// `Pending -> Loaded` or `Pending -> Failed`; both outcomes are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Load issued, not resolved yet.
    Pending,
    /// Decoded and available for drawing.
    Loaded,
    /// Fetch or decode failed; no pixels retained.
    Failed,
}

#[derive(Debug)]
enum SlotOutcome {
    Loaded(Arc<FrameImage>),
    Failed(String),
}

/// One entry of a [`FrameSequence`].
#[derive(Debug)]
pub struct FrameSlot {
    index: FrameIndex,
    location: String,
    outcome: OnceLock<SlotOutcome>,
}

impl FrameSlot {
    /// Position in the sequence.
    pub fn index(&self) -> FrameIndex {
        self.index
    }

    /// Resource location the slot is loaded from.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Current load state.
    pub fn state(&self) -> SlotState {
        match self.outcome.get() {
            None => SlotState::Pending,
            Some(SlotOutcome::Loaded(_)) => SlotState::Loaded,
            Some(SlotOutcome::Failed(_)) => SlotState::Failed,
        }
    }

    /// Decoded image, only when `Loaded`.
    pub fn image(&self) -> Option<&Arc<FrameImage>> {
        match self.outcome.get() {
            Some(SlotOutcome::Loaded(img)) => Some(img),
            _ => None,
        }
    }

    /// Natural pixel size, only when `Loaded`.
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.image().map(|img| (img.width, img.height))
    }

    /// Failure reason, only when `Failed`.
    pub fn failure(&self) -> Option<&str> {
        match self.outcome.get() {
            Some(SlotOutcome::Failed(msg)) => Some(msg),
            _ => None,
        }
    }
}

/// Ordered frame slots of one sequence, shared between the preloader workers and the player.
///
/// Every slot is written at most once; a second resolution of the same slot is ignored and
/// reported as `false`, so concurrent writers cannot clobber each other.
#[derive(Debug)]
pub struct FrameSequence {
    count: FrameCount,
    slots: Vec<FrameSlot>,
}

impl FrameSequence {
    /// Create one `Pending` slot per catalog entry.
    pub fn new(catalog: &FrameCatalog) -> Self {
        let slots = catalog
            .iter()
            .map(|(index, location)| FrameSlot {
                index,
                location: location.to_owned(),
                outcome: OnceLock::new(),
            })
            .collect();
        Self {
            count: catalog.count(),
            slots,
        }
    }

    /// Number of slots.
    pub fn count(&self) -> FrameCount {
        self.count
    }

    /// Borrow a slot.
    pub fn slot(&self, index: FrameIndex) -> Option<&FrameSlot> {
        self.slots.get(index.as_usize())
    }

    /// Iterate slots in playback order.
    pub fn slots(&self) -> impl Iterator<Item = &FrameSlot> {
        self.slots.iter()
    }

    /// State of a slot; out-of-range indices read as `Failed`.
    pub fn state(&self, index: FrameIndex) -> SlotState {
        self.slot(index).map_or(SlotState::Failed, FrameSlot::state)
    }

    /// Decoded image for drawing, if that slot is `Loaded`.
    pub fn image(&self, index: FrameIndex) -> Option<&Arc<FrameImage>> {
        self.slot(index).and_then(FrameSlot::image)
    }

    /// Resolve a slot as loaded. Returns `false` if it was already resolved.
    pub fn mark_loaded(&self, index: FrameIndex, image: FrameImage) -> bool {
        self.resolve(index, SlotOutcome::Loaded(Arc::new(image)))
    }

    /// Resolve a slot as failed. Returns `false` if it was already resolved.
    pub fn mark_failed(&self, index: FrameIndex, reason: impl Into<String>) -> bool {
        self.resolve(index, SlotOutcome::Failed(reason.into()))
    }

    fn resolve(&self, index: FrameIndex, outcome: SlotOutcome) -> bool {
        self.slot(index)
            .is_some_and(|slot| slot.outcome.set(outcome).is_ok())
    }

    /// Count slots per state as `(pending, loaded, failed)`.
    pub fn tally(&self) -> (u32, u32, u32) {
        self.slots
            .iter()
            .fold((0, 0, 0), |(p, l, f), slot| match slot.state() {
                SlotState::Pending => (p + 1, l, f),
                SlotState::Loaded => (p, l + 1, f),
                SlotState::Failed => (p, l, f + 1),
            })
    }

    /// Return `true` once no slot is `Pending`.
    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|s| s.state() != SlotState::Pending)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sequence.rs"]
mod tests;

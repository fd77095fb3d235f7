use std::collections::VecDeque;
use std::sync::{Arc, mpsc};

use crate::assets::catalog::FrameCatalog;
use crate::assets::decode::decode_frame;
use crate::assets::sequence::{FrameSequence, SlotState};
use crate::assets::source::FrameSource;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};

/// Options for [`Preloader::start`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PreloadOpts {
    /// Override the number of decode worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Completion of one frame load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadEvent {
    /// Slot that resolved.
    pub index: FrameIndex,
    /// Terminal state it resolved to (`Loaded` or `Failed`).
    pub state: SlotState,
}

/// Summary returned by [`Preloader::wait_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Slots that decoded successfully.
    pub loaded: u32,
    /// Slots whose fetch or decode failed.
    pub failed: u32,
}

/// Fetches and decodes every frame of a sequence exactly once.
///
/// All loads are queued at start on a dedicated worker pool and complete in arbitrary order.
/// Each completion writes its slot in the shared [`FrameSequence`] and then posts a
/// [`LoadEvent`]; consumers either drain events with [`Preloader::poll`] or block on
/// [`Preloader::wait_for`] / [`Preloader::wait_all`]. Loads are never retried or cancelled.
pub struct Preloader {
    sequence: Arc<FrameSequence>,
    events: mpsc::Receiver<LoadEvent>,
    // Events received while blocking in `wait_*`, replayed by `poll`.
    backlog: VecDeque<LoadEvent>,
    issued: u32,
    received: u32,
    _pool: rayon::ThreadPool,
}

impl Preloader {
    /// Create the sequence for `catalog` and issue one load per slot.
    #[tracing::instrument(skip(catalog, source), fields(frames = catalog.count().get()))]
    pub fn start(
        catalog: &FrameCatalog,
        source: Arc<dyn FrameSource>,
        opts: PreloadOpts,
    ) -> ReelResult<Self> {
        let pool = build_thread_pool(opts.threads)?;
        let sequence = Arc::new(FrameSequence::new(catalog));
        let (tx, events) = mpsc::channel::<LoadEvent>();

        let mut issued = 0u32;
        for (index, location) in catalog.iter() {
            let sequence = Arc::clone(&sequence);
            let source = Arc::clone(&source);
            let tx = tx.clone();
            let location = location.to_owned();
            pool.spawn(move || {
                let state = load_one(&sequence, source.as_ref(), index, &location);
                // The receiver is gone once the owning player is disposed; the slot is already
                // written, so the event can be dropped.
                let _ = tx.send(LoadEvent { index, state });
            });
            issued += 1;
        }
        tracing::debug!(issued, "preload issued");

        Ok(Self {
            sequence,
            events,
            backlog: VecDeque::new(),
            issued,
            received: 0,
            _pool: pool,
        })
    }

    /// Number of loads issued at start (one per slot).
    pub fn issued(&self) -> u32 {
        self.issued
    }

    /// Return `true` once every completion event has been received.
    pub fn is_complete(&self) -> bool {
        self.received >= self.issued
    }

    /// Shared frame cache filled by the workers.
    pub fn sequence(&self) -> &Arc<FrameSequence> {
        &self.sequence
    }

    /// Drain completions observed so far without blocking.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let mut out: Vec<LoadEvent> = self.backlog.drain(..).collect();
        let before = out.len();
        out.extend(self.events.try_iter());
        self.received += (out.len() - before) as u32;
        out
    }

    /// Block until `index` resolves and return its terminal state.
    ///
    /// Out-of-range indices resolve immediately as `Failed`.
    pub fn wait_for(&mut self, index: FrameIndex) -> ReelResult<SlotState> {
        loop {
            let state = self.sequence.state(index);
            if state != SlotState::Pending {
                return Ok(state);
            }
            self.recv_one()?;
        }
    }

    /// Block until every slot resolves and its completion event has arrived.
    pub fn wait_all(&mut self) -> ReelResult<PreloadReport> {
        while self.received < self.issued {
            self.recv_one()?;
        }
        let (_, loaded, failed) = self.sequence.tally();
        Ok(PreloadReport { loaded, failed })
    }

    fn recv_one(&mut self) -> ReelResult<()> {
        let ev = self
            .events
            .recv()
            .map_err(|_| ReelError::asset("preload channel disconnected unexpectedly"))?;
        self.received += 1;
        self.backlog.push_back(ev);
        Ok(())
    }
}

fn load_one(
    sequence: &FrameSequence,
    source: &dyn FrameSource,
    index: FrameIndex,
    location: &str,
) -> SlotState {
    let decoded = source.fetch(location).and_then(|bytes| decode_frame(&bytes));
    match decoded {
        Ok(image) => {
            tracing::trace!(%index, width = image.width, height = image.height, "frame loaded");
            sequence.mark_loaded(index, image);
        }
        Err(e) => {
            tracing::warn!(%index, location, error = %e, "frame failed to load");
            sequence.mark_failed(index, e.to_string());
        }
    }
    sequence.state(index)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "preload 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("reel-preload-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::asset(format!("failed to build preload thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/preload.rs"]
mod tests;

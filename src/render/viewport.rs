use crate::foundation::core::{Size, Viewport};

/// Keeps the drawing surface backing size in step with its host container.
///
/// Sole owner of the [`Viewport`]; everything else reads it.
#[derive(Clone, Debug, Default)]
pub struct ViewportSizer {
    viewport: Viewport,
}

impl ViewportSizer {
    /// Start at 0x0; the first [`ViewportSizer::sync`] sets the real size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current surface size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Match the container's rendered box. Returns the new viewport only when it changed.
    pub fn sync(&mut self, container: Size) -> Option<Viewport> {
        let next = Viewport::from_box(container);
        if next == self.viewport {
            return None;
        }
        tracing::debug!(width = next.width, height = next.height, "viewport resized");
        self.viewport = next;
        Some(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/viewport.rs"]
mod tests;

use crate::foundation::core::Size;
use crate::scroll::progress::ScrollState;

/// Vertical extent of the tracked section, in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionBounds {
    /// Offset of the section top from the page top.
    pub top: f64,
    /// Section height.
    pub height: f64,
}

/// Read-only view of the host page, re-queried on every event.
///
/// Elements the host cannot find are reported as `None`; a player whose section or container
/// is missing disables itself.
pub trait PageLayout {
    /// Current vertical page scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Inner size of the browser window (or equivalent).
    fn viewport_size(&self) -> Size;

    /// Bounds of the section whose scroll range drives playback.
    fn section_bounds(&self) -> Option<SectionBounds>;

    /// Rendered box of the element hosting the drawing surface.
    fn container_size(&self) -> Option<Size>;

    /// Scroll sample relative to the section, if the section exists.
    fn scroll_state(&self) -> Option<ScrollState> {
        let section = self.section_bounds()?;
        Some(ScrollState {
            raw_offset: self.scroll_offset(),
            section_top: section.top,
            section_height: section.height,
        })
    }
}

/// Plain-data page description, for hosts that push geometry instead of exposing a DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageGeometry {
    /// Vertical page scroll offset.
    pub scroll_offset: f64,
    /// Window inner size.
    pub viewport: Size,
    /// Tracked section, if present.
    pub section: Option<SectionBounds>,
    /// Surface container box, if present.
    pub container: Option<Size>,
}

impl PageGeometry {
    /// Full-window sticky layout: the container fills the viewport and the section starts at
    /// `section_top` with `section_height` of scroll travel plus one viewport.
    pub fn sticky(viewport: Size, section_top: f64, section_height: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            viewport,
            section: Some(SectionBounds {
                top: section_top,
                height: section_height,
            }),
            container: Some(viewport),
        }
    }

    /// Same geometry scrolled to `offset`.
    pub fn scrolled_to(mut self, offset: f64) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Offset at which progress reaches 1, if the section has a scrollable range.
    pub fn section_end_offset(&self) -> Option<f64> {
        let s = self.section?;
        let range = s.height - self.viewport.height;
        (range > 0.0).then_some(s.top + range)
    }
}

impl PageLayout for PageGeometry {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn section_bounds(&self) -> Option<SectionBounds> {
        self.section
    }

    fn container_size(&self) -> Option<Size> {
        self.container
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/layout.rs"]
mod tests;

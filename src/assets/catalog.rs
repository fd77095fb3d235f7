use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};

fn default_pad_width() -> usize {
    3
}

/// Location template: `base_path + zero-padded index + extension`.
///
/// `PathTemplate { base_path: "./assets/sequence/frame", pad_width: 3, extension: ".jpg" }`
/// renders index 7 as `./assets/sequence/frame007.jpg`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PathTemplate {
    /// Everything before the index digits.
    pub base_path: String,
    /// Minimum number of index digits (left-padded with zeros).
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
    /// Everything after the index digits, including the dot.
    pub extension: String,
}

impl PathTemplate {
    /// Template with the default 3-digit padding.
    pub fn new(base_path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            pad_width: default_pad_width(),
            extension: extension.into(),
        }
    }

    /// Render the location for `index`.
    pub fn location(&self, index: FrameIndex) -> String {
        format!(
            "{}{:0width$}{}",
            self.base_path,
            index.0,
            self.extension,
            width = self.pad_width
        )
    }
}

/// Ordered frame resource locations for one sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCatalog {
    count: FrameCount,
    locations: Vec<String>,
}

impl FrameCatalog {
    /// Enumerate `count` locations from a path template.
    pub fn from_template(count: u32, template: &PathTemplate) -> ReelResult<Self> {
        Self::from_fn(count, |i| template.location(i))
    }

    /// Enumerate `count` locations from an arbitrary `(index) -> location` mapping.
    pub fn from_fn(count: u32, f: impl Fn(FrameIndex) -> String) -> ReelResult<Self> {
        let count = FrameCount::new(count)?;
        let locations: Vec<String> = count.indices().map(f).collect();
        if let Some(i) = locations.iter().position(|l| l.is_empty()) {
            return Err(ReelError::validation(format!(
                "frame location for index {i} is empty"
            )));
        }
        Ok(Self { count, locations })
    }

    /// Number of frames (always > 0).
    pub fn count(&self) -> FrameCount {
        self.count
    }

    /// Location of one frame, if in range.
    pub fn location(&self, index: FrameIndex) -> Option<&str> {
        self.locations.get(index.as_usize()).map(String::as_str)
    }

    /// Iterate `(index, location)` pairs in playback order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameIndex, &str)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (FrameIndex(i as u32), l.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::assets::catalog::{FrameCatalog, PathTemplate};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scroll::scale::ScaleAnimator;

fn default_min_scale() -> f64 {
    0.5
}

/// Per-instance player configuration.
///
/// ```json
/// {
///   "frame_count": 137,
///   "path": { "base_path": "./assets/sequence/frame", "extension": ".png" },
///   "min_scale": 0.5,
///   "responsive_scale_threshold": 768
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    /// Number of frames in the sequence (> 0).
    pub frame_count: u32,
    /// Frame location template.
    pub path: PathTemplate,
    /// Scale at the end of the section, in `(0, 1]`.
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Viewport width (px) below which scaling is disabled.
    #[serde(default)]
    pub responsive_scale_threshold: f64,
    /// Decode worker threads. `None` uses rayon defaults.
    #[serde(default)]
    pub preload_threads: Option<usize>,
}

impl PlayerConfig {
    /// Minimal configuration with defaults for everything but the sequence.
    pub fn new(frame_count: u32, path: PathTemplate) -> Self {
        Self {
            frame_count,
            path,
            min_scale: default_min_scale(),
            responsive_scale_threshold: 0.0,
            preload_threads: None,
        }
    }

    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse player config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open player config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every field; returns the first problem found.
    pub fn validate(&self) -> ReelResult<()> {
        self.catalog()?;
        self.scale_animator()?;
        if self.preload_threads == Some(0) {
            return Err(ReelError::validation(
                "preload_threads must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Frame locations described by this configuration.
    pub fn catalog(&self) -> ReelResult<FrameCatalog> {
        FrameCatalog::from_template(self.frame_count, &self.path)
    }

    /// Scale projection described by this configuration.
    pub fn scale_animator(&self) -> ReelResult<ScaleAnimator> {
        ScaleAnimator::new(self.min_scale, self.responsive_scale_threshold)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/config.rs"]
mod tests;

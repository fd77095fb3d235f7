use std::path::{Path, PathBuf};

use crate::foundation::error::{ReelError, ReelResult};

/// Fetches the encoded bytes behind a frame location.
///
/// Called from preload worker threads, hence `Send + Sync`.
pub trait FrameSource: Send + Sync {
    /// Return the raw encoded bytes for `location`.
    fn fetch(&self, location: &str) -> ReelResult<Vec<u8>>;
}

impl<F> FrameSource for F
where
    F: Fn(&str) -> ReelResult<Vec<u8>> + Send + Sync,
{
    fn fetch(&self, location: &str) -> ReelResult<Vec<u8>> {
        self(location)
    }
}

/// Frame source reading files below a root directory.
#[derive(Clone, Debug)]
pub struct FsFrameSource {
    root: PathBuf,
}

impl FsFrameSource {
    /// Resolve locations relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory locations are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a location resolves to.
    pub fn resolve(&self, location: &str) -> ReelResult<PathBuf> {
        let norm = normalize_rel_path(location)?;
        Ok(self.root.join(Path::new(&norm)))
    }
}

impl FrameSource for FsFrameSource {
    fn fetch(&self, location: &str) -> ReelResult<Vec<u8>> {
        let p = self.resolve(location)?;
        std::fs::read(&p)
            .map_err(|e| ReelError::asset(format!("failed to read frame '{}': {e}", p.display())))
    }
}

/// Normalize and validate root-relative frame locations.
///
/// The result uses `/` separators and drops `.` segments (so `./assets/frame000.png` and
/// `assets/frame000.png` are the same file). Absolute paths, Windows drive prefixes (`C:`), and
/// `..` are rejected.
pub fn normalize_rel_path(location: &str) -> ReelResult<String> {
    let s = location.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ReelError::validation("frame locations must be relative"));
    }
    if s.is_empty() {
        return Err(ReelError::validation("frame location must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if out.is_empty() && is_drive_prefix(part) {
            return Err(ReelError::validation("frame locations must be relative"));
        }
        if part == ".." {
            return Err(ReelError::validation(
                "frame locations must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ReelError::validation(
            "frame location must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

fn is_drive_prefix(segment: &str) -> bool {
    let b = segment.as_bytes();
    b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;

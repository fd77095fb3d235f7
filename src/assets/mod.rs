//! Frame assets: where frames live, how they are fetched and decoded, and the shared cache the
//! background preloader fills.

/// Frame location catalog.
pub mod catalog;
/// Image decoding into premultiplied RGBA8.
pub mod decode;
/// Background preloading onto a worker pool.
pub mod preload;
/// Shared per-frame load state.
pub mod sequence;
/// Byte sources for frame locations.
pub mod source;

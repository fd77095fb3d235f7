//! The scroll-synchronized player and its inputs.

/// Per-instance configuration.
pub mod config;
/// Host page geometry.
pub mod layout;
/// Event-driven player.
pub mod scrub_player;

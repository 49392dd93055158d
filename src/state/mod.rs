//! State management module.
//!
//! This module contains the screen and game state types and their logic:
//! - `ReactionGame` - Reaction-time test
//! - `ClickSpeedGame` - Click-speed test
//! - `GlobalState` - Screen routing, score store and session flow
//!
//! Each game implements common traits for snapshots, updates, and action handling.

pub mod click_speed;
pub mod dashboard;
pub mod global;
pub mod reaction;
pub mod timer;
pub mod traits;

// Re-exports for convenient access
pub use click_speed::ClickSpeedGame;
pub use global::GlobalState;
pub use reaction::ReactionGame;

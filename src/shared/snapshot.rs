//! Render snapshots for inter-thread communication.
//!
//! Snapshots are immutable captures of game state sent from the logic thread
//! to the render side. This decouples game logic from rendering.

use crate::models::stats::{AttemptSummary, ClickRating, ReactionRating};

/// Everything the render side needs for one screen refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    /// Signed-in user shown in the header.
    pub active_user: Option<String>,
    /// One-off message from the last action (e.g. a rejected login).
    pub notice: Option<String>,
    pub screen: RenderState,
}

/// High-level render state representing the current screen.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderState {
    /// Game selection.
    Menu(MenuSnapshot),
    /// Reaction-time game.
    Reaction(ReactionSnapshot),
    /// Click-speed game.
    ClickSpeed(ClickSpeedSnapshot),
    /// Score history of the active user; `None` when nobody is signed in.
    Dashboard(Option<DashboardSnapshot>),
}

/// Best results of the active user, shown under each game entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub best_reaction: Option<u64>,
    pub most_clicks: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionView {
    Waiting,
    Ready,
    Active,
    Clicked {
        reaction_ms: u64,
        rating: ReactionRating,
    },
    TooEarly,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReactionSnapshot {
    pub view: ReactionView,
    /// Latest attempts, oldest first.
    pub recent: Vec<u64>,
    pub summary: AttemptSummary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickSpeedView {
    Waiting,
    Countdown { remaining: u32 },
    Active { time_left: u32 },
    Finished { rating: ClickRating },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClickSpeedSnapshot {
    pub view: ClickSpeedView,
    pub clicks: u32,
    pub duration_secs: u32,
    pub clicks_per_second: Option<f64>,
    pub recent: Vec<u64>,
    pub summary: AttemptSummary,
}

/// Per-game block of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub summary: AttemptSummary,
    pub recent: Vec<u64>,
    /// Rating of the best result, dashboard wording.
    pub rating: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub username: String,
    pub reaction: GameStats,
    pub click_speed: GameStats,
}

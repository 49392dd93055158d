//! Application state enum for the state machine.

use crate::input::events::Screen;
use crate::state::{ClickSpeedGame, ReactionGame};

/// High-level application states driven by `GlobalState`.
pub(super) enum AppState {
    /// Game selection.
    Menu,
    /// Reaction-time game.
    Reaction(ReactionGame),
    /// Click-speed game.
    ClickSpeed(ClickSpeedGame),
    /// Score history of the active user.
    Dashboard,
}

impl AppState {
    /// Fresh state for `screen`. Game sessions always start from `Waiting`.
    pub(super) fn open(screen: Screen, click_duration: u32) -> Self {
        match screen {
            Screen::Menu => AppState::Menu,
            Screen::Reaction => AppState::Reaction(ReactionGame::new()),
            Screen::ClickSpeed => AppState::ClickSpeed(ClickSpeedGame::new(click_duration)),
            Screen::Dashboard => AppState::Dashboard,
        }
    }

    pub(super) fn screen(&self) -> Screen {
        match self {
            AppState::Menu => Screen::Menu,
            AppState::Reaction(_) => Screen::Reaction,
            AppState::ClickSpeed(_) => Screen::ClickSpeed,
            AppState::Dashboard => Screen::Dashboard,
        }
    }

    /// Cancels whatever timer the current game holds.
    pub(super) fn teardown(&mut self) {
        match self {
            AppState::Reaction(game) => game.teardown(),
            AppState::ClickSpeed(game) => game.teardown(),
            AppState::Menu | AppState::Dashboard => {}
        }
    }
}

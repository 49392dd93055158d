//! Global state management for the screen state machine.

mod app_state;
pub mod session;

use app_state::AppState;

use crate::database::ScoreStore;
use crate::input::events::{GameAction, Screen};
use crate::shared::snapshot::{FrameSnapshot, RenderState};
use crate::state::click_speed::{MAX_DURATION_SECS, MIN_DURATION_SECS};
use crate::state::dashboard;
use crate::state::traits::{GameContext, HandleAction, Snapshot, Update};

/// Owns the score store and the current screen.
pub struct GlobalState {
    current_state: AppState,
    scores: ScoreStore,
    /// Window length handed to every new click-speed session.
    click_duration: u32,
    notice: Option<String>,
}

impl GlobalState {
    pub fn new(scores: ScoreStore, click_duration: u32) -> Self {
        log::info!("LOGIC: Initializing Global State");
        Self {
            current_state: AppState::Menu,
            scores,
            click_duration: click_duration.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS),
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.current_state.screen()
    }

    /// Cancels running timers. The store is already persisted after every change.
    pub fn shutdown(&mut self) {
        log::info!("LOGIC: Shutting down on {:?}", self.screen());
        self.current_state.teardown();
    }

    /// Fires every timer of the current game that is due at `now`.
    pub fn update(&mut self, now: u64) {
        let mut ctx = GameContext {
            scores: &mut self.scores,
        };

        match &mut self.current_state {
            AppState::Reaction(game) => Update::update(game, now, &mut ctx),
            AppState::ClickSpeed(game) => Update::update(game, now, &mut ctx),
            AppState::Menu | AppState::Dashboard => {}
        }
    }

    /// Routes a `GameAction` to navigation, the session flow or the current game.
    pub fn handle_action(&mut self, action: &GameAction, now: u64) {
        self.notice = None;

        match action {
            GameAction::Open(screen) => self.open(*screen),
            GameAction::Back => self.open(Screen::Menu),
            GameAction::Login { username } => {
                if let Err(e) = session::login(&mut self.scores, username) {
                    log::warn!("SESSION: {}", e);
                    self.notice = Some(e);
                }
            }
            GameAction::Logout => session::logout(&mut self.scores),
            GameAction::SetDuration(secs) => self.set_click_duration(*secs),
            GameAction::Quit => {}
            _ => {
                let mut ctx = GameContext {
                    scores: &mut self.scores,
                };
                let consumed = match &mut self.current_state {
                    AppState::Reaction(game) => game.handle_action(action, now, &mut ctx),
                    AppState::ClickSpeed(game) => game.handle_action(action, now, &mut ctx),
                    AppState::Menu | AppState::Dashboard => false,
                };
                if !consumed {
                    log::debug!("LOGIC: {:?} ignored on {:?}", action, self.screen());
                }
            }
        }
    }

    /// Produces a render-ready snapshot for the render side.
    pub fn create_snapshot(&self) -> FrameSnapshot {
        let screen = match &self.current_state {
            AppState::Menu => RenderState::Menu(dashboard::menu(&self.scores)),
            AppState::Reaction(game) => RenderState::Reaction(Snapshot::create_snapshot(game)),
            AppState::ClickSpeed(game) => RenderState::ClickSpeed(Snapshot::create_snapshot(game)),
            AppState::Dashboard => RenderState::Dashboard(dashboard::build(&self.scores)),
        };

        FrameSnapshot {
            active_user: self.scores.active_user().map(str::to_string),
            notice: self.notice.clone(),
            screen,
        }
    }

    fn open(&mut self, screen: Screen) {
        if self.screen() == screen {
            return;
        }
        self.current_state.teardown();
        self.current_state = AppState::open(screen, self.click_duration);
        log::debug!("LOGIC: Opened {:?}", screen);
    }

    fn set_click_duration(&mut self, secs: u32) {
        let result = match &mut self.current_state {
            AppState::ClickSpeed(game) => game.set_duration(secs),
            _ if (MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&secs) => Ok(()),
            _ => Err(format!(
                "Duration must be between {} and {} seconds",
                MIN_DURATION_SECS, MAX_DURATION_SECS
            )),
        };

        match result {
            Ok(()) => self.click_duration = secs,
            Err(e) => {
                log::warn!("CLICK: {}", e);
                self.notice = Some(e);
            }
        }
    }
}

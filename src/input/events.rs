use std::time::Instant;

/// Screens the player can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Reaction,
    ClickSpeed,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    // Gameplay
    /// The single game button.
    Press,
    Start,
    Retry,
    Reset,
    /// New click-speed window length in seconds.
    SetDuration(u32),

    // Navigation
    Open(Screen),
    Back,

    // Session
    Login { username: String },
    Logout,

    Quit,
}

/// An action plus the moment the input thread read it.
#[derive(Debug, Clone)]
pub struct StampedAction {
    pub action: GameAction,
    pub at: Instant,
}

impl StampedAction {
    pub fn now(action: GameAction) -> Self {
        Self {
            action,
            at: Instant::now(),
        }
    }
}

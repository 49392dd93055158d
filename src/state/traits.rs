//! Traits for state management.
//!
//! These traits define the common interface for every screen the host drives.

use crate::database::ScoreStore;
use crate::input::events::GameAction;

/// Shared resources handed to a screen while it updates or handles an action.
pub struct GameContext<'a> {
    pub scores: &'a mut ScoreStore,
}

/// Trait for creating render-ready snapshots.
///
/// Snapshots are immutable captures of state sent to the render side.
pub trait Snapshot {
    /// The snapshot type produced.
    type Output;

    /// Creates an immutable snapshot for rendering.
    fn create_snapshot(&self) -> Self::Output;
}

/// Trait for time-driven updates.
pub trait Update {
    /// Advances the state to `now` (monotonic milliseconds), firing every timer
    /// that came due since the previous call.
    fn update(&mut self, now: u64, ctx: &mut GameContext);
}

/// Trait for handling game actions.
pub trait HandleAction {
    /// Applies `action` at time `now`. Returns `false` if the screen ignored it.
    fn handle_action(&mut self, action: &GameAction, now: u64, ctx: &mut GameContext) -> bool;
}

//! Reaction-time game.
//!
//! The player starts a round, waits for the go signal that appears after a
//! random delay, and presses as fast as possible. Pressing before the signal
//! ends the round as "too early".

use super::timer::Delay;
use super::traits::{GameContext, HandleAction, Snapshot, Update};
use crate::database::GameType;
use crate::input::events::GameAction;
use crate::models::stats::{AttemptSummary, RECENT_ATTEMPTS, ReactionRating, recent};
use crate::shared::snapshot::{ReactionSnapshot, ReactionView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shortest wait before the go signal (inclusive).
pub const MIN_DELAY_MS: u64 = 2_000;
/// Longest wait before the go signal (exclusive).
pub const MAX_DELAY_MS: u64 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionPhase {
    /// Nothing running.
    Waiting,
    /// Waiting for the go signal.
    Ready { go: Delay },
    /// Go signal due since `since`.
    Active { since: u64 },
    /// Round finished with a valid press.
    Clicked { reaction_ms: u64 },
    /// Pressed before the go signal.
    TooEarly,
}

pub struct ReactionGame<R = StdRng> {
    phase: ReactionPhase,
    attempts: Vec<u64>,
    rng: R,
}

impl ReactionGame<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for ReactionGame<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the wait before the go signal, uniform in `[MIN_DELAY_MS, MAX_DELAY_MS)`.
pub fn sample_delay(rng: &mut impl Rng) -> u64 {
    rng.random_range(MIN_DELAY_MS..MAX_DELAY_MS)
}

impl<R: Rng> ReactionGame<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            phase: ReactionPhase::Waiting,
            attempts: Vec::new(),
            rng,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> ReactionPhase {
        self.phase
    }

    /// Valid reaction times of this session, oldest first.
    #[cfg(test)]
    pub fn attempts(&self) -> &[u64] {
        &self.attempts
    }

    pub fn summary(&self) -> AttemptSummary {
        AttemptSummary::reaction(&self.attempts)
    }

    /// Starts a round. Also used to retry after a finished round.
    ///
    /// Ignored while a round is running.
    pub fn start(&mut self, now: u64) -> bool {
        match self.phase {
            ReactionPhase::Waiting | ReactionPhase::Clicked { .. } | ReactionPhase::TooEarly => {
                let delay = sample_delay(&mut self.rng);
                log::debug!("REACTION: Go signal in {} ms", delay);
                self.phase = ReactionPhase::Ready {
                    go: Delay::after(now, delay),
                };
                true
            }
            ReactionPhase::Ready { .. } | ReactionPhase::Active { .. } => false,
        }
    }

    /// Handles the player's press at `now`.
    pub fn press(&mut self, now: u64, ctx: &mut GameContext) -> bool {
        match self.phase {
            ReactionPhase::Waiting => self.start(now),
            ReactionPhase::Ready { .. } => {
                // Dropping the Ready phase drops its pending go signal.
                self.phase = ReactionPhase::TooEarly;
                log::debug!("REACTION: Pressed too early");
                true
            }
            ReactionPhase::Active { since } => {
                let reaction_ms = now.saturating_sub(since);
                self.phase = ReactionPhase::Clicked { reaction_ms };
                self.attempts.push(reaction_ms);
                ctx.scores.record(GameType::ReactionTime, reaction_ms);
                log::info!("REACTION: {} ms", reaction_ms);
                true
            }
            ReactionPhase::Clicked { .. } | ReactionPhase::TooEarly => false,
        }
    }

    /// Back to `Waiting`, cancelling any pending go signal. Attempts are kept.
    pub fn reset(&mut self) {
        self.phase = ReactionPhase::Waiting;
    }

    /// Cancels pending timers before the game is dropped.
    pub fn teardown(&mut self) {
        if let ReactionPhase::Ready { go } = self.phase {
            log::debug!(
                "REACTION: Cancelled go signal due at {} ms",
                go.deadline()
            );
        }
        self.phase = ReactionPhase::Waiting;
    }
}

impl<R: Rng> Update for ReactionGame<R> {
    fn update(&mut self, now: u64, _ctx: &mut GameContext) {
        if let ReactionPhase::Ready { go } = self.phase
            && go.is_due(now)
        {
            // Timed from the deadline, not from the tick that noticed it.
            self.phase = ReactionPhase::Active {
                since: go.deadline(),
            };
        }
    }
}

impl<R: Rng> HandleAction for ReactionGame<R> {
    fn handle_action(&mut self, action: &GameAction, now: u64, ctx: &mut GameContext) -> bool {
        match action {
            GameAction::Press => self.press(now, ctx),
            GameAction::Start | GameAction::Retry => self.start(now),
            GameAction::Reset => {
                self.reset();
                true
            }
            _ => false,
        }
    }
}

impl<R: Rng> Snapshot for ReactionGame<R> {
    type Output = ReactionSnapshot;

    fn create_snapshot(&self) -> Self::Output {
        let view = match self.phase {
            ReactionPhase::Waiting => ReactionView::Waiting,
            ReactionPhase::Ready { .. } => ReactionView::Ready,
            ReactionPhase::Active { .. } => ReactionView::Active,
            ReactionPhase::Clicked { reaction_ms } => ReactionView::Clicked {
                reaction_ms,
                rating: ReactionRating::from_millis(reaction_ms),
            },
            ReactionPhase::TooEarly => ReactionView::TooEarly,
        };

        ReactionSnapshot {
            view,
            recent: recent(&self.attempts, RECENT_ATTEMPTS).to_vec(),
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{ScoreStore, Scores};

    fn seeded() -> ReactionGame<StdRng> {
        ReactionGame::with_rng(StdRng::seed_from_u64(7))
    }

    fn go_deadline(game: &ReactionGame<StdRng>) -> u64 {
        match game.phase() {
            ReactionPhase::Ready { go } => go.deadline(),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_sampled_delays_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let delay = sample_delay(&mut rng);
            assert!((MIN_DELAY_MS..MAX_DELAY_MS).contains(&delay));
        }
    }

    #[test]
    fn test_start_arms_go_signal() {
        let mut game = seeded();
        assert!(game.start(500));
        let deadline = go_deadline(&game);
        assert!(deadline >= 500 + MIN_DELAY_MS && deadline < 500 + MAX_DELAY_MS);

        // A second start while waiting for the signal is ignored.
        assert!(!game.start(600));
        assert_eq!(go_deadline(&game), deadline);
    }

    #[test]
    fn test_go_signal_fires_at_deadline() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        let deadline = go_deadline(&game);

        game.update(deadline - 1, &mut ctx);
        assert!(matches!(game.phase(), ReactionPhase::Ready { .. }));
        game.update(deadline, &mut ctx);
        assert_eq!(game.phase(), ReactionPhase::Active { since: deadline });
    }

    #[test]
    fn test_late_tick_keeps_signal_time() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        let deadline = go_deadline(&game);

        game.update(deadline - 1, &mut ctx);
        game.update(deadline + 4, &mut ctx);
        assert!(game.press(deadline + 4, &mut ctx));
        assert_eq!(game.phase(), ReactionPhase::Clicked { reaction_ms: 4 });
    }

    #[test]
    fn test_reaction_time_is_press_minus_signal() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(1_000);
        let deadline = go_deadline(&game);

        game.update(deadline + 3, &mut ctx);
        assert!(game.press(deadline + 220, &mut ctx));
        assert_eq!(game.phase(), ReactionPhase::Clicked { reaction_ms: 220 });
        assert_eq!(game.attempts(), &[220]);
    }

    #[test]
    fn test_press_at_signal_instant_is_zero() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        let deadline = go_deadline(&game);
        game.update(deadline, &mut ctx);
        game.press(deadline, &mut ctx);
        assert_eq!(game.phase(), ReactionPhase::Clicked { reaction_ms: 0 });
    }

    #[test]
    fn test_early_press_cancels_signal() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        let deadline = go_deadline(&game);

        assert!(game.press(deadline - 10, &mut ctx));
        assert_eq!(game.phase(), ReactionPhase::TooEarly);

        for now in [deadline, deadline + 1, deadline + 60_000] {
            game.update(now, &mut ctx);
            assert_eq!(game.phase(), ReactionPhase::TooEarly);
        }
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn test_press_while_waiting_starts() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        assert!(game.press(0, &mut ctx));
        assert!(matches!(game.phase(), ReactionPhase::Ready { .. }));
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn test_press_after_result_is_ignored() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        let deadline = go_deadline(&game);
        game.update(deadline, &mut ctx);
        game.press(deadline + 300, &mut ctx);

        assert!(!game.press(deadline + 400, &mut ctx));
        assert_eq!(game.attempts(), &[300]);
    }

    #[test]
    fn test_retry_and_reset() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        game.press(1, &mut ctx);
        assert_eq!(game.phase(), ReactionPhase::TooEarly);

        assert!(game.handle_action(&GameAction::Retry, 10, &mut ctx));
        let deadline = go_deadline(&game);
        assert!(deadline >= 10 + MIN_DELAY_MS);

        game.handle_action(&GameAction::Reset, 20, &mut ctx);
        assert_eq!(game.phase(), ReactionPhase::Waiting);
        game.update(deadline + 1, &mut ctx);
        assert_eq!(game.phase(), ReactionPhase::Waiting);
    }

    #[test]
    fn test_teardown_cancels_pending_signal() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        game.start(0);
        let deadline = go_deadline(&game);

        game.teardown();
        game.update(deadline + 1, &mut ctx);
        assert_eq!(game.phase(), ReactionPhase::Waiting);
    }

    #[test]
    fn test_result_goes_to_active_user() {
        let mut store = ScoreStore::in_memory();
        store.add_user("bob", Scores::default());
        store.set_active_user("bob");

        let mut game = seeded();
        {
            let mut ctx = GameContext { scores: &mut store };
            game.start(0);
            let deadline = go_deadline(&game);
            game.update(deadline, &mut ctx);
            game.press(deadline + 180, &mut ctx);
        }
        assert_eq!(store.get_user("bob").unwrap().reaction_time, vec![180]);
    }

    #[test]
    fn test_result_without_user_stays_local() {
        let mut store = ScoreStore::in_memory();
        store.add_user("bob", Scores::default());

        let mut game = seeded();
        {
            let mut ctx = GameContext { scores: &mut store };
            game.start(0);
            let deadline = go_deadline(&game);
            game.update(deadline, &mut ctx);
            game.press(deadline + 180, &mut ctx);
        }
        assert_eq!(game.attempts(), &[180]);
        assert!(store.get_user("bob").unwrap().reaction_time.is_empty());
    }

    #[test]
    fn test_snapshot_reports_rating_and_stats() {
        let mut store = ScoreStore::in_memory();
        let mut ctx = GameContext { scores: &mut store };
        let mut game = seeded();
        for reaction in [350, 190] {
            game.start(0);
            let deadline = go_deadline(&game);
            game.update(deadline, &mut ctx);
            game.press(deadline + reaction, &mut ctx);
        }

        let snapshot = game.create_snapshot();
        assert_eq!(
            snapshot.view,
            ReactionView::Clicked {
                reaction_ms: 190,
                rating: ReactionRating::Excellent
            }
        );
        assert_eq!(snapshot.recent, vec![350, 190]);
        assert_eq!(snapshot.summary.best, Some(190));
        assert_eq!(snapshot.summary.average, Some(270.0));
    }
}

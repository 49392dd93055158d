//! Click-speed game.
//!
//! After a three second countdown the player presses as many times as possible
//! inside a fixed window. Both phases are driven by a one second interval.

use super::timer::Interval;
use super::traits::{GameContext, HandleAction, Snapshot, Update};
use crate::database::GameType;
use crate::input::events::GameAction;
use crate::models::stats::{
    AttemptSummary, ClickRating, RECENT_ATTEMPTS, clicks_per_second, recent,
};
use crate::shared::snapshot::{ClickSpeedSnapshot, ClickSpeedView};

pub const COUNTDOWN_FROM: u32 = 3;
pub const TICK_MS: u64 = 1_000;
pub const DEFAULT_DURATION_SECS: u32 = 10;
pub const MIN_DURATION_SECS: u32 = 1;
pub const MAX_DURATION_SECS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSpeedPhase {
    Waiting,
    Countdown { tick: Interval },
    Active { tick: Interval },
    Finished,
}

pub struct ClickSpeedGame {
    phase: ClickSpeedPhase,
    duration_secs: u32,
    time_left: u32,
    countdown: u32,
    clicks: u32,
    attempts: Vec<u64>,
}

impl ClickSpeedGame {
    pub fn new(duration_secs: u32) -> Self {
        let duration_secs = duration_secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        Self {
            phase: ClickSpeedPhase::Waiting,
            duration_secs,
            time_left: duration_secs,
            countdown: COUNTDOWN_FROM,
            clicks: 0,
            attempts: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> ClickSpeedPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[cfg(test)]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[cfg(test)]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    #[cfg(test)]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Click counts of finished rounds, oldest first.
    #[cfg(test)]
    pub fn attempts(&self) -> &[u64] {
        &self.attempts
    }

    pub fn summary(&self) -> AttemptSummary {
        AttemptSummary::click_speed(&self.attempts)
    }

    /// Live clicks per second; only defined while active or finished.
    pub fn clicks_per_second(&self) -> Option<f64> {
        match self.phase {
            ClickSpeedPhase::Active { .. } | ClickSpeedPhase::Finished => {
                clicks_per_second(self.clicks, self.duration_secs, self.time_left)
            }
            ClickSpeedPhase::Waiting | ClickSpeedPhase::Countdown { .. } => None,
        }
    }

    /// Starts the countdown. Also used to retry a finished round.
    pub fn start(&mut self, now: u64) -> bool {
        match self.phase {
            ClickSpeedPhase::Waiting | ClickSpeedPhase::Finished => {
                self.clicks = 0;
                self.time_left = self.duration_secs;
                self.countdown = COUNTDOWN_FROM;
                self.phase = ClickSpeedPhase::Countdown {
                    tick: Interval::starting_at(now, TICK_MS),
                };
                true
            }
            ClickSpeedPhase::Countdown { .. } | ClickSpeedPhase::Active { .. } => false,
        }
    }

    /// Counts a press while active. Starts the countdown from `Waiting`.
    pub fn press(&mut self, now: u64) -> bool {
        match self.phase {
            ClickSpeedPhase::Waiting => self.start(now),
            ClickSpeedPhase::Active { .. } => {
                self.clicks += 1;
                true
            }
            ClickSpeedPhase::Countdown { .. } | ClickSpeedPhase::Finished => false,
        }
    }

    /// Back to `Waiting` with countdown and timer fields at their defaults.
    pub fn reset(&mut self) {
        self.phase = ClickSpeedPhase::Waiting;
        self.clicks = 0;
        self.time_left = self.duration_secs;
        self.countdown = COUNTDOWN_FROM;
    }

    /// Changes the window length. Only allowed between rounds.
    pub fn set_duration(&mut self, secs: u32) -> Result<(), String> {
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&secs) {
            return Err(format!(
                "Duration must be between {} and {} seconds",
                MIN_DURATION_SECS, MAX_DURATION_SECS
            ));
        }
        match self.phase {
            ClickSpeedPhase::Countdown { .. } | ClickSpeedPhase::Active { .. } => {
                Err("Cannot change the duration while a round is running".to_string())
            }
            ClickSpeedPhase::Waiting | ClickSpeedPhase::Finished => {
                self.duration_secs = secs;
                self.reset();
                Ok(())
            }
        }
    }

    /// Cancels the running interval before the game is dropped.
    pub fn teardown(&mut self) {
        if matches!(
            self.phase,
            ClickSpeedPhase::Countdown { .. } | ClickSpeedPhase::Active { .. }
        ) {
            log::debug!("CLICK: Cancelled running interval");
        }
        self.reset();
    }

    fn on_countdown_tick(&mut self, due: u64) {
        if self.countdown <= 1 {
            self.countdown = 0;
            self.time_left = self.duration_secs;
            self.phase = ClickSpeedPhase::Active {
                tick: Interval::starting_at(due, TICK_MS),
            };
            log::debug!("CLICK: Window open for {} s", self.duration_secs);
        } else {
            self.countdown -= 1;
        }
    }

    fn on_active_tick(&mut self, ctx: &mut GameContext) {
        if self.time_left <= 1 {
            self.time_left = 0;
            self.finish(ctx);
        } else {
            self.time_left -= 1;
        }
    }

    fn finish(&mut self, ctx: &mut GameContext) {
        self.phase = ClickSpeedPhase::Finished;
        let score = u64::from(self.clicks);
        self.attempts.push(score);
        ctx.scores.record(GameType::ClickSpeed, score);
        log::info!(
            "CLICK: {} clicks in {} s",
            self.clicks,
            self.duration_secs
        );
    }
}

impl Default for ClickSpeedGame {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl Update for ClickSpeedGame {
    fn update(&mut self, now: u64, ctx: &mut GameContext) {
        loop {
            match &mut self.phase {
                ClickSpeedPhase::Countdown { tick } => {
                    let Some(due) = tick.poll(now) else { break };
                    self.on_countdown_tick(due);
                }
                ClickSpeedPhase::Active { tick } => {
                    if tick.poll(now).is_none() {
                        break;
                    }
                    self.on_active_tick(ctx);
                }
                ClickSpeedPhase::Waiting | ClickSpeedPhase::Finished => break,
            }
        }
    }
}

impl HandleAction for ClickSpeedGame {
    fn handle_action(&mut self, action: &GameAction, now: u64, _ctx: &mut GameContext) -> bool {
        match action {
            GameAction::Press => self.press(now),
            GameAction::Start | GameAction::Retry => self.start(now),
            GameAction::Reset => {
                self.reset();
                true
            }
            _ => false,
        }
    }
}

impl Snapshot for ClickSpeedGame {
    type Output = ClickSpeedSnapshot;

    fn create_snapshot(&self) -> Self::Output {
        let view = match self.phase {
            ClickSpeedPhase::Waiting => ClickSpeedView::Waiting,
            ClickSpeedPhase::Countdown { .. } => ClickSpeedView::Countdown {
                remaining: self.countdown,
            },
            ClickSpeedPhase::Active { .. } => ClickSpeedView::Active {
                time_left: self.time_left,
            },
            ClickSpeedPhase::Finished => ClickSpeedView::Finished {
                rating: ClickRating::from_clicks(u64::from(self.clicks)),
            },
        };

        ClickSpeedSnapshot {
            view,
            clicks: self.clicks,
            duration_secs: self.duration_secs,
            clicks_per_second: self.clicks_per_second(),
            recent: recent(&self.attempts, RECENT_ATTEMPTS).to_vec(),
            summary: self.summary(),
        }
    }
}

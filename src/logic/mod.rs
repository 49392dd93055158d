//! Logic thread module for game state management and updates.
//!
//! This module contains the main loop that runs at a fixed tick rate and
//! coordinates between the input thread and the render side.

pub mod clock;

use crate::database::ScoreStore;
use crate::input::events::{GameAction, StampedAction};
use crate::models::settings::SettingsState;
use crate::state::GlobalState;
use crate::system::bus::{LogicBus, SystemEvent};
use clock::Clock;
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Spawns the logic thread that owns every game and the score store.
///
/// Each tick:
/// 1. Drains input actions, advancing timers to each action's timestamp first
/// 2. Advances timers to the current time
/// 3. Sends a render snapshot if the screen changed
pub fn start_thread(
    bus: LogicBus,
    scores: ScoreStore,
    settings: &SettingsState,
) -> io::Result<JoinHandle<()>> {
    let tick_rate = settings.logic.tick_rate;
    let click_duration = settings.click_speed.duration_secs;

    thread::Builder::new()
        .name("Logic Thread".to_string())
        .spawn(move || {
            log::info!("LOGIC: Thread started ({} TPS)", tick_rate);

            let clock = Clock::new();
            let mut state = GlobalState::new(scores, click_duration);
            let target_dt = Duration::from_secs_f64(1.0 / f64::from(tick_rate));

            let mut last_now = 0;
            let mut last_snapshot = None;
            let mut next_tick = Instant::now();

            loop {
                // 1. Process input actions in arrival order
                while let Ok(stamped) = bus.action_rx.try_recv() {
                    if !apply_action(&mut state, &clock, &mut last_now, &stamped) {
                        let _ = bus.sys_tx.send(SystemEvent::Quit);
                        return;
                    }
                }

                // 2. Fire timers due by now
                let now = clock.now().max(last_now);
                last_now = now;
                state.update(now);

                // 3. Send render snapshot only if something changed
                let snapshot = state.create_snapshot();
                if last_snapshot.as_ref() != Some(&snapshot) {
                    if let Err(e) = bus.render_tx.send(snapshot.clone()) {
                        log::error!("LOGIC: Render side is gone ({}), stopping", e);
                        state.shutdown();
                        return;
                    }
                    last_snapshot = Some(snapshot);
                }

                next_tick += target_dt;
                let current = Instant::now();
                if current < next_tick {
                    thread::sleep(next_tick - current);
                } else {
                    next_tick = current;
                }
            }
        })
}

/// Applies one input action at its own timestamp.
///
/// Timers due before the action fire first, so a press stamped after a tick
/// sees that tick's result. Timestamps never go backwards: an action stamped
/// before `last_now` is applied at `last_now`. Returns `false` on quit.
fn apply_action(
    state: &mut GlobalState,
    clock: &Clock,
    last_now: &mut u64,
    stamped: &StampedAction,
) -> bool {
    let at = clock.millis_at(stamped.at).max(*last_now);
    *last_now = at;
    state.update(at);

    if stamped.action == GameAction::Quit {
        log::info!("LOGIC: Quit received...");
        state.shutdown();
        return false;
    }
    state.handle_action(&stamped.action, at);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ScoreStore;
    use crate::input::events::Screen;
    use crate::shared::snapshot::{ClickSpeedView, RenderState};

    fn stamped(origin: Instant, millis: u64, action: GameAction) -> StampedAction {
        StampedAction {
            action,
            at: origin + Duration::from_millis(millis),
        }
    }

    fn clicks(state: &GlobalState) -> (ClickSpeedView, u32) {
        let RenderState::ClickSpeed(snapshot) = state.create_snapshot().screen else {
            panic!("expected the click-speed screen");
        };
        (snapshot.view, snapshot.clicks)
    }

    #[test]
    fn test_due_ticks_fire_before_the_action() {
        let origin = Instant::now();
        let clock = Clock::from_origin(origin);
        let mut state = GlobalState::new(ScoreStore::in_memory(), 10);
        let mut last_now = 0;

        for action in [GameAction::Open(Screen::ClickSpeed), GameAction::Start] {
            assert!(apply_action(&mut state, &clock, &mut last_now, &stamped(origin, 0, action)));
        }

        // The countdown ended at 3000 without any tick of the loop noticing.
        let press = stamped(origin, 3_500, GameAction::Press);
        assert!(apply_action(&mut state, &clock, &mut last_now, &press));
        assert_eq!(last_now, 3_500);
        assert_eq!(clicks(&state), (ClickSpeedView::Active { time_left: 10 }, 1));
    }

    #[test]
    fn test_out_of_order_action_is_clamped() {
        let origin = Instant::now();
        let clock = Clock::from_origin(origin);
        let mut state = GlobalState::new(ScoreStore::in_memory(), 10);
        let mut last_now = 0;

        for (millis, action) in [
            (0, GameAction::Open(Screen::ClickSpeed)),
            (0, GameAction::Start),
            (3_500, GameAction::Press),
            // Stamped before the previous press, and before the window opened.
            (1_000, GameAction::Press),
        ] {
            assert!(apply_action(&mut state, &clock, &mut last_now, &stamped(origin, millis, action)));
        }

        assert_eq!(last_now, 3_500);
        assert_eq!(clicks(&state).1, 2);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let origin = Instant::now();
        let clock = Clock::from_origin(origin);
        let mut state = GlobalState::new(ScoreStore::in_memory(), 10);
        let mut last_now = 0;

        let open = stamped(origin, 0, GameAction::Open(Screen::Reaction));
        assert!(apply_action(&mut state, &clock, &mut last_now, &open));
        let quit = stamped(origin, 10, GameAction::Quit);
        assert!(!apply_action(&mut state, &clock, &mut last_now, &quit));
        assert_eq!(last_now, 10);
    }
}

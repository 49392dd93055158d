//! Input thread: reads terminal lines and forwards them as stamped actions.

pub mod events;
pub mod manager;

use crate::input::events::{GameAction, StampedAction};
use crate::input::manager::{HELP, InputManager};
use crate::system::bus::InputBus;
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

pub fn start_thread(bus: InputBus, manager: InputManager) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("Input Thread".to_string())
        .spawn(move || {
            log::info!("INPUT: Thread started");

            // Blocking loop: one line in, at most one action out.
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("INPUT: Failed to read stdin: {}", e);
                        break;
                    }
                };

                if matches!(line.trim(), "help" | "h" | "?") {
                    println!("{HELP}");
                    continue;
                }

                match manager.process(&line) {
                    Ok(action) => {
                        let quit = action == GameAction::Quit;
                        if let Err(e) = bus.action_tx.send(StampedAction::now(action)) {
                            log::error!("INPUT: Failed to send action (Logic thread died?): {}", e);
                            return;
                        }
                        if quit {
                            return;
                        }
                    }
                    Err(e) => log::warn!("INPUT: {}", e),
                }
            }

            // Closed stdin ends the session.
            let _ = bus.action_tx.send(StampedAction::now(GameAction::Quit));
            log::info!("INPUT: Thread stopped");
        })
}

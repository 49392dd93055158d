//! Application entry point and thread bootstrapper.

mod database;
mod input;
mod logic;
mod models;
mod render;
mod server;
mod shared;
mod state;
mod system;

use crate::database::{ScoreStore, open_backend};
use crate::models::settings::SettingsState;
use crate::system::bus::SystemBus;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("MAIN: Booting ReactionGames...");

    let settings = SettingsState::load();
    let scores = ScoreStore::open(open_backend(&settings.storage));

    let (input_bus, logic_bus, render_bus) = SystemBus::new().split();

    if settings.server.enabled
        && let Err(e) = server::start_thread(settings.server.bind_address.clone())
    {
        log::error!("MAIN: Failed to spawn HTTP thread: {}", e);
    }

    let input_manager = input::manager::InputManager::new();
    if let Err(e) = input::start_thread(input_bus, input_manager) {
        log::error!("MAIN: Failed to spawn Input thread: {}", e);
        process::exit(1);
    }

    let logic = match logic::start_thread(logic_bus, scores, &settings) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("MAIN: Failed to spawn Logic thread: {}", e);
            process::exit(1);
        }
    };

    render::run(render_bus);

    if logic.join().is_err() {
        log::error!("MAIN: Logic thread panicked");
    }
    log::info!("MAIN: Bye");
}

use super::events::{GameAction, Screen};

/// Turns terminal lines into game actions.
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Parses one line. Returns `Err` with a hint for unknown commands.
    ///
    /// An empty line is the game button, so a player can just hit Enter.
    pub fn process(&self, line: &str) -> Result<GameAction, String> {
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        let action = match command.to_ascii_lowercase().as_str() {
            "" | "c" | "click" | "press" => GameAction::Press,
            "start" | "s" => GameAction::Start,
            "retry" | "r" => GameAction::Retry,
            "reset" => GameAction::Reset,
            "duration" => GameAction::SetDuration(parse_duration(rest)?),
            "reaction" | "rt" => GameAction::Open(Screen::Reaction),
            "clickspeed" | "cs" => GameAction::Open(Screen::ClickSpeed),
            "dashboard" | "stats" => GameAction::Open(Screen::Dashboard),
            "menu" => GameAction::Open(Screen::Menu),
            "back" | "b" => GameAction::Back,
            "login" => GameAction::Login {
                username: rest.to_string(),
            },
            "logout" => GameAction::Logout,
            "quit" | "q" | "exit" => GameAction::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help' for the list.")),
        };
        Ok(action)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_duration(value: &str) -> Result<u32, String> {
    let value = value.trim_end_matches('s');
    value
        .parse::<u32>()
        .map_err(|_| "Duration must be a whole number of seconds".to_string())
}

pub const HELP: &str = "\
Commands:
  <enter> / click     press the game button
  start / retry / reset
  duration <secs>     click-speed window length
  reaction / clickspeed / dashboard / menu / back
  login <name> / logout
  quit";

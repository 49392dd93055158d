//! Data structures mirroring the persisted store layout.
//!
//! The whole store is serialized as one JSON document:
//! `{ "activeUser": .., "users": { name: { "reactionTime": [..], "clickSpeed": [..] } } }`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which game a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameType {
    /// Milliseconds between the go signal and the press.
    ReactionTime,
    /// Presses counted inside the timed window.
    ClickSpeed,
}

impl GameType {
    /// Key used in the persisted layout.
    pub fn key(self) -> &'static str {
        match self {
            GameType::ReactionTime => "reactionTime",
            GameType::ClickSpeed => "clickSpeed",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Score lists of one user, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(default)]
    pub reaction_time: Vec<u64>,
    #[serde(default)]
    pub click_speed: Vec<u64>,
}

impl Scores {
    pub fn list(&self, game: GameType) -> &[u64] {
        match game {
            GameType::ReactionTime => &self.reaction_time,
            GameType::ClickSpeed => &self.click_speed,
        }
    }

    /// Appends a result to the list of `game`. Lists are never rewritten.
    pub fn push(&mut self, game: GameType, score: u64) {
        match game {
            GameType::ReactionTime => self.reaction_time.push(score),
            GameType::ClickSpeed => self.click_speed.push(score),
        }
    }
}

/// Full persisted state of the score store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub active_user: Option<String>,
    #[serde(default)]
    pub users: BTreeMap<String, Scores>,
}

impl StoreState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

//! Score store service: every user's score lists plus the active-user pointer.
//!
//! All operations are synchronous. Each mutation writes the full state through
//! the storage port; a failed write is logged and the in-memory state is kept.

use super::error::StorageError;
use super::models::{GameType, Scores, StoreState};
use super::storage::BlobStorage;

/// Key the store is saved under.
pub const STORE_NAME: &str = "reaction-games-store";

pub struct ScoreStore {
    state: StoreState,
    storage: Box<dyn BlobStorage + Send>,
}

impl ScoreStore {
    /// Restores the store from `storage`, or starts empty if nothing usable is saved.
    pub fn open(storage: Box<dyn BlobStorage + Send>) -> Self {
        let state = match storage.load(STORE_NAME) {
            Ok(Some(blob)) => match StoreState::from_json(&blob) {
                Ok(state) => {
                    log::info!(
                        "STORE: Restored {} user(s), active user: {:?}",
                        state.users.len(),
                        state.active_user
                    );
                    state
                }
                Err(e) => {
                    log::warn!("STORE: Saved state is unreadable ({}), starting empty", e);
                    StoreState::default()
                }
            },
            Ok(None) => StoreState::default(),
            Err(e) => {
                log::error!("STORE: Failed to load saved state: {}", e);
                StoreState::default()
            }
        };

        Self { state, storage }
    }

    /// Empty store that lives only in memory.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::open(Box::new(super::storage::MemoryStorage::new()))
    }

    /// Inserts a user record. An existing record under the same name is replaced.
    pub fn add_user(&mut self, username: &str, scores: Scores) {
        self.state.users.insert(username.to_string(), scores);
        self.persist();
    }

    pub fn get_user(&self, username: &str) -> Option<&Scores> {
        self.state.users.get(username)
    }

    /// Points the active user at `username`. The record does not have to exist.
    pub fn set_active_user(&mut self, username: &str) {
        self.state.active_user = Some(username.to_string());
        self.persist();
    }

    pub fn active_user(&self) -> Option<&str> {
        self.state.active_user.as_deref()
    }

    /// Appends `score` to the `game` list of `username`. Unknown users are ignored.
    pub fn update_score(&mut self, username: &str, game: GameType, score: u64) {
        let Some(scores) = self.state.users.get_mut(username) else {
            log::debug!(
                "STORE: Ignoring {} score {} for unknown user {:?}",
                game,
                score,
                username
            );
            return;
        };
        scores.push(game, score);
        self.persist();
    }

    /// Records a finished game for the active user, if one is signed in.
    pub fn record(&mut self, game: GameType, score: u64) {
        if let Some(username) = self.state.active_user.clone() {
            self.update_score(&username, game, score);
        }
    }

    /// Back to the initial empty shape: no active user, no users.
    pub fn reset(&mut self) {
        self.state = StoreState::default();
        self.persist();
    }

    #[cfg(test)]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    fn persist(&mut self) {
        if let Err(e) = self.write_through() {
            log::error!("STORE: Failed to save state: {}", e);
        }
    }

    fn write_through(&mut self) -> Result<(), StorageError> {
        let blob = self.state.to_json()?;
        self.storage.save(STORE_NAME, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Storage double that counts saves and can be inspected after the store took ownership.
    #[derive(Clone, Default)]
    struct SharedStorage {
        blobs: Arc<Mutex<Vec<String>>>,
    }

    impl BlobStorage for SharedStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.blobs.lock().unwrap().last().cloned())
        }

        fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
            assert_eq!(key, STORE_NAME);
            self.blobs.lock().unwrap().push(blob.to_string());
            Ok(())
        }
    }

    struct FailingStorage;

    impl BlobStorage for FailingStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::other("disk gone").into())
        }

        fn save(&mut self, _key: &str, _blob: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk gone").into())
        }
    }

    #[test]
    fn test_add_update_get() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        store.update_score("alice", GameType::ReactionTime, 250);

        let scores = store.get_user("alice").unwrap();
        assert_eq!(scores.reaction_time, vec![250]);
        assert!(scores.click_speed.is_empty());
    }

    #[test]
    fn test_get_user_is_idempotent() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        store.update_score("alice", GameType::ClickSpeed, 42);

        let first = store.get_user("alice").cloned();
        let second = store.get_user("alice").cloned();
        assert_eq!(first, second);
        assert!(store.get_user("nobody").is_none());
    }

    #[test]
    fn test_updates_append_in_order() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        for score in [300, 210, 260] {
            store.update_score("alice", GameType::ReactionTime, score);
        }
        assert_eq!(store.get_user("alice").unwrap().reaction_time, vec![300, 210, 260]);
    }

    #[test]
    fn test_update_unknown_user_is_noop() {
        let storage = SharedStorage::default();
        let mut store = ScoreStore::open(Box::new(storage.clone()));
        store.update_score("ghost", GameType::ClickSpeed, 10);

        assert!(store.state().users.is_empty());
        assert!(storage.blobs.lock().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_add_user_overwrites() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        store.update_score("alice", GameType::ReactionTime, 250);
        store.add_user("alice", Scores::default());

        assert_eq!(store.get_user("alice"), Some(&Scores::default()));
    }

    #[test]
    fn test_set_active_user_without_record() {
        let mut store = ScoreStore::in_memory();
        store.set_active_user("carol");
        assert_eq!(store.active_user(), Some("carol"));
        assert!(store.get_user("carol").is_none());

        // Recording for an active user without a record does nothing.
        store.record(GameType::ReactionTime, 200);
        assert!(store.state().users.is_empty());
    }

    #[test]
    fn test_record_targets_active_user() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        store.add_user("bob", Scores::default());
        store.set_active_user("bob");
        store.record(GameType::ClickSpeed, 55);

        assert_eq!(store.get_user("bob").unwrap().click_speed, vec![55]);
        assert!(store.get_user("alice").unwrap().click_speed.is_empty());
    }

    #[test]
    fn test_record_without_active_user() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        store.record(GameType::ClickSpeed, 55);
        assert!(store.get_user("alice").unwrap().click_speed.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = ScoreStore::in_memory();
        store.add_user("alice", Scores::default());
        store.add_user("bob", Scores::default());
        store.set_active_user("alice");
        store.update_score("alice", GameType::ReactionTime, 250);

        store.reset();
        assert_eq!(store.active_user(), None);
        assert!(store.state().users.is_empty());
    }

    #[test]
    fn test_every_mutation_saves_full_state() {
        let storage = SharedStorage::default();
        let mut store = ScoreStore::open(Box::new(storage.clone()));
        store.add_user("alice", Scores::default());
        store.set_active_user("alice");
        store.update_score("alice", GameType::ReactionTime, 250);
        store.reset();

        let blobs = storage.blobs.lock().unwrap();
        assert_eq!(blobs.len(), 4);
        assert_eq!(
            blobs[2],
            r#"{"activeUser":"alice","users":{"alice":{"reactionTime":[250],"clickSpeed":[]}}}"#
        );
        assert_eq!(blobs[3], r#"{"activeUser":null,"users":{}}"#);
    }

    #[test]
    fn test_state_survives_reopen() {
        let storage = SharedStorage::default();
        {
            let mut store = ScoreStore::open(Box::new(storage.clone()));
            store.add_user("alice", Scores::default());
            store.set_active_user("alice");
            store.record(GameType::ClickSpeed, 61);
        }

        let store = ScoreStore::open(Box::new(storage));
        assert_eq!(store.active_user(), Some("alice"));
        assert_eq!(store.get_user("alice").unwrap().click_speed, vec![61]);
    }

    #[test]
    fn test_unreadable_blob_starts_empty() {
        let storage = SharedStorage::default();
        storage.blobs.lock().unwrap().push("not json".to_string());
        let store = ScoreStore::open(Box::new(storage));
        assert_eq!(store.state(), &StoreState::default());
    }

    #[test]
    fn test_failing_storage_keeps_memory_state() {
        let mut store = ScoreStore::open(Box::new(FailingStorage));
        store.add_user("alice", Scores::default());
        store.update_score("alice", GameType::ReactionTime, 199);
        assert_eq!(store.get_user("alice").unwrap().reaction_time, vec![199]);
    }
}

//! Sign-in and sign-out on top of the score store.

use crate::database::ScoreStore;

/// Signs `username` in, registering it first if needed.
///
/// Existing scores are re-added as they are, so signing in again never loses history.
pub fn login(store: &mut ScoreStore, username: &str) -> Result<(), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Please fill in all fields".to_string());
    }

    let scores = store.get_user(username).cloned().unwrap_or_default();
    store.add_user(username, scores);
    store.set_active_user(username);
    log::info!("SESSION: Signed in as '{}'", username);
    Ok(())
}

/// Signs out. This clears the whole store.
pub fn logout(store: &mut ScoreStore) {
    if let Some(user) = store.active_user() {
        log::info!("SESSION: '{}' signed out", user);
    }
    store.reset();
}

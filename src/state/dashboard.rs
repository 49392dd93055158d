//! Per-user views built from the score store: the dashboard and the menu bests.

use crate::database::{GameType, ScoreStore, Scores};
use crate::models::stats::{AttemptSummary, ClickRating, DASHBOARD_RECENT, ReactionRating, recent};
use crate::shared::snapshot::{DashboardSnapshot, GameStats, MenuSnapshot};

/// Builds the dashboard for the active user, or `None` if nobody is signed in.
pub fn build(store: &ScoreStore) -> Option<DashboardSnapshot> {
    let username = store.active_user()?;
    let empty = Scores::default();
    let scores = store.get_user(username).unwrap_or(&empty);

    let reaction_list = scores.list(GameType::ReactionTime);
    let reaction = AttemptSummary::reaction(reaction_list);
    let click_list = scores.list(GameType::ClickSpeed);
    let click_speed = AttemptSummary::click_speed(click_list);

    Some(DashboardSnapshot {
        username: username.to_string(),
        reaction: GameStats {
            summary: reaction,
            recent: recent(reaction_list, DASHBOARD_RECENT).to_vec(),
            rating: reaction
                .best
                .map(|best| ReactionRating::from_millis(best).label()),
        },
        click_speed: GameStats {
            summary: click_speed,
            recent: recent(click_list, DASHBOARD_RECENT).to_vec(),
            rating: click_speed
                .best
                .map(|best| ClickRating::from_clicks(best).label()),
        },
    })
}

/// Best reaction and most clicks of the active user. Empty for guests.
pub fn menu(store: &ScoreStore) -> MenuSnapshot {
    let Some(scores) = store.active_user().and_then(|user| store.get_user(user)) else {
        return MenuSnapshot::default();
    };

    MenuSnapshot {
        best_reaction: scores.list(GameType::ReactionTime).iter().copied().min(),
        most_clicks: scores.list(GameType::ClickSpeed).iter().copied().max(),
    }
}

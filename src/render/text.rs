//! Turns frame snapshots into terminal lines.

use crate::models::stats::AttemptSummary;
use crate::shared::snapshot::{
    ClickSpeedSnapshot, ClickSpeedView, DashboardSnapshot, FrameSnapshot, GameStats,
    MenuSnapshot, ReactionSnapshot, ReactionView, RenderState,
};

const SIGN_IN_HINT: &str = "Sign in to save your scores and track your progress over time!";

pub fn render_frame(frame: &FrameSnapshot) -> Vec<String> {
    let mut lines = Vec::new();

    let who = match &frame.active_user {
        Some(user) => format!("signed in as {user}"),
        None => "guest".to_string(),
    };
    lines.push(format!("== ReactionGames == [{who}]"));
    if let Some(notice) = &frame.notice {
        lines.push(format!("! {notice}"));
    }

    let guest = frame.active_user.is_none();
    match &frame.screen {
        RenderState::Menu(bests) => menu(&mut lines, bests, guest),
        RenderState::Reaction(snapshot) => reaction(&mut lines, snapshot, guest),
        RenderState::ClickSpeed(snapshot) => click_speed(&mut lines, snapshot, guest),
        RenderState::Dashboard(Some(dashboard)) => dashboard_lines(&mut lines, dashboard),
        RenderState::Dashboard(None) => {
            lines.push("Your Dashboard".to_string());
            lines.push("Please Sign in first".to_string());
        }
    }
    lines
}

fn menu(lines: &mut Vec<String>, bests: &MenuSnapshot, guest: bool) {
    lines.push("Test Your Reflexes".to_string());
    lines.push("  reaction    Reaction Time Test".to_string());
    if let Some(best) = bests.best_reaction {
        lines.push(format!("              Best: {best}ms"));
    }
    lines.push("  clickspeed  Click Speed Test".to_string());
    if let Some(best) = bests.most_clicks {
        lines.push(format!("              Best: {best} clicks"));
    }
    lines.push("  dashboard   Your Dashboard".to_string());
    if guest {
        lines.push("Type 'login <name>' to save your scores, 'help' for all commands.".to_string());
    }
}

fn reaction(lines: &mut Vec<String>, snapshot: &ReactionSnapshot, guest: bool) {
    lines.push("Reaction Time Test".to_string());

    let button = match snapshot.view {
        ReactionView::Waiting => "Click to Start".to_string(),
        ReactionView::Ready => "Wait for Red...".to_string(),
        ReactionView::Active => "CLICK NOW!".to_string(),
        ReactionView::Clicked { reaction_ms, .. } => format!("{reaction_ms}ms"),
        ReactionView::TooEarly => "Too Early!".to_string(),
    };
    lines.push(format!("[ {button} ]"));

    match snapshot.view {
        ReactionView::Ready => lines
            .push("Wait for the button to turn red, then click as fast as you can!".to_string()),
        ReactionView::TooEarly => {
            lines.push("You clicked too early!".to_string());
            lines.push("Wait for the button to turn red before clicking.".to_string());
        }
        ReactionView::Clicked { rating, .. } => lines.push(rating.verdict().to_string()),
        ReactionView::Waiting | ReactionView::Active => {}
    }
    if matches!(
        snapshot.view,
        ReactionView::Clicked { .. } | ReactionView::TooEarly
    ) {
        lines.push("retry: Try Again | reset: Reset".to_string());
    }

    if snapshot.summary.count > 0 {
        statistics(lines, &snapshot.summary, &snapshot.recent, "Best Time", "ms");
        if guest {
            lines.push(SIGN_IN_HINT.to_string());
        }
    }
}

fn click_speed(lines: &mut Vec<String>, snapshot: &ClickSpeedSnapshot, guest: bool) {
    lines.push("Click Speed Test".to_string());

    let button = match snapshot.view {
        ClickSpeedView::Waiting => "Start Test".to_string(),
        ClickSpeedView::Countdown { remaining } => remaining.to_string(),
        ClickSpeedView::Active { .. } => format!("{} clicks", snapshot.clicks),
        ClickSpeedView::Finished { .. } => format!("Final: {}", snapshot.clicks),
    };
    lines.push(format!("[ {button} ]"));

    match snapshot.view {
        ClickSpeedView::Waiting => lines.push(format!(
            "Duration: {}s (type 'duration <secs>' to change)",
            snapshot.duration_secs
        )),
        ClickSpeedView::Countdown { .. } => {
            lines.push("Get ready to click as fast as you can!".to_string())
        }
        ClickSpeedView::Active { time_left } => {
            lines.push(format!("{time_left}s"));
            match snapshot.clicks_per_second {
                Some(cps) => lines.push(format!("Keep clicking! {cps} clicks/sec")),
                None => lines.push("Keep clicking!".to_string()),
            }
        }
        ClickSpeedView::Finished { rating } => {
            lines.push(format!("{} clicks", snapshot.clicks));
            if let Some(cps) = snapshot.clicks_per_second {
                lines.push(format!("{cps} clicks per second"));
            }
            lines.push(rating.verdict().to_string());
            lines.push("retry: Try Again | reset: Change Settings".to_string());
        }
    }

    if snapshot.summary.count > 0 {
        statistics(lines, &snapshot.summary, &snapshot.recent, "Best Score", "");
        if guest {
            lines.push(SIGN_IN_HINT.to_string());
        }
    }
}

fn statistics(
    lines: &mut Vec<String>,
    summary: &AttemptSummary,
    recent: &[u64],
    best_label: &str,
    unit: &str,
) {
    lines.push("Your Statistics".to_string());
    lines.push(format!(
        "Attempts: {}  {}: {}  Average: {}",
        summary.count,
        best_label,
        with_unit(summary.best, unit),
        average(summary.average, unit)
    ));
    lines.push(format!("Recent Attempts: {}", join(recent, unit_or_clicks(unit))));
}

fn dashboard_lines(lines: &mut Vec<String>, dashboard: &DashboardSnapshot) {
    lines.push(format!("Your Dashboard ({})", dashboard.username));

    game_block(lines, "Reaction Time", &dashboard.reaction, "ms");
    game_block(lines, "Click Speed", &dashboard.click_speed, "");

    let reaction = &dashboard.reaction.summary;
    let clicks = &dashboard.click_speed.summary;
    lines.push("Overall Progress".to_string());
    lines.push(format!(
        "Total Games: {}  Fastest Reaction: {}  Most Clicks: {}",
        reaction.count + clicks.count,
        with_unit(reaction.best, "ms"),
        with_unit(clicks.best, "")
    ));
}

fn game_block(lines: &mut Vec<String>, title: &str, stats: &GameStats, unit: &str) {
    lines.push(title.to_string());
    if stats.summary.count == 0 {
        lines.push("  No scores found".to_string());
        return;
    }
    lines.push(format!(
        "  Tests: {}  Best: {}  Average: {}  Rating: {}",
        stats.summary.count,
        with_unit(stats.summary.best, unit),
        average(stats.summary.average, unit),
        stats.rating.unwrap_or("-")
    ));
    lines.push(format!(
        "  Recent Results: {}",
        join(&stats.recent, unit_or_clicks(unit))
    ));
}

fn with_unit(value: Option<u64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value}{unit}"),
        None => "-".to_string(),
    }
}

fn average(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value}{unit}"),
        None => "-".to_string(),
    }
}

fn unit_or_clicks(unit: &str) -> &str {
    if unit.is_empty() { " clicks" } else { unit }
}

fn join(values: &[u64], suffix: &str) -> String {
    values
        .iter()
        .map(|value| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(", ")
}

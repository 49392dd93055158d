//! Aggregate statistics and ratings over score lists.
//!
//! Nothing here is stored: every value is derived from the attempt lists on demand.

/// Number of attempts shown under a running game.
pub const RECENT_ATTEMPTS: usize = 10;
/// Number of results shown per game on the dashboard.
pub const DASHBOARD_RECENT: usize = 5;

/// Count, best and average of a list of attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttemptSummary {
    pub count: usize,
    pub best: Option<u64>,
    pub average: Option<f64>,
}

impl AttemptSummary {
    /// Reaction times: lower is better, average rounded to whole milliseconds.
    pub fn reaction(attempts: &[u64]) -> Self {
        Self {
            count: attempts.len(),
            best: attempts.iter().copied().min(),
            average: mean(attempts).map(f64::round),
        }
    }

    /// Click counts: higher is better, average rounded to one decimal.
    pub fn click_speed(attempts: &[u64]) -> Self {
        Self {
            count: attempts.len(),
            best: attempts.iter().copied().max(),
            average: mean(attempts).map(round_to_tenth),
        }
    }
}

fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: u64 = values.iter().sum();
    Some(total as f64 / values.len() as f64)
}

/// Rounds to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The last `n` entries, oldest first.
pub fn recent(attempts: &[u64], n: usize) -> &[u64] {
    &attempts[attempts.len().saturating_sub(n)..]
}

/// Clicks per second over the elapsed part of the window, rounded to one decimal.
///
/// Undefined until a full second has elapsed.
pub fn clicks_per_second(clicks: u32, duration_secs: u32, time_left_secs: u32) -> Option<f64> {
    let elapsed = duration_secs.saturating_sub(time_left_secs);
    if elapsed == 0 {
        return None;
    }
    Some(round_to_tenth(clicks as f64 / elapsed as f64))
}

/// Verdict on a reaction time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionRating {
    Excellent,
    Good,
    Average,
    NeedsPractice,
}

impl ReactionRating {
    pub fn from_millis(ms: u64) -> Self {
        match ms {
            0..200 => ReactionRating::Excellent,
            200..300 => ReactionRating::Good,
            300..400 => ReactionRating::Average,
            _ => ReactionRating::NeedsPractice,
        }
    }

    /// Wording under a fresh result.
    pub fn verdict(self) -> &'static str {
        match self {
            ReactionRating::Excellent => "Excellent!",
            ReactionRating::Good => "Good!",
            ReactionRating::Average => "Average",
            ReactionRating::NeedsPractice => "Keep practicing!",
        }
    }

    /// Wording on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            ReactionRating::Excellent => "Excellent",
            ReactionRating::Good => "Good",
            ReactionRating::Average => "Average",
            ReactionRating::NeedsPractice => "Needs Practice",
        }
    }
}

/// Verdict on a click count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRating {
    LightningFast,
    Excellent,
    Good,
    NotBad,
    KeepPracticing,
}

impl ClickRating {
    pub fn from_clicks(clicks: u64) -> Self {
        match clicks {
            80.. => ClickRating::LightningFast,
            60..80 => ClickRating::Excellent,
            40..60 => ClickRating::Good,
            20..40 => ClickRating::NotBad,
            _ => ClickRating::KeepPracticing,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ClickRating::LightningFast => "Lightning fast!",
            ClickRating::Excellent => "Excellent!",
            ClickRating::Good => "Good job!",
            ClickRating::NotBad => "Not bad!",
            ClickRating::KeepPracticing => "Keep practicing!",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClickRating::LightningFast => "Lightning Fast",
            ClickRating::Excellent => "Excellent",
            ClickRating::Good => "Good",
            ClickRating::NotBad => "Average",
            ClickRating::KeepPracticing => "Keep Practicing",
        }
    }
}

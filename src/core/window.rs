use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Window used when a range token is not recognised.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest window a range token can ask for (about a century).
pub const MAX_WINDOW_DAYS: u32 = 36_525;

static DAY_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex"));

/// How the start of a window is placed relative to "now".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CutoffMode {
    /// Exactly N days before the current instant.
    #[default]
    Rolling,
    /// Local midnight N days before today.
    Midnight,
}

impl std::fmt::Display for CutoffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rolling => write!(f, "rolling"),
            Self::Midnight => write!(f, "midnight"),
        }
    }
}

impl FromStr for CutoffMode {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "rolling" => Ok(Self::Rolling),
            "midnight" => Ok(Self::Midnight),
            _ => anyhow::bail!("invalid cutoff mode: {} (expected rolling/midnight)", s),
        }
    }
}

/// Map a range token (`D`, `W`, `M`, `6M`, `Y` or a day count) to a number of days.
pub fn range_token_to_days(token: &str) -> u32 {
    let token = token.trim();
    match token.to_ascii_uppercase().as_str() {
        "D" => 1,
        "W" => 7,
        "M" => 30,
        "6M" => 180,
        "Y" => 365,
        _ => match token.parse::<u32>() {
            Ok(n) if (1..=MAX_WINDOW_DAYS).contains(&n) => n,
            _ => DEFAULT_WINDOW_DAYS,
        },
    }
}

/// `YYYY-MM-DD` key for a calendar day.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverse of [`day_key`]. Rejects anything that is not a zero-padded real date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    if !DAY_KEY_RE.is_match(key) {
        return None;
    }
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Local midnight at the start of `date`.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Earliest instant still inside a window of `days` ending at `now`.
///
/// Saturates to the earliest representable instant for huge windows.
pub fn cutoff(now: NaiveDateTime, days: u32, mode: CutoffMode) -> NaiveDateTime {
    let span = Days::new(days as u64);
    let start = match mode {
        CutoffMode::Rolling => now.checked_sub_days(span),
        CutoffMode::Midnight => now.date().checked_sub_days(span).map(day_start),
    };
    start.unwrap_or(NaiveDateTime::MIN)
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of the last three entries against the three before them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Improving => "↗",
            Self::Declining => "↘",
            Self::Stable => "→",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improving => write!(f, "improving"),
            Self::Declining => write!(f, "declining"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
}

impl ScoreBreakdown {
    pub fn record(&mut self, score: i64) {
        match score {
            s if s < 0 => self.negative += 1,
            0 => self.neutral += 1,
            _ => self.positive += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.negative + self.neutral + self.positive
    }
}

/// Summary statistics over one time window.
///
/// Numeric fields keep full precision for threshold logic; the `*_display`
/// fields carry the rounded text shown to the user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsSnapshot {
    pub window_days: u32,
    pub total_entries: usize,
    pub avg_score: f64,
    pub avg_score_display: String,
    pub avg_weight: Option<f64>,
    pub avg_weight_display: String,
    pub weight_change: f64,
    pub weight_change_display: String,
    pub score_breakdown: ScoreBreakdown,
    pub recent_trend: Trend,
    pub completion_pct: f64,
}

impl StatsSnapshot {
    /// Snapshot for a window with no entries.
    pub fn empty(window_days: u32) -> Self {
        Self {
            window_days,
            total_entries: 0,
            avg_score: 0.0,
            avg_score_display: format_score(0.0),
            avg_weight: None,
            avg_weight_display: format_weight(None),
            weight_change: 0.0,
            weight_change_display: format!("{:.1}", 0.0),
            score_breakdown: ScoreBreakdown::default(),
            recent_trend: Trend::Stable,
            completion_pct: 0.0,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.avg_score)
    }
}

pub fn format_score(avg: f64) -> String {
    format!("{:.2}", avg)
}

pub fn format_weight(avg: Option<f64>) -> String {
    match avg {
        Some(w) => format!("{:.1}", w),
        None => "N/A".to_string(),
    }
}

/// Coarse rating of an average score, used to pick display colors.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Neutral,
    Poor,
    Bad,
}

impl ScoreBand {
    pub fn from_score(avg: f64) -> Self {
        match avg {
            a if a >= 0.75 => Self::Excellent,
            a if a >= 0.25 => Self::Good,
            a if a >= -0.25 => Self::Neutral,
            a if a >= -0.75 => Self::Poor,
            _ => Self::Bad,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Good => write!(f, "good"),
            Self::Neutral => write!(f, "neutral"),
            Self::Poor => write!(f, "poor"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// One day of the chart series.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub score: i64,
    pub has_entry: bool,
}

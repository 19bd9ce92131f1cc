use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::window::{day_key, parse_day_key};

/// Lowest and highest vibe score a user can pick.
pub const MIN_SCORE: i64 = -2;
pub const MAX_SCORE: i64 = 2;

/// Upper bound on a plausible body weight, in the user's unit.
pub const MAX_WEIGHT: f64 = 1000.0;

/// One logged day.
///
/// Decoding is lenient: a field holding the wrong JSON type is read as
/// missing instead of failing the whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub date: String,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub exercise: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recovery: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl Entry {
    /// A blank entry for `date` with a neutral score.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: day_key(date),
            score: Some(0),
            timestamp: Some(Utc::now().to_rfc3339()),
            ..Self::default()
        }
    }

    /// Calendar day of this entry, or `None` when the key is malformed.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day_key(&self.date)
    }

    /// Score with the zero fallback applied.
    pub fn score_value(&self) -> i64 {
        coerce_score(self.score)
    }

    /// Weight as a number, if one was recorded and parses.
    pub fn weight_value(&self) -> Option<f64> {
        coerce_weight(self.weight.as_deref())
    }

    /// Check the entry the way the entry form does before saving.
    pub fn validate(&self) -> anyhow::Result<()> {
        if parse_day_key(&self.date).is_none() {
            anyhow::bail!("invalid date: {} (expected YYYY-MM-DD)", self.date);
        }

        if let Some(raw) = non_empty(self.weight.as_deref()) {
            let Some(w) = coerce_weight(Some(raw)) else {
                anyhow::bail!("invalid weight: {}", raw);
            };
            if w <= 0.0 || w > MAX_WEIGHT {
                anyhow::bail!("weight must be between 0 and {} (got {})", MAX_WEIGHT, w);
            }
        }

        if let Some(s) = self.score
            && !(MIN_SCORE..=MAX_SCORE).contains(&s)
        {
            anyhow::bail!(
                "score must be between {} and {} (got {})",
                MIN_SCORE,
                MAX_SCORE,
                s
            );
        }

        let has_content = [
            self.weight.as_deref(),
            self.exercise.as_deref(),
            self.diet.as_deref(),
            self.recovery.as_deref(),
        ]
        .into_iter()
        .any(|f| non_empty(f).is_some());
        if !has_content {
            anyhow::bail!("empty entry: fill in at least one of weight, exercise, diet, recovery");
        }

        Ok(())
    }
}

/// Numeric score with missing values read as neutral.
pub fn coerce_score(score: Option<i64>) -> i64 {
    score.unwrap_or(0)
}

/// Parse a recorded weight. Empty, unparseable and non-finite values yield `None`.
pub fn coerce_weight(weight: Option<&str>) -> Option<f64> {
    let raw = non_empty(weight)?;
    raw.parse::<f64>().ok().filter(|w| w.is_finite())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// 2^53: every whole float up to this magnitude converts to `i64` exactly.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        // Whole floats inside the exactly representable range only; anything
        // else (fractions, 1e20, u64 beyond i64) reads as missing.
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

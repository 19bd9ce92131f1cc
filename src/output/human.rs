use colored::{ColoredString, Colorize};
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::tags::TagField;
use crate::db::StorageHealth;
use crate::models::Entry;
use crate::models::stats::{DailyPoint, ScoreBand, StatsSnapshot};

fn paint(text: &str, band: ScoreBand) -> ColoredString {
    match band {
        ScoreBand::Excellent => text.green(),
        ScoreBand::Good => text.bright_green(),
        ScoreBand::Neutral => text.yellow(),
        ScoreBand::Poor => text.bright_red(),
        ScoreBand::Bad => text.red(),
    }
}

fn signed(score: i64) -> String {
    if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}

/// One-line summary of an entry.
pub fn format_entry(e: &Entry, weight_unit: &str) -> String {
    let score = e.score_value();
    let mut line = format!(
        "{} | vibe {}",
        e.date,
        paint(&signed(score), ScoreBand::from_score(score as f64))
    );
    if let Some(w) = e.weight_value() {
        line.push_str(&format!(" | {} {}", w, weight_unit));
    }
    for (label, value) in [
        ("exercise", &e.exercise),
        ("diet", &e.diet),
        ("recovery", &e.recovery),
    ] {
        if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            line.push_str(&format!("\n  {}: {}", label, v));
        }
    }
    if let Some(c) = e.comments.as_deref().filter(|c| !c.trim().is_empty()) {
        line.push_str(&format!("\n  # {}", c));
    }
    line
}

/// Table of entries, one row per day.
pub fn format_entries_table(entries: &[Entry], weight_unit: &str) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "date".to_string(),
        "vibe".to_string(),
        format!("weight ({})", weight_unit),
        "exercise".to_string(),
        "diet".to_string(),
        "recovery".to_string(),
    ]);
    for e in entries {
        table.add_row(vec![
            e.date.clone(),
            signed(e.score_value()),
            e.weight_value().map(|w| w.to_string()).unwrap_or_default(),
            e.exercise.clone().unwrap_or_default(),
            e.diet.clone().unwrap_or_default(),
            e.recovery.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

/// Dashboard-style summary of a stats snapshot.
pub fn format_stats(s: &StatsSnapshot, weight_unit: &str) -> String {
    let mut out = format!("=== Body Book, last {} day(s) ===\n\n", s.window_days);
    if s.total_entries == 0 {
        out.push_str("No entries in this window.");
        return out;
    }

    let avg = if s.avg_score > 0.0 {
        format!("+{}", s.avg_score_display)
    } else {
        s.avg_score_display.clone()
    };
    out.push_str(&format!(
        "Vibe score: {} ({})\n",
        paint(&avg, s.band()),
        s.band()
    ));
    out.push_str(&format!(
        "Trend: {} {}\n",
        s.recent_trend.arrow(),
        s.recent_trend
    ));
    out.push_str(&format!(
        "Based on {} {} ({:.0}% of days)\n",
        s.total_entries,
        if s.total_entries == 1 { "entry" } else { "entries" },
        s.completion_pct
    ));

    out.push_str(&format!("\nAvg weight: {}", s.avg_weight_display));
    if s.avg_weight.is_some() {
        out.push_str(&format!(" {}", weight_unit));
    }
    if s.weight_change != 0.0 {
        let change = if s.weight_change > 0.0 {
            format!("+{} {}", s.weight_change_display, weight_unit).red()
        } else {
            format!("{} {}", s.weight_change_display, weight_unit).green()
        };
        out.push_str(&format!(" ({})", change));
    }

    let b = &s.score_breakdown;
    out.push_str(&format!(
        "\nDays: {} rough, {} neutral, {} good",
        b.negative, b.neutral, b.positive
    ));
    out
}

/// Plot a daily series on a five-row grid, one column per day.
///
/// `●` marks a logged day, `─` a carried-over score.
pub fn format_series(points: &[DailyPoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return "No days to chart.".to_string();
    };

    let mut out = String::new();
    for row in (-2..=2).rev() {
        out.push_str(&format!("{:>3} |", signed(row)));
        for p in points {
            let cell = if p.score == row {
                if p.has_entry { '●' } else { '─' }
            } else if row == 0 {
                '·'
            } else {
                ' '
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out.push_str(&format!("     {} … {}", first.date, last.date));
    out
}

pub fn format_health(h: &StorageHealth) -> String {
    let mark = |ok: bool| if ok { "ok".green() } else { "INVALID".red() };
    let mut out = String::new();
    if h.has_data {
        out.push_str(&format!("Entries: present ({})\n", mark(h.data_valid)));
    } else {
        out.push_str("Entries: none stored\n");
    }
    if h.has_backup {
        out.push_str(&format!("Backup: present ({})", mark(h.backup_valid)));
    } else {
        out.push_str("Backup: none");
    }
    out
}

pub fn format_tags(field: TagField, tags: &[&str]) -> String {
    if tags.is_empty() {
        format!("{}: (no suggestions)", field)
    } else {
        format!("{}: {}", field, tags.join(", "))
    }
}

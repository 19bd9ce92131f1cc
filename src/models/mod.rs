pub mod config;
pub mod entry;
pub mod stats;

pub use entry::Entry;
pub use stats::{DailyPoint, ScoreBreakdown, StatsSnapshot, Trend};

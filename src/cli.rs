use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "bodybook", version, about = "Private daily body journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override the current day (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and data directory
    Init,

    /// Save the entry for a day (replaces any existing one)
    Log {
        /// Body weight
        #[arg(long)]
        weight: Option<String>,

        /// Comma-separated exercise tags
        #[arg(long)]
        exercise: Option<String>,

        /// Comma-separated diet tags
        #[arg(long)]
        diet: Option<String>,

        /// Comma-separated recovery tags
        #[arg(long)]
        recovery: Option<String>,

        /// Vibe score from -2 (rough) to 2 (amazing)
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        score: i64,

        /// Free-text note
        #[arg(long)]
        comments: Option<String>,
    },

    /// Show one day's entry (with --date) or the most recent entries
    Show {
        /// Number of recent entries to show
        #[arg(long)]
        last: Option<usize>,
    },

    /// Delete the entry for a day
    Delete {
        /// Day to delete (YYYY-MM-DD)
        day: NaiveDate,
    },

    /// Summary statistics over a time window
    Stats {
        /// Range token: D, W, M, 6M, Y or a number of days
        #[arg(long)]
        range: Option<String>,
    },

    /// Daily vibe score chart over a time window
    Chart {
        /// Range token: D, W, M, 6M, Y or a number of days
        #[arg(long)]
        range: Option<String>,
    },

    /// Tag suggestions for diet, exercise or recovery
    Tags {
        /// Field to list (all fields when omitted)
        field: Option<String>,

        /// Comma-separated tags already chosen, excluded from suggestions
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check stored data and optionally restore the backup
    Doctor {
        /// Copy the backup over the current entries
        #[arg(long)]
        restore: bool,
    },

    /// Remove all entries (a backup is kept)
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. display.weight_unit, stats.cutoff, storage.backup)
        key: String,
        /// Config value
        value: String,
    },
}

impl Commands {
    /// Name used in the JSON envelope.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Log { .. } => "log",
            Self::Show { .. } => "show",
            Self::Delete { .. } => "delete",
            Self::Stats { .. } => "stats",
            Self::Chart { .. } => "chart",
            Self::Tags { .. } => "tags",
            Self::Config { .. } => "config",
            Self::Doctor { .. } => "doctor",
            Self::Reset { .. } => "reset",
            Self::Completions { .. } => "completions",
        }
    }
}

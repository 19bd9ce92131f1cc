use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use bodybook::core::{journal, window};
use bodybook::models::Entry;
use bodybook::models::config::Config;
use bodybook::output;
use bodybook::output::human;

pub struct LogArgs {
    pub weight: Option<String>,
    pub exercise: Option<String>,
    pub diet: Option<String>,
    pub recovery: Option<String>,
    pub score: i64,
    pub comments: Option<String>,
}

pub fn run(args: LogArgs, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;

    let mut entry = Entry::new(date.unwrap_or_else(window::today));
    entry.weight = args.weight;
    entry.exercise = args.exercise;
    entry.diet = args.diet;
    entry.recovery = args.recovery;
    entry.score = Some(args.score);
    entry.comments = args.comments;

    let saved = journal::upsert(&db, entry)?;

    let mut tags = db.load_tags();
    if tags.learn_from_entry(&saved)
        && let Err(err) = db.save_tags(&tags)
    {
        tracing::warn!(%err, "failed to save learned tags");
    }

    if human_flag {
        println!(
            "Saved: {}",
            human::format_entry(&saved, &config.display.weight_unit)
        );
    } else {
        let out = output::success("log", json!({ "entry": saved }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use bodybook::core::journal;
use bodybook::core::window::day_key;
use bodybook::models::config::Config;
use bodybook::output;
use bodybook::output::human;

pub fn run(last: Option<usize>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;
    let unit = &config.display.weight_unit;

    if let Some(d) = date {
        let entry = journal::get(&db, d);
        if human_flag {
            match &entry {
                Some(e) => println!("{}", human::format_entry(e, unit)),
                None => println!("No entry for {}", d),
            }
        } else {
            let out = output::success("show", json!({ "date": day_key(d), "entry": entry }));
            println!("{}", serde_json::to_string(&out)?);
        }
        return Ok(());
    }

    let entries = journal::recent(&db, last.unwrap_or(config.display.recent_limit));
    if human_flag {
        if entries.is_empty() {
            println!("No entries yet. Start logging your days!");
        } else {
            println!("{}", human::format_entries_table(&entries, unit));
        }
    } else {
        let out = output::success("show", json!({ "entries": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

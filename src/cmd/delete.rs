use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use bodybook::core::journal;
use bodybook::core::window::day_key;
use bodybook::models::config::Config;
use bodybook::output;

pub fn run(day: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;
    journal::delete(&db, day)?;

    if human_flag {
        println!("Deleted entry for {}", day);
    } else {
        let out = output::success("delete", json!({ "date": day_key(day) }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use bodybook::core::series;
use bodybook::core::window::{self, range_token_to_days};
use bodybook::models::config::Config;
use bodybook::output;
use bodybook::output::human;

pub fn run(range: Option<&str>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;
    let token = range.unwrap_or(&config.display.default_range);
    let days = range_token_to_days(token);
    let today = date.unwrap_or_else(window::today);

    let entries = super::load_entries(&db);
    let points = series::build_daily_series(&entries, days, today);

    if human_flag {
        println!("{}", human::format_series(&points));
    } else {
        let out = output::success(
            "chart",
            json!({ "range": token, "days": days, "points": points }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

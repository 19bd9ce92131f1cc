use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use bodybook::core::stats;
use bodybook::core::window::range_token_to_days;
use bodybook::models::config::Config;
use bodybook::output;
use bodybook::output::human;

pub fn run(range: Option<&str>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;
    let token = range.unwrap_or(&config.display.default_range);
    let days = range_token_to_days(token);

    let entries = super::load_entries(&db);
    let snapshot = stats::compute_stats_at(
        &entries,
        days,
        super::clock(date),
        config.stats.cutoff,
    );

    if human_flag {
        println!(
            "{}",
            human::format_stats(&snapshot, &config.display.weight_unit)
        );
    } else {
        let out = output::success(
            "stats",
            json!({ "range": token, "band": snapshot.band(), "stats": snapshot }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

use anyhow::Result;

use bodybook::models::config::Config;

pub fn run() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;
    // Creates the database file and schema.
    super::open_db(&config)?;
    println!("Config initialized with defaults at {:?}", Config::path());
    Ok(())
}

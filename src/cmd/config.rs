use anyhow::Result;
use serde_json::json;

use bodybook::models::config::Config;
use bodybook::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

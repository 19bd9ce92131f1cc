use anyhow::Result;
use serde_json::{Map, Value, json};

use bodybook::core::tags::{TagField, split_tags};
use bodybook::models::config::Config;
use bodybook::output;
use bodybook::output::human;

pub fn run(field: Option<&str>, exclude: Option<&str>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;
    let book = db.load_tags();
    let selected: Vec<&str> = split_tags(exclude.unwrap_or("")).collect();

    let fields = match field {
        Some(f) => vec![f.parse::<TagField>()?],
        None => vec![TagField::Diet, TagField::Exercise, TagField::Recovery],
    };

    if human_flag {
        for f in fields {
            println!("{}", human::format_tags(f, &book.suggest(f, &selected)));
        }
    } else {
        let mut data = Map::new();
        for f in fields {
            data.insert(f.to_string(), json!(book.suggest(f, &selected)));
        }
        let out = output::success("tags", Value::Object(data));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

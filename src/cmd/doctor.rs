use anyhow::Result;
use serde_json::json;

use bodybook::models::config::Config;
use bodybook::output;
use bodybook::output::human;

pub fn run(restore: bool, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db(&config)?;

    let restored = if restore {
        let health = db.storage_health()?;
        if !health.has_backup {
            anyhow::bail!("no backup to restore");
        }
        Some(db.restore_from_backup()?.len())
    } else {
        None
    };
    let health = db.storage_health()?;

    if human_flag {
        if let Some(n) = restored {
            println!("Restored {} entries from backup.\n", n);
        }
        println!("{}", human::format_health(&health));
    } else {
        let out = output::success(
            "doctor",
            json!({ "health": health, "restored": restored }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_reset(yes: bool, human_flag: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("reset removes all entries; pass --yes to confirm");
    }
    let config = Config::load()?;
    let db = super::open_db(&config)?;
    db.clear_entries()?;

    if human_flag {
        println!("All entries removed. The previous data is kept as a backup.");
    } else {
        let out = output::success("reset", json!({ "cleared": true }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

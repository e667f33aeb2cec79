//! Show or save the effective configuration.

use std::path::PathBuf;

use spinetrace_common::config::AppConfig;

pub fn run(config: &AppConfig, explicit_path: Option<PathBuf>, write: bool) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);

    if write {
        let saved_to = match explicit_path {
            Some(path) => {
                config.save_to(&path)?;
                path
            }
            None => config.save()?,
        };
        println!("Config saved to: {}", saved_to.display());
    }

    Ok(())
}

//! Configuration display command

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::storage::Config;

pub fn show(
    output: &Output,
    config: &Config,
    explicit_path: Option<&Path>,
    recipes_file: &Path,
) -> Result<()> {
    let config_path = explicit_path
        .map(Path::to_path_buf)
        .or_else(Config::config_path);

    if output.is_json() {
        output.data(&serde_json::json!({
            "config_path": config_path.as_ref().map(|p| p.display().to_string()),
            "recipes_file": recipes_file.display().to_string(),
            "config": config,
        }));
        return Ok(());
    }

    match &config_path {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not found, using defaults)", path.display()),
        None => println!("# no config directory, using defaults"),
    }

    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{}", rendered);
    println!();
    println!("# effective recipe file: {}", recipes_file.display());

    Ok(())
}

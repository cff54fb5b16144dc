mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./strmforged.toml",
        "~/.config/strmforged/config.toml",
        "/etc/strmforged/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if !config.m3u_url.is_empty()
        && !config.m3u_url.starts_with("http://")
        && !config.m3u_url.starts_with("https://")
    {
        anyhow::bail!("m3u_url must be an http(s) URL: {}", config.m3u_url);
    }

    // Library directories are created on demand, so missing ones only warn
    for dir in [&config.movies_directory, &config.tv_shows_directory] {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            tracing::warn!("Library directory does not exist yet: {:?}", dir);
        }
    }

    if config.task.command.is_none() && config.task.args.is_empty() {
        anyhow::bail!("task.args cannot be empty when task.command is not set");
    }

    if config.playlist.max_age_hours == 0 {
        tracing::warn!("playlist.max_age_hours is 0, the playlist will be downloaded every run");
    }

    Ok(())
}

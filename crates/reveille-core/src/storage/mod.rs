mod config;

pub use config::{Config, SnoozeConfig, TickConfig};

use std::path::PathBuf;

/// Returns `~/.config/reveille[-dev]/` based on REVEILLE_ENV.
///
/// Set REVEILLE_ENV=dev to use a development config directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn config_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("REVEILLE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("reveille-dev")
    } else {
        base_dir.join("reveille")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

//! Theme selection for the CLI: a built-in preset or a swatch.toml file

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use swatch_theme::{Theme, ThemeConfig, ThemePreset};

/// File looked up when a directory is given
pub const CONFIG_FILE: &str = "swatch.toml";

fn config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Load a theme config from a file, or from `swatch.toml` inside a directory
pub fn load_config(path: &Path) -> Result<ThemeConfig> {
    let config_path = config_path(path);

    if !config_path.exists() {
        anyhow::bail!(
            "No {} found at {}. Run `swatch init` to create one.",
            CONFIG_FILE,
            path.display()
        );
    }

    ThemeConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))
}

/// Build the theme to resolve against.
///
/// A config file wins; `preset` then only fills in when the file names none.
pub fn load_theme(preset: Option<&str>, config: Option<&Path>) -> Result<Theme> {
    let mut theme_config = match config {
        Some(path) => load_config(path)?,
        None => ThemeConfig::default(),
    };
    if theme_config.preset.is_none() {
        theme_config.preset = preset.map(str::to_owned);
    }

    let theme = theme_config.build().context("Failed to build theme")?;
    tracing::debug!(theme = theme.name(), schema = %theme.schema(), "theme ready");
    Ok(theme)
}

/// Starter config naming `preset`
pub fn template(preset: ThemePreset) -> ThemeConfig {
    ThemeConfig {
        preset: Some(preset.id().to_string()),
        name: Some(format!("{} (custom)", preset.display_name())),
        ..ThemeConfig::default()
    }
}

/// Write a starter config into `dir`
pub fn write_template(dir: &Path, preset: ThemePreset, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    let content = template(preset)
        .to_toml()
        .context("Failed to serialize config")?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

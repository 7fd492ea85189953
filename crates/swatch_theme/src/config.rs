//! Theme configuration files
//!
//! A `theme.toml` names a preset and lists overrides on top of it:
//!
//! ```toml
//! preset = "current-light"
//! name = "Branded"
//! roundness = 8.0
//!
//! [colors]
//! primary = "#0061a4"
//! onSecondaryContainer = "rgb(40, 24, 5)"
//!
//! [spacing]
//! medium = 26.0
//! ```
//!
//! [`ThemeConfig::build`] always produces a new [`Theme`]; the preset is
//! never modified.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swatch_core::{Color, StyleError};
use thiserror::Error;

use crate::presets::ThemePreset;
use crate::theme::{Theme, ThemeMode};
use crate::tokens::{ColorRole, SpacingToken};

/// Preset used when a config does not name one
pub const DEFAULT_PRESET: ThemePreset = ThemePreset::CurrentLight;

/// Errors raised while loading or applying a theme config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown color role `{0}`")]
    UnknownColorRole(String),

    #[error("unknown spacing token `{0}`")]
    UnknownSpacingToken(String),

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Derived theme description (theme.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preset id, e.g. `legacy-dark`
    pub preset: Option<String>,
    pub name: Option<String>,
    /// Switch to the preset's light or dark counterpart
    pub dark: Option<bool>,
    pub mode: Option<ThemeMode>,
    pub roundness: Option<f32>,
    pub animation_scale: Option<f32>,
    /// Role name (camelCase) → color string
    pub colors: BTreeMap<String, String>,
    /// Named spacing token → logical value
    pub spacing: BTreeMap<String, f32>,
}

impl ThemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded theme config");
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the base preset, honouring the `dark` switch
    pub fn base_preset(&self) -> Result<ThemePreset, ConfigError> {
        let preset = match &self.preset {
            Some(id) => {
                ThemePreset::from_id(id).ok_or_else(|| ConfigError::UnknownPreset(id.clone()))?
            }
            None => DEFAULT_PRESET,
        };

        Ok(match self.dark {
            Some(dark) if dark != preset.theme().is_dark() => preset.counterpart(),
            _ => preset,
        })
    }

    /// Build a new theme from the base preset plus overrides
    pub fn build(&self) -> Result<Theme, ConfigError> {
        let preset = self.base_preset()?;
        let mut builder = preset.theme().derive();

        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(mode) = self.mode {
            builder = builder.mode(mode);
        }
        if let Some(roundness) = self.roundness {
            builder = builder.roundness(roundness);
        }
        if let Some(scale) = self.animation_scale {
            builder = builder.animation_scale(scale);
        }

        for (key, value) in &self.colors {
            let role = ColorRole::from_name(key)
                .ok_or_else(|| ConfigError::UnknownColorRole(key.clone()))?;
            builder = builder.color(role, Color::parse(value)?);
        }

        for (key, value) in &self.spacing {
            let token = SpacingToken::from_name(key)
                .ok_or_else(|| ConfigError::UnknownSpacingToken(key.clone()))?;
            builder = builder.spacing(token, *value);
        }

        tracing::debug!(
            preset = preset.id(),
            colors = self.colors.len(),
            spacing = self.spacing.len(),
            "applying theme config"
        );

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElevationLevel, SchemaVersion};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
            preset = "legacy-dark"
            name = "Night"
            mode = "exact"
            roundness = 6.0

            [colors]
            primary = "#bb86fc"

            [spacing]
            medium = 26.0
            "##,
        )
        .unwrap();

        assert_eq!(config.preset.as_deref(), Some("legacy-dark"));
        assert_eq!(config.mode, Some(ThemeMode::Exact));
        assert_eq!(config.colors.get("primary").map(String::as_str), Some("#bb86fc"));
        assert_eq!(config.spacing.get("medium"), Some(&26.0));
    }

    #[test]
    fn test_empty_config_is_default_preset() {
        let theme = ThemeConfig::default().build().unwrap();
        assert_eq!(theme, DEFAULT_PRESET.theme());
    }

    #[test]
    fn test_build_applies_overrides() {
        let config = ThemeConfig::from_toml_str(
            r##"
            preset = "current-light"
            name = "Branded"
            roundness = 8.0

            [colors]
            primary = "#0061a4"
            onSecondaryContainer = "rgba(0, 0, 0, .87)"

            [spacing]
            xxSmall = 10.0
            "##,
        )
        .unwrap();

        let theme = config.build().unwrap();
        assert_eq!(theme.name(), "Branded");
        assert_eq!(theme.roundness(), 8.0);
        assert_eq!(
            theme.color(ColorRole::Primary).unwrap().to_canonical_string(),
            "rgb(0, 97, 164)"
        );
        assert_eq!(
            theme
                .color(ColorRole::OnSecondaryContainer)
                .unwrap()
                .to_canonical_string(),
            "rgba(0, 0, 0, 0.87)"
        );
        assert_eq!(theme.spacing().get(SpacingToken::XxSmall), 10.0);
    }

    #[test]
    fn test_dark_switch_selects_counterpart() {
        let config = ThemeConfig {
            preset: Some("current-light".to_string()),
            dark: Some(true),
            ..Default::default()
        };
        let theme = config.build().unwrap();
        assert!(theme.is_dark());
        assert_eq!(theme.schema(), SchemaVersion::Current);
    }

    #[test]
    fn test_legacy_surface_override_recomputes_overlay() {
        let config = ThemeConfig {
            preset: Some("legacy-dark".to_string()),
            colors: BTreeMap::from([("surface".to_string(), "#202020".to_string())]),
            ..Default::default()
        };
        let theme = config.build().unwrap();
        assert_eq!(
            theme.elevation(ElevationLevel::new(0).unwrap()).to_canonical_string(),
            "rgb(32, 32, 32)"
        );
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_colors() {
        let unknown_preset = ThemeConfig {
            preset: Some("solarized".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            unknown_preset.build(),
            Err(ConfigError::UnknownPreset(id)) if id == "solarized"
        ));

        let unknown_role = ThemeConfig {
            colors: BTreeMap::from([("primaryHover".to_string(), "#fff".to_string())]),
            ..Default::default()
        };
        assert!(matches!(
            unknown_role.build(),
            Err(ConfigError::UnknownColorRole(_))
        ));

        let bad_color = ThemeConfig {
            colors: BTreeMap::from([("primary".to_string(), "#12345".to_string())]),
            ..Default::default()
        };
        assert!(matches!(
            bad_color.build(),
            Err(ConfigError::Style(StyleError::InvalidColorFormat { .. }))
        ));

        let unknown_token = ThemeConfig {
            spacing: BTreeMap::from([("huge".to_string(), 99.0)]),
            ..Default::default()
        };
        assert!(matches!(
            unknown_token.build(),
            Err(ConfigError::UnknownSpacingToken(_))
        ));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = ThemeConfig {
            preset: Some("legacy-light".to_string()),
            roundness: Some(2.0),
            colors: BTreeMap::from([("accent".to_string(), "#03dac4".to_string())]),
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeConfig::load(Path::new("/nonexistent/theme.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

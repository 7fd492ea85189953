//! Built-in theme preset catalog.

use std::fmt::{Display, Formatter};

use crate::theme::Theme;
use crate::themes::{CurrentTheme, LegacyTheme};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Legacy schema, light palette.
    LegacyLight,
    /// Legacy schema, dark palette with adaptive elevation overlays.
    LegacyDark,
    /// Current schema, light palette.
    CurrentLight,
    /// Current schema, dark palette.
    CurrentDark,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::LegacyLight => "legacy-light",
            Self::LegacyDark => "legacy-dark",
            Self::CurrentLight => "current-light",
            Self::CurrentDark => "current-dark",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::LegacyLight => "Legacy Light",
            Self::LegacyDark => "Legacy Dark",
            Self::CurrentLight => "Current Light",
            Self::CurrentDark => "Current Dark",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::LegacyLight,
            ThemePreset::LegacyDark,
            ThemePreset::CurrentLight,
            ThemePreset::CurrentDark,
        ];
        &PRESETS
    }

    /// Look up a preset by its stable id.
    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Build a fresh theme value for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::LegacyLight => LegacyTheme::light(),
            Self::LegacyDark => LegacyTheme::dark(),
            Self::CurrentLight => CurrentTheme::light(),
            Self::CurrentDark => CurrentTheme::dark(),
        }
    }

    /// The preset of the same schema with the opposite brightness.
    pub fn counterpart(self) -> ThemePreset {
        match self {
            Self::LegacyLight => Self::LegacyDark,
            Self::LegacyDark => Self::LegacyLight,
            Self::CurrentLight => Self::CurrentDark,
            Self::CurrentDark => Self::CurrentLight,
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

//! Color roles for theming

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use swatch_core::Color;

/// Semantic color slot keys
///
/// The current schema uses container/on-container pairs; the legacy schema
/// uses a flat palette (`accent`, `text`, `disabled`, ...). A theme only
/// carries the roles its schema defines.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    // Brand colors
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,

    // Error colors
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,

    // Surface colors
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    SurfaceDisabled,
    OnSurfaceDisabled,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,

    // Outlines and scrims
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    Backdrop,

    // Legacy palette
    Accent,
    Text,
    Disabled,
    Placeholder,
    Notification,
}

impl ColorRole {
    pub const ALL: [ColorRole; 37] = [
        ColorRole::Primary,
        ColorRole::OnPrimary,
        ColorRole::PrimaryContainer,
        ColorRole::OnPrimaryContainer,
        ColorRole::Secondary,
        ColorRole::OnSecondary,
        ColorRole::SecondaryContainer,
        ColorRole::OnSecondaryContainer,
        ColorRole::Tertiary,
        ColorRole::OnTertiary,
        ColorRole::TertiaryContainer,
        ColorRole::OnTertiaryContainer,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::ErrorContainer,
        ColorRole::OnErrorContainer,
        ColorRole::Background,
        ColorRole::OnBackground,
        ColorRole::Surface,
        ColorRole::OnSurface,
        ColorRole::SurfaceVariant,
        ColorRole::OnSurfaceVariant,
        ColorRole::SurfaceDisabled,
        ColorRole::OnSurfaceDisabled,
        ColorRole::InverseSurface,
        ColorRole::InverseOnSurface,
        ColorRole::InversePrimary,
        ColorRole::Outline,
        ColorRole::OutlineVariant,
        ColorRole::Shadow,
        ColorRole::Scrim,
        ColorRole::Backdrop,
        ColorRole::Accent,
        ColorRole::Text,
        ColorRole::Disabled,
        ColorRole::Placeholder,
        ColorRole::Notification,
    ];

    /// The camelCase name used in config files and error messages
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::OnPrimary => "onPrimary",
            ColorRole::PrimaryContainer => "primaryContainer",
            ColorRole::OnPrimaryContainer => "onPrimaryContainer",
            ColorRole::Secondary => "secondary",
            ColorRole::OnSecondary => "onSecondary",
            ColorRole::SecondaryContainer => "secondaryContainer",
            ColorRole::OnSecondaryContainer => "onSecondaryContainer",
            ColorRole::Tertiary => "tertiary",
            ColorRole::OnTertiary => "onTertiary",
            ColorRole::TertiaryContainer => "tertiaryContainer",
            ColorRole::OnTertiaryContainer => "onTertiaryContainer",
            ColorRole::Error => "error",
            ColorRole::OnError => "onError",
            ColorRole::ErrorContainer => "errorContainer",
            ColorRole::OnErrorContainer => "onErrorContainer",
            ColorRole::Background => "background",
            ColorRole::OnBackground => "onBackground",
            ColorRole::Surface => "surface",
            ColorRole::OnSurface => "onSurface",
            ColorRole::SurfaceVariant => "surfaceVariant",
            ColorRole::OnSurfaceVariant => "onSurfaceVariant",
            ColorRole::SurfaceDisabled => "surfaceDisabled",
            ColorRole::OnSurfaceDisabled => "onSurfaceDisabled",
            ColorRole::InverseSurface => "inverseSurface",
            ColorRole::InverseOnSurface => "inverseOnSurface",
            ColorRole::InversePrimary => "inversePrimary",
            ColorRole::Outline => "outline",
            ColorRole::OutlineVariant => "outlineVariant",
            ColorRole::Shadow => "shadow",
            ColorRole::Scrim => "scrim",
            ColorRole::Backdrop => "backdrop",
            ColorRole::Accent => "accent",
            ColorRole::Text => "text",
            ColorRole::Disabled => "disabled",
            ColorRole::Placeholder => "placeholder",
            ColorRole::Notification => "notification",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorRole> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Role → color table of a theme
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorRoles {
    roles: FxHashMap<ColorRole, Color>,
}

impl ColorRoles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a color by role, if the theme defines it
    pub fn get(&self, role: ColorRole) -> Option<Color> {
        self.roles.get(&role).copied()
    }

    pub fn contains(&self, role: ColorRole) -> bool {
        self.roles.contains_key(&role)
    }

    pub fn set(&mut self, role: ColorRole, color: Color) {
        self.roles.insert(role, color);
    }

    pub fn with(mut self, role: ColorRole, color: Color) -> Self {
        self.set(role, color);
        self
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Iterate in role declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|color| (role, color)))
    }
}

impl FromIterator<(ColorRole, Color)> for ColorRoles {
    fn from_iter<I: IntoIterator<Item = (ColorRole, Color)>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_name(role.name()), Some(role));
        }
        assert_eq!(ColorRole::from_name("primaryHover"), None);
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let roles = ColorRoles::new()
            .with(ColorRole::Surface, Color::WHITE)
            .with(ColorRole::Primary, Color::BLACK);
        let order: Vec<_> = roles.iter().map(|(role, _)| role).collect();
        assert_eq!(order, vec![ColorRole::Primary, ColorRole::Surface]);
    }
}

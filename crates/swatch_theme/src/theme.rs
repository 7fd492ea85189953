//! The theme value and its builder
//!
//! A [`Theme`] is immutable once built. Overrides always go through
//! [`Theme::derive`], which copies the theme into a [`ThemeBuilder`] and
//! produces a new value, so several themes can be rendered side by side.

use serde::{Deserialize, Serialize};
use swatch_core::{Color, Result, StyleError};

use crate::tokens::*;

/// Which token set a theme conforms to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Flat palette, precomputed elevation overlays
    Legacy,
    /// Container/on-container role pairs, tonal elevation
    Current,
}

const LEGACY_COLOR_ROLES: [ColorRole; 11] = [
    ColorRole::Primary,
    ColorRole::Accent,
    ColorRole::Background,
    ColorRole::Surface,
    ColorRole::Error,
    ColorRole::Text,
    ColorRole::OnSurface,
    ColorRole::Disabled,
    ColorRole::Placeholder,
    ColorRole::Backdrop,
    ColorRole::Notification,
];

const CURRENT_COLOR_ROLES: [ColorRole; 32] = [
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
];

impl SchemaVersion {
    pub fn name(&self) -> &'static str {
        match self {
            SchemaVersion::Legacy => "legacy",
            SchemaVersion::Current => "current",
        }
    }

    /// Color roles every theme of this schema must define
    pub fn required_color_roles(&self) -> &'static [ColorRole] {
        match self {
            SchemaVersion::Legacy => &LEGACY_COLOR_ROLES,
            SchemaVersion::Current => &CURRENT_COLOR_ROLES,
        }
    }

    /// Font roles every theme of this schema must define
    pub fn required_font_roles(&self) -> &'static [FontRole] {
        match self {
            SchemaVersion::Legacy => &FontRole::LEGACY,
            SchemaVersion::Current => &FontRole::TYPE_SCALE,
        }
    }

    pub fn default_fonts(&self) -> FontRoles {
        match self {
            SchemaVersion::Legacy => FontRoles::legacy(),
            SchemaVersion::Current => FontRoles::type_scale(),
        }
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dark-mode surface treatment
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Surfaces pick up elevation overlays in dark mode
    #[default]
    Adaptive,
    /// Surfaces use the palette colors as given
    Exact,
}

/// Immutable theme record shared read-only by every resolver
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub(crate) name: String,
    pub(crate) dark: bool,
    pub(crate) schema: SchemaVersion,
    pub(crate) mode: ThemeMode,
    pub(crate) roundness: f32,
    pub(crate) animation_scale: f32,
    pub(crate) colors: ColorRoles,
    pub(crate) elevation: ElevationLevels,
    pub(crate) spacing: SpacingScale,
    pub(crate) fonts: FontRoles,
    pub(crate) opacity: OpacityTokens,
}

impl Theme {
    /// Start an empty theme of the given schema
    pub fn builder(name: impl Into<String>, schema: SchemaVersion, dark: bool) -> ThemeBuilder {
        ThemeBuilder {
            theme: Theme {
                name: name.into(),
                dark,
                schema,
                mode: ThemeMode::Adaptive,
                roundness: 4.0,
                animation_scale: 1.0,
                colors: ColorRoles::new(),
                elevation: ElevationLevels::default(),
                spacing: SpacingScale::default(),
                fonts: schema.default_fonts(),
                opacity: OpacityTokens::default(),
            },
            elevation_set: false,
        }
    }

    /// Copy this theme into a builder for overrides
    pub fn derive(&self) -> ThemeBuilder {
        ThemeBuilder {
            theme: self.clone(),
            elevation_set: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn schema(&self) -> SchemaVersion {
        self.schema
    }

    pub fn is_current(&self) -> bool {
        self.schema == SchemaVersion::Current
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_adaptive(&self) -> bool {
        self.mode == ThemeMode::Adaptive
    }

    /// Logical corner roundness unit
    pub fn roundness(&self) -> f32 {
        self.roundness
    }

    pub fn animation_scale(&self) -> f32 {
        self.animation_scale
    }

    pub fn colors(&self) -> &ColorRoles {
        &self.colors
    }

    /// Look up a color role, failing if this theme does not define it
    pub fn color(&self, role: ColorRole) -> Result<Color> {
        self.colors
            .get(role)
            .ok_or_else(|| StyleError::missing_field(role.name(), self.schema.name()))
    }

    pub fn elevation(&self, level: ElevationLevel) -> Color {
        self.elevation.get(level)
    }

    pub fn elevation_levels(&self) -> &ElevationLevels {
        &self.elevation
    }

    pub fn spacing(&self) -> &SpacingScale {
        &self.spacing
    }

    pub fn fonts(&self) -> &FontRoles {
        &self.fonts
    }

    /// Look up a font role, failing if this theme does not define it
    pub fn font(&self, role: FontRole) -> Result<&FontDescriptor> {
        self.fonts
            .get(role)
            .ok_or_else(|| StyleError::missing_field(role.name(), self.schema.name()))
    }

    pub fn opacity(&self) -> &OpacityTokens {
        &self.opacity
    }

    /// Check the theme against its schema's required roles and numeric ranges
    pub fn validate(&self) -> Result<()> {
        let schema = self.schema.name();

        if let Some(role) = self
            .schema
            .required_color_roles()
            .iter()
            .find(|role| !self.colors.contains(**role))
        {
            return Err(StyleError::missing_field(role.name(), schema));
        }

        if let Some(role) = self
            .schema
            .required_font_roles()
            .iter()
            .find(|role| !self.fonts.contains(**role))
        {
            return Err(StyleError::missing_field(role.name(), schema));
        }

        for (field, value) in [
            ("roundness", self.roundness),
            ("animation scale", self.animation_scale),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(StyleError::precondition(format!(
                    "theme {field} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Builder for new and derived themes
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    theme: Theme,
    elevation_set: bool,
}

impl ThemeBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.theme.name = name.into();
        self
    }

    pub fn dark(mut self, dark: bool) -> Self {
        self.theme.dark = dark;
        self
    }

    pub fn mode(mut self, mode: ThemeMode) -> Self {
        self.theme.mode = mode;
        self
    }

    pub fn roundness(mut self, roundness: f32) -> Self {
        self.theme.roundness = roundness;
        self
    }

    pub fn animation_scale(mut self, scale: f32) -> Self {
        self.theme.animation_scale = scale;
        self
    }

    pub fn color(mut self, role: ColorRole, color: Color) -> Self {
        self.theme.colors.set(role, color);
        self
    }

    pub fn colors(mut self, colors: ColorRoles) -> Self {
        self.theme.colors = colors;
        self
    }

    pub fn elevation(mut self, levels: ElevationLevels) -> Self {
        self.theme.elevation = levels;
        self.elevation_set = true;
        self
    }

    pub fn spacing(mut self, token: SpacingToken, value: f32) -> Self {
        self.theme.spacing.set(token, value);
        self
    }

    pub fn spacing_scale(mut self, spacing: SpacingScale) -> Self {
        self.theme.spacing = spacing;
        self
    }

    pub fn font(mut self, role: FontRole, font: FontDescriptor) -> Self {
        self.theme.fonts.set(role, font);
        self
    }

    pub fn opacity(mut self, opacity: OpacityTokens) -> Self {
        self.theme.opacity = opacity;
        self
    }

    /// Validate and produce the theme.
    ///
    /// Legacy dark themes without an explicit elevation table get the
    /// overlay table computed from their surface color.
    pub fn build(self) -> Result<Theme> {
        let mut theme = self.theme;

        if theme.schema == SchemaVersion::Legacy && theme.dark && !self.elevation_set {
            if let Some(surface) = theme.colors.get(ColorRole::Surface) {
                theme.elevation = ElevationLevels::legacy_overlay(surface)?;
            }
        }

        if let Err(err) = theme.validate() {
            tracing::warn!(theme = %theme.name, error = %err, "theme failed validation");
            return Err(err);
        }

        tracing::debug!(
            theme = %theme.name,
            schema = %theme.schema,
            dark = theme.dark,
            "built theme"
        );
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemePreset;

    #[test]
    fn test_derive_leaves_base_untouched() {
        let base = ThemePreset::CurrentLight.theme();
        let derived = base
            .derive()
            .color(ColorRole::Primary, Color::from_hex(0x0061A4))
            .roundness(8.0)
            .build()
            .unwrap();

        assert_eq!(
            base.color(ColorRole::Primary).unwrap(),
            Color::from_rgba8(133, 84, 0, 255)
        );
        assert_eq!(
            derived.color(ColorRole::Primary).unwrap(),
            Color::from_hex(0x0061A4)
        );
        assert_eq!(base.roundness(), 4.0);
        assert_eq!(derived.roundness(), 8.0);
    }

    #[test]
    fn test_missing_role_is_reported() {
        let legacy = ThemePreset::LegacyLight.theme();
        let err = legacy.color(ColorRole::SecondaryContainer).unwrap_err();
        assert_eq!(
            err,
            StyleError::missing_field("secondaryContainer", "legacy")
        );
    }

    #[test]
    fn test_build_rejects_incomplete_theme() {
        let result = Theme::builder("Partial", SchemaVersion::Current, false)
            .color(ColorRole::Primary, Color::BLACK)
            .build();
        assert!(matches!(
            result,
            Err(StyleError::MissingThemeField { schema: "current", .. })
        ));
    }

    #[test]
    fn test_build_rejects_negative_roundness() {
        let result = ThemePreset::LegacyLight.theme().derive().roundness(-1.0).build();
        assert!(matches!(result, Err(StyleError::PreconditionViolation(_))));
    }

    #[test]
    fn test_legacy_dark_overlay_follows_surface() {
        let surface = Color::from_hex(0x202020);
        let theme = ThemePreset::LegacyDark
            .theme()
            .derive()
            .color(ColorRole::Surface, surface)
            .build()
            .unwrap();
        assert_eq!(
            theme.elevation_levels(),
            &ElevationLevels::legacy_overlay(surface).unwrap()
        );
    }
}

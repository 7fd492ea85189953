//! Legacy schema themes
//!
//! Flat palette with a single accent color. Dark surfaces encode elevation
//! as a precomputed white overlay table.

use swatch_core::Color;

use crate::theme::{SchemaVersion, Theme, ThemeMode};
use crate::tokens::*;

/// Light palette
pub mod light {
    use swatch_core::Color;

    pub const PRIMARY: Color = Color::rgb(98.0 / 255.0, 0.0, 238.0 / 255.0);
    pub const ACCENT: Color = Color::rgb(3.0 / 255.0, 218.0 / 255.0, 196.0 / 255.0);
    pub const BACKGROUND: Color = Color::rgb(246.0 / 255.0, 246.0 / 255.0, 246.0 / 255.0);
    pub const SURFACE: Color = Color::WHITE;
    pub const ERROR: Color = Color::rgb(176.0 / 255.0, 0.0, 32.0 / 255.0);
    pub const TEXT: Color = Color::BLACK;
    pub const ON_SURFACE: Color = Color::BLACK;
    pub const DISABLED: Color = Color::rgba(0.0, 0.0, 0.0, 0.26);
    pub const PLACEHOLDER: Color = Color::rgba(0.0, 0.0, 0.0, 0.54);
    pub const BACKDROP: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
    pub const NOTIFICATION: Color = Color::rgb(245.0 / 255.0, 0.0, 87.0 / 255.0);
}

/// Dark palette
pub mod dark {
    use swatch_core::Color;

    pub const PRIMARY: Color = Color::rgb(187.0 / 255.0, 134.0 / 255.0, 252.0 / 255.0);
    pub const ACCENT: Color = Color::rgb(3.0 / 255.0, 218.0 / 255.0, 198.0 / 255.0);
    pub const BACKGROUND: Color = Color::rgb(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0);
    pub const SURFACE: Color = Color::rgb(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0);
    pub const ERROR: Color = Color::rgb(207.0 / 255.0, 102.0 / 255.0, 121.0 / 255.0);
    pub const TEXT: Color = Color::WHITE;
    pub const ON_SURFACE: Color = Color::WHITE;
    pub const DISABLED: Color = Color::rgba(1.0, 1.0, 1.0, 0.38);
    pub const PLACEHOLDER: Color = Color::rgba(1.0, 1.0, 1.0, 0.54);
    pub const BACKDROP: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
    pub const NOTIFICATION: Color = Color::rgb(1.0, 128.0 / 255.0, 171.0 / 255.0);

    /// Surface overlay per elevation level (0, 5, 7, 8, 9, 10 % white)
    pub const ELEVATION: [Color; 6] = [
        Color::rgb(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0),
        Color::rgb(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0),
        Color::rgb(35.0 / 255.0, 35.0 / 255.0, 35.0 / 255.0),
        Color::rgb(37.0 / 255.0, 37.0 / 255.0, 37.0 / 255.0),
        Color::rgb(39.0 / 255.0, 39.0 / 255.0, 39.0 / 255.0),
        Color::rgb(42.0 / 255.0, 42.0 / 255.0, 42.0 / 255.0),
    ];
}

#[derive(Clone, Copy)]
struct Palette {
    primary: Color,
    accent: Color,
    background: Color,
    surface: Color,
    error: Color,
    text: Color,
    on_surface: Color,
    disabled: Color,
    placeholder: Color,
    backdrop: Color,
    notification: Color,
}

impl Palette {
    fn roles(self) -> ColorRoles {
        ColorRoles::new()
            .with(ColorRole::Primary, self.primary)
            .with(ColorRole::Accent, self.accent)
            .with(ColorRole::Background, self.background)
            .with(ColorRole::Surface, self.surface)
            .with(ColorRole::Error, self.error)
            .with(ColorRole::Text, self.text)
            .with(ColorRole::OnSurface, self.on_surface)
            .with(ColorRole::Disabled, self.disabled)
            .with(ColorRole::Placeholder, self.placeholder)
            .with(ColorRole::Backdrop, self.backdrop)
            .with(ColorRole::Notification, self.notification)
    }
}

/// Legacy schema theme factory
pub struct LegacyTheme;

impl LegacyTheme {
    pub fn light() -> Theme {
        let palette = Palette {
            primary: light::PRIMARY,
            accent: light::ACCENT,
            background: light::BACKGROUND,
            surface: light::SURFACE,
            error: light::ERROR,
            text: light::TEXT,
            on_surface: light::ON_SURFACE,
            disabled: light::DISABLED,
            placeholder: light::PLACEHOLDER,
            backdrop: light::BACKDROP,
            notification: light::NOTIFICATION,
        };
        // Light surfaces are never tinted; the table stays transparent.
        legacy_theme("Legacy Light", false, palette, ElevationLevels::default())
    }

    pub fn dark() -> Theme {
        let palette = Palette {
            primary: dark::PRIMARY,
            accent: dark::ACCENT,
            background: dark::BACKGROUND,
            surface: dark::SURFACE,
            error: dark::ERROR,
            text: dark::TEXT,
            on_surface: dark::ON_SURFACE,
            disabled: dark::DISABLED,
            placeholder: dark::PLACEHOLDER,
            backdrop: dark::BACKDROP,
            notification: dark::NOTIFICATION,
        };
        legacy_theme(
            "Legacy Dark",
            true,
            palette,
            ElevationLevels::new(dark::ELEVATION),
        )
    }
}

fn legacy_theme(name: &str, dark: bool, palette: Palette, elevation: ElevationLevels) -> Theme {
    Theme {
        name: name.to_string(),
        dark,
        schema: SchemaVersion::Legacy,
        mode: ThemeMode::Adaptive,
        roundness: 4.0,
        animation_scale: 1.0,
        colors: palette.roles(),
        elevation,
        spacing: SpacingScale::default(),
        fonts: FontRoles::legacy(),
        opacity: OpacityTokens::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_overlay_table_matches_computed_overlay() {
        let computed = ElevationLevels::legacy_overlay(dark::SURFACE).unwrap();
        for (stored, derived) in dark::ELEVATION.iter().zip(computed.as_slice()) {
            assert!(stored.same_as(derived), "{stored} != {derived}");
        }
    }

    #[test]
    fn test_both_variants_validate() {
        LegacyTheme::light().validate().unwrap();
        LegacyTheme::dark().validate().unwrap();
    }
}

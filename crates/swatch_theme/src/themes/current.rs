//! Current schema themes
//!
//! Container/on-container role pairs over a warm amber palette. Elevation
//! is a tonal table; surfaces are tinted toward primary by the resolvers.

use swatch_core::Color;

use crate::theme::{SchemaVersion, Theme, ThemeMode};
use crate::tokens::*;

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..rgb(r, g, b)
    }
}

/// Current schema theme factory
pub struct CurrentTheme;

impl CurrentTheme {
    pub fn light() -> Theme {
        let colors: ColorRoles = [
            (ColorRole::Primary, rgb(133, 84, 0)),
            (ColorRole::OnPrimary, rgb(255, 255, 255)),
            (ColorRole::PrimaryContainer, rgb(255, 221, 183)),
            (ColorRole::OnPrimaryContainer, rgb(42, 23, 0)),
            (ColorRole::Secondary, rgb(112, 91, 65)),
            (ColorRole::OnSecondary, rgb(255, 255, 255)),
            (ColorRole::SecondaryContainer, rgb(252, 222, 188)),
            (ColorRole::OnSecondaryContainer, rgb(40, 24, 5)),
            (ColorRole::Tertiary, rgb(112, 93, 0)),
            (ColorRole::OnTertiary, rgb(255, 255, 255)),
            (ColorRole::TertiaryContainer, rgb(255, 225, 109)),
            (ColorRole::OnTertiaryContainer, rgb(34, 27, 0)),
            (ColorRole::Error, rgb(186, 26, 26)),
            (ColorRole::OnError, rgb(255, 255, 255)),
            (ColorRole::ErrorContainer, rgb(255, 218, 214)),
            (ColorRole::OnErrorContainer, rgb(65, 0, 2)),
            (ColorRole::Background, rgb(255, 251, 255)),
            (ColorRole::OnBackground, rgb(31, 27, 22)),
            (ColorRole::Surface, rgb(255, 251, 255)),
            (ColorRole::OnSurface, rgb(31, 27, 22)),
            (ColorRole::SurfaceVariant, rgb(240, 224, 208)),
            (ColorRole::OnSurfaceVariant, rgb(80, 69, 57)),
            (ColorRole::Outline, rgb(130, 117, 104)),
            (ColorRole::OutlineVariant, rgb(212, 196, 181)),
            (ColorRole::Shadow, rgb(0, 0, 0)),
            (ColorRole::Scrim, rgb(0, 0, 0)),
            (ColorRole::InverseSurface, rgb(53, 47, 42)),
            (ColorRole::InverseOnSurface, rgb(249, 239, 231)),
            (ColorRole::InversePrimary, rgb(255, 185, 92)),
            (ColorRole::SurfaceDisabled, rgba(31, 27, 22, 0.12)),
            (ColorRole::OnSurfaceDisabled, rgba(31, 27, 22, 0.38)),
            (ColorRole::Backdrop, rgba(56, 47, 36, 0.4)),
        ]
        .into_iter()
        .collect();

        let elevation = ElevationLevels::new([
            Color::TRANSPARENT,
            rgb(249, 243, 242),
            rgb(245, 238, 235),
            rgb(242, 233, 227),
            rgb(240, 231, 224),
            rgb(238, 228, 219),
        ]);

        current_theme("Current Light", false, colors, elevation)
    }

    pub fn dark() -> Theme {
        let colors: ColorRoles = [
            (ColorRole::Primary, rgb(255, 185, 92)),
            (ColorRole::OnPrimary, rgb(70, 42, 0)),
            (ColorRole::PrimaryContainer, rgb(101, 62, 0)),
            (ColorRole::OnPrimaryContainer, rgb(255, 221, 183)),
            (ColorRole::Secondary, rgb(223, 194, 162)),
            (ColorRole::OnSecondary, rgb(63, 45, 23)),
            (ColorRole::SecondaryContainer, rgb(87, 67, 43)),
            (ColorRole::OnSecondaryContainer, rgb(252, 222, 188)),
            (ColorRole::Tertiary, rgb(226, 197, 77)),
            (ColorRole::OnTertiary, rgb(59, 47, 0)),
            (ColorRole::TertiaryContainer, rgb(85, 70, 0)),
            (ColorRole::OnTertiaryContainer, rgb(255, 225, 109)),
            (ColorRole::Error, rgb(255, 180, 171)),
            (ColorRole::OnError, rgb(105, 0, 5)),
            (ColorRole::ErrorContainer, rgb(147, 0, 10)),
            (ColorRole::OnErrorContainer, rgb(255, 180, 171)),
            (ColorRole::Background, rgb(31, 27, 22)),
            (ColorRole::OnBackground, rgb(234, 225, 217)),
            (ColorRole::Surface, rgb(31, 27, 22)),
            (ColorRole::OnSurface, rgb(234, 225, 217)),
            (ColorRole::SurfaceVariant, rgb(80, 69, 57)),
            (ColorRole::OnSurfaceVariant, rgb(212, 196, 181)),
            (ColorRole::Outline, rgb(157, 142, 129)),
            (ColorRole::OutlineVariant, rgb(80, 69, 57)),
            (ColorRole::Shadow, rgb(0, 0, 0)),
            (ColorRole::Scrim, rgb(0, 0, 0)),
            (ColorRole::InverseSurface, rgb(234, 225, 217)),
            (ColorRole::InverseOnSurface, rgb(53, 47, 42)),
            (ColorRole::InversePrimary, rgb(133, 84, 0)),
            (ColorRole::SurfaceDisabled, rgba(234, 225, 217, 0.12)),
            (ColorRole::OnSurfaceDisabled, rgba(234, 225, 217, 0.38)),
            (ColorRole::Backdrop, rgba(56, 47, 36, 0.4)),
        ]
        .into_iter()
        .collect();

        let elevation = ElevationLevels::new([
            Color::TRANSPARENT,
            rgb(42, 35, 26),
            rgb(49, 40, 28),
            rgb(56, 44, 30),
            rgb(58, 46, 30),
            rgb(62, 49, 32),
        ]);

        current_theme("Current Dark", true, colors, elevation)
    }
}

fn current_theme(name: &str, dark: bool, colors: ColorRoles, elevation: ElevationLevels) -> Theme {
    Theme {
        name: name.to_string(),
        dark,
        schema: SchemaVersion::Current,
        mode: ThemeMode::Adaptive,
        roundness: 4.0,
        animation_scale: 1.0,
        colors,
        elevation,
        spacing: SpacingScale::default(),
        fonts: FontRoles::type_scale(),
        opacity: OpacityTokens::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_variants_validate() {
        CurrentTheme::light().validate().unwrap();
        CurrentTheme::dark().validate().unwrap();
    }

    #[test]
    fn test_disabled_roles_are_translucent_on_surface() {
        let theme = CurrentTheme::light();
        let on_surface = theme.color(ColorRole::OnSurface).unwrap();
        let disabled = theme.color(ColorRole::OnSurfaceDisabled).unwrap();
        assert!(disabled.same_as(&on_surface.with_alpha(0.38).unwrap()));
    }
}

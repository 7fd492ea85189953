//! Checkbox styles
//!
//! iOS-style checkbox: a single glyph whose opacity tracks the status. The
//! glyph color comes from the shared selection-control rules.
//!
//! # Example
//!
//! ```rust
//! use swatch_components::prelude::*;
//! use swatch_core::ScaleResolver;
//! use swatch_theme::{ColorRole, ThemePreset};
//!
//! let theme = ThemePreset::CurrentLight.theme();
//! let scale = ScaleResolver::default();
//! let cx = StyleContext::new(&theme, &scale);
//!
//! let style = Checkbox::new(ToggleStatus::Checked).resolve(&cx).unwrap();
//! assert_eq!(style.colors.foreground, theme.color(ColorRole::OnSecondaryContainer).unwrap());
//! assert_eq!(style.mark_opacity, 1.0);
//! ```

use serde::Serialize;
use swatch_core::{Color, Result};

use super::selection::resolve_selection_colors;
use crate::style::{ComponentVisualState, ResolvedStyle, Resolve, StyleContext, ToggleStatus};

/// Glyph drawn for the indeterminate status
pub const INDETERMINATE_GLYPH: &str = "checkbox-marked";
/// Glyph drawn for checked and unchecked statuses
pub const OUTLINE_GLYPH: &str = "checkbox-blank-outline";

/// Checkbox props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Checkbox {
    status: ToggleStatus,
    disabled: bool,
    color: Option<Color>,
}

impl Checkbox {
    pub fn new(status: ToggleStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark color override; ignored while disabled
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl From<ComponentVisualState> for Checkbox {
    fn from(state: ComponentVisualState) -> Self {
        Self {
            status: state.status,
            disabled: state.disabled,
            color: state.custom_color,
        }
    }
}

/// Resolved checkbox style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxStyle {
    pub colors: ResolvedStyle,
    pub glyph: &'static str,
    /// 1 when checked or indeterminate, otherwise 0
    pub mark_opacity: f32,
    pub border_radius: f32,
    pub padding: f32,
    pub icon_size: f32,
}

impl Resolve for Checkbox {
    type Style = CheckboxStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<CheckboxStyle> {
        let colors = resolve_selection_colors(cx, self.status, self.disabled, self.color)?;

        Ok(CheckboxStyle {
            colors,
            glyph: match self.status {
                ToggleStatus::Indeterminate => INDETERMINATE_GLYPH,
                ToggleStatus::Checked | ToggleStatus::Unchecked => OUTLINE_GLYPH,
            },
            mark_opacity: if self.status.is_on() { 1.0 } else { 0.0 },
            border_radius: cx.ms(18.0)?,
            padding: cx.ms(6.0)?,
            icon_size: cx.spacing().x(6),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ScaleResolver;
    use swatch_theme::{ColorRole, ThemePreset};

    fn resolve(preset: ThemePreset, checkbox: Checkbox) -> CheckboxStyle {
        let theme = preset.theme();
        let scale = ScaleResolver::default();
        checkbox.resolve(&StyleContext::new(&theme, &scale)).unwrap()
    }

    #[test]
    fn test_disabled_beats_checked() {
        for preset in ThemePreset::all() {
            for status in [
                ToggleStatus::Unchecked,
                ToggleStatus::Checked,
                ToggleStatus::Indeterminate,
            ] {
                let disabled = resolve(*preset, Checkbox::new(status).disabled(true));
                let baseline =
                    resolve(*preset, Checkbox::new(ToggleStatus::Unchecked).disabled(true));
                assert_eq!(disabled.colors.foreground, baseline.colors.foreground);
            }
        }
    }

    #[test]
    fn test_disabled_beats_override() {
        let theme = ThemePreset::LegacyLight.theme();
        let style = resolve(
            ThemePreset::LegacyLight,
            Checkbox::new(ToggleStatus::Checked)
                .disabled(true)
                .color(Color::from_hex(0x00FF00)),
        );
        assert_eq!(
            style.colors.foreground,
            theme.color(ColorRole::Disabled).unwrap()
        );
    }

    #[test]
    fn test_override_beats_roles() {
        let green = Color::from_hex(0x00FF00);
        for preset in ThemePreset::all() {
            let style = resolve(*preset, Checkbox::new(ToggleStatus::Checked).color(green));
            assert_eq!(style.colors.foreground, green);
        }
    }

    #[test]
    fn test_legacy_checked_is_tinted_primary() {
        let theme = ThemePreset::LegacyLight.theme();
        let style = resolve(ThemePreset::LegacyLight, Checkbox::new(ToggleStatus::Checked));
        let expected = theme
            .color(ColorRole::Primary)
            .unwrap()
            .with_alpha(0.87)
            .unwrap();
        assert_eq!(style.colors.foreground, expected);
        assert_eq!(
            style.colors.foreground.to_canonical_string(),
            "rgba(98, 0, 238, 0.87)"
        );
    }

    #[test]
    fn test_ripple_is_faded_foreground() {
        let style = resolve(ThemePreset::CurrentLight, Checkbox::new(ToggleStatus::Checked));
        let ripple = style.colors.ripple.unwrap();
        assert_eq!(
            (ripple.r, ripple.g, ripple.b),
            (
                style.colors.foreground.r,
                style.colors.foreground.g,
                style.colors.foreground.b
            )
        );
        assert!((ripple.a - 0.68).abs() < 1e-6);
    }

    #[test]
    fn test_glyph_and_opacity() {
        let unchecked = resolve(ThemePreset::CurrentLight, Checkbox::new(ToggleStatus::Unchecked));
        assert_eq!(unchecked.mark_opacity, 0.0);
        assert_eq!(unchecked.glyph, OUTLINE_GLYPH);

        let mixed = resolve(
            ThemePreset::CurrentLight,
            Checkbox::new(ToggleStatus::Indeterminate),
        );
        assert_eq!(mixed.mark_opacity, 1.0);
        assert_eq!(mixed.glyph, INDETERMINATE_GLYPH);
        assert_eq!(mixed.icon_size, 24.0);
        assert_eq!(mixed.border_radius, 18.0);
    }
}

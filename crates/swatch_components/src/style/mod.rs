//! Shared inputs and outputs of the style resolvers
//!
//! Every resolver is a pure function of a [`StyleContext`] (theme plus
//! device scale) and the component's current state. Nothing is cached and
//! nothing is read from globals.

mod elevation;
mod fragment;

pub use elevation::resolve_surface_color;
pub use fragment::{Align, CornerRadii, StyleFragment, StyleStack};

use serde::Serialize;
use swatch_core::{Color, Result, ScaleResolver};
use swatch_theme::{ColorRole, ElevationLevel, FontDescriptor, FontRole, SpacingScale, Theme};

/// Read-only inputs shared by all resolvers
#[derive(Clone, Copy, Debug)]
pub struct StyleContext<'a> {
    theme: &'a Theme,
    scale: &'a ScaleResolver,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a Theme, scale: &'a ScaleResolver) -> Self {
        Self { theme, scale }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn scale(&self) -> &'a ScaleResolver {
        self.scale
    }

    pub fn is_current(&self) -> bool {
        self.theme.is_current()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn color(&self, role: ColorRole) -> Result<Color> {
        self.theme.color(role)
    }

    pub fn font(&self, role: FontRole) -> Result<FontDescriptor> {
        self.theme.font(role).cloned()
    }

    pub fn spacing(&self) -> &'a SpacingScale {
        self.theme.spacing()
    }

    /// Moderately scaled logical size
    pub fn ms(&self, size: f32) -> Result<f32> {
        self.scale.moderate_scale(size)
    }

    /// Moderately scaled negative offset: the magnitude is scaled, then negated
    pub fn ms_offset(&self, offset: f32) -> Result<f32> {
        let scaled = self.scale.moderate_scale(offset.abs())?;
        Ok(if offset < 0.0 { -scaled } else { scaled })
    }

    /// Device-adjusted roundness unit
    pub fn roundness(&self) -> Result<f32> {
        self.ms(self.theme.roundness())
    }

    /// Plain white or black, whichever contrasts with the theme background
    pub fn contrast_base(&self) -> Color {
        if self.theme.is_dark() {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }
}

/// Anything that maps its current state plus a context to a style
pub trait Resolve {
    type Style;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<Self::Style>;
}

/// Toggle state of a selection control
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleStatus {
    #[default]
    Unchecked,
    Checked,
    /// Only container controls (checkbox) expose this
    Indeterminate,
}

impl ToggleStatus {
    /// Checked or indeterminate
    pub fn is_on(&self) -> bool {
        !matches!(self, ToggleStatus::Unchecked)
    }
}

impl From<bool> for ToggleStatus {
    fn from(checked: bool) -> Self {
        if checked {
            ToggleStatus::Checked
        } else {
            ToggleStatus::Unchecked
        }
    }
}

/// Per-call visual state of a component; never stored
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComponentVisualState {
    pub status: ToggleStatus,
    pub active: bool,
    pub disabled: bool,
    pub elevated: bool,
    pub elevation: ElevationLevel,
    pub custom_color: Option<Color>,
}

impl ComponentVisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.status = checked.into();
        self
    }

    pub fn status(mut self, status: ToggleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    pub fn elevation(mut self, level: ElevationLevel) -> Self {
        self.elevation = level;
        self
    }

    pub fn custom_color(mut self, color: Color) -> Self {
        self.custom_color = Some(color);
        self
    }
}

/// Common color output of a state-dependent resolver
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub foreground: Color,
    pub background: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ripple: Option<Color>,
}

impl ResolvedStyle {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            border_color: None,
            border_width: None,
            ripple: None,
        }
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border_color = Some(color);
        self.border_width = Some(width);
        self
    }

    pub fn ripple(mut self, color: Color) -> Self {
        self.ripple = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::DeviceMetrics;
    use swatch_theme::ThemePreset;

    #[test]
    fn test_negative_offsets_scale_magnitude() {
        let theme = ThemePreset::CurrentLight.theme();
        let scale = ScaleResolver::new(DeviceMetrics::new(700.0, 1400.0, 2.0).unwrap());
        let cx = StyleContext::new(&theme, &scale);

        assert_eq!(cx.ms_offset(-18.0).unwrap(), -cx.ms(18.0).unwrap());
        assert_eq!(cx.ms_offset(6.0).unwrap(), cx.ms(6.0).unwrap());
    }

    #[test]
    fn test_toggle_status() {
        assert!(ToggleStatus::Indeterminate.is_on());
        assert!(!ToggleStatus::Unchecked.is_on());
        assert_eq!(ToggleStatus::from(true), ToggleStatus::Checked);
    }

    #[test]
    fn test_visual_state_builder() {
        let state = ComponentVisualState::new().checked(true).disabled(true);
        assert_eq!(state.status, ToggleStatus::Checked);
        assert!(state.disabled);
        assert!(state.custom_color.is_none());
    }
}

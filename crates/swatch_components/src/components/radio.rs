//! Radio button styles
//!
//! iOS-style radio: a check glyph shown only while selected. Radios have no
//! indeterminate status.

use serde::Serialize;
use swatch_core::{Color, Result};

use super::selection::resolve_selection_colors;
use crate::style::{ComponentVisualState, ResolvedStyle, Resolve, StyleContext, ToggleStatus};

pub const CHECK_GLYPH: &str = "check";
const ICON_SIZE: f32 = 24.0;

/// Radio button props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadioButton {
    checked: bool,
    disabled: bool,
    color: Option<Color>,
}

impl RadioButton {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl From<ComponentVisualState> for RadioButton {
    /// Indeterminate collapses to checked
    fn from(state: ComponentVisualState) -> Self {
        Self {
            checked: state.status.is_on(),
            disabled: state.disabled,
            color: state.custom_color,
        }
    }
}

/// Resolved radio button style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioButtonStyle {
    pub colors: ResolvedStyle,
    pub glyph: &'static str,
    pub mark_opacity: f32,
    pub border_radius: f32,
    pub padding: f32,
    pub icon_size: f32,
}

impl Resolve for RadioButton {
    type Style = RadioButtonStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<RadioButtonStyle> {
        let status = ToggleStatus::from(self.checked);
        let colors = resolve_selection_colors(cx, status, self.disabled, self.color)?;

        Ok(RadioButtonStyle {
            colors,
            glyph: CHECK_GLYPH,
            mark_opacity: if self.checked { 1.0 } else { 0.0 },
            border_radius: cx.ms(18.0)?,
            padding: cx.ms(6.0)?,
            icon_size: ICON_SIZE,
        })
    }
}

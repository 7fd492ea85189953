//! Toggle button styles

use serde::Serialize;
use swatch_core::{Color, Result};
use swatch_theme::{ColorRole, OpacityToken};

use crate::style::{ComponentVisualState, ResolvedStyle, Resolve, StyleContext};

/// Legacy checked background over dark themes
const LEGACY_DARK_CHECKED: Color = Color::rgba(1.0, 1.0, 1.0, 0.12);
/// Legacy checked background over light themes
const LEGACY_LIGHT_CHECKED: Color = Color::rgba(0.0, 0.0, 0.0, 0.08);
const LEGACY_ICON_ALPHA: f32 = 0.54;
const RIPPLE_ALPHA: f32 = 0.12;

/// Checked-state background of a toggle button
pub fn toggle_button_color(cx: &StyleContext<'_>, checked: bool) -> Result<Color> {
    if !checked {
        return Ok(Color::TRANSPARENT);
    }
    if cx.is_current() {
        let level2 = cx.theme().opacity().get(OpacityToken::Level2);
        return cx.color(ColorRole::OnSecondaryContainer)?.with_alpha(level2);
    }
    Ok(if cx.is_dark() {
        LEGACY_DARK_CHECKED
    } else {
        LEGACY_LIGHT_CHECKED
    })
}

/// Toggle button props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToggleButton {
    checked: bool,
    disabled: bool,
    icon_color: Option<Color>,
    size: Option<f32>,
}

impl ToggleButton {
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

    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    fn foreground(&self, cx: &StyleContext<'_>) -> Result<Color> {
        if self.disabled {
            return if cx.is_current() {
                cx.color(ColorRole::OnSurfaceDisabled)
            } else {
                cx.color(ColorRole::Disabled)
            };
        }
        if let Some(color) = self.icon_color {
            return Ok(color);
        }
        match (cx.is_current(), self.checked) {
            (true, true) => cx.color(ColorRole::OnSecondaryContainer),
            (true, false) => cx.color(ColorRole::OnSurfaceVariant),
            (false, true) => cx.color(ColorRole::Primary),
            (false, false) => cx.color(ColorRole::Text)?.with_alpha(LEGACY_ICON_ALPHA),
        }
    }
}

impl From<ComponentVisualState> for ToggleButton {
    fn from(state: ComponentVisualState) -> Self {
        Self {
            checked: state.status.is_on(),
            disabled: state.disabled,
            icon_color: state.custom_color,
            size: None,
        }
    }
}

/// Resolved toggle button style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleButtonStyle {
    pub colors: ResolvedStyle,
    pub border_radius: f32,
    pub icon_size: f32,
}

impl Resolve for ToggleButton {
    type Style = ToggleButtonStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<ToggleButtonStyle> {
        let foreground = self.foreground(cx)?;
        let background = toggle_button_color(cx, self.checked)?;
        let ripple = foreground.with_alpha(RIPPLE_ALPHA)?;

        tracing::trace!(
            checked = self.checked,
            disabled = self.disabled,
            %background,
            "resolved toggle button"
        );
        Ok(ToggleButtonStyle {
            colors: ResolvedStyle::new(foreground, background).ripple(ripple),
            border_radius: cx.roundness()?,
            icon_size: self.size.unwrap_or_else(|| cx.spacing().x(6)),
        })
    }
}

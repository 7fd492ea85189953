//! Color rules shared by the iOS-style selection controls

use swatch_core::{Color, Result};
use swatch_theme::ColorRole;

use crate::style::{ResolvedStyle, StyleContext, ToggleStatus};

/// Alpha of the legacy checked tint over primary
pub const LEGACY_CHECKED_ALPHA: f32 = 0.87;
/// Alpha of the legacy unchecked tint over the text color
pub const LEGACY_UNCHECKED_ALPHA: f32 = 0.54;
/// Share of the mark's opacity removed for the press ripple
pub const RIPPLE_FADE: f32 = 0.32;

/// Mark color for a selection control.
///
/// Disabled wins over everything, including a caller color. A caller color
/// wins over every computed role.
pub fn selection_control_color(
    cx: &StyleContext<'_>,
    status: ToggleStatus,
    disabled: bool,
    custom_color: Option<Color>,
) -> Result<Color> {
    if disabled {
        return if cx.is_current() {
            cx.color(ColorRole::OnSurfaceDisabled)
        } else {
            cx.color(ColorRole::Disabled)
        };
    }

    if let Some(color) = custom_color {
        return Ok(color);
    }

    match (cx.is_current(), status.is_on()) {
        (true, true) => cx.color(ColorRole::OnSecondaryContainer),
        (true, false) => cx.color(ColorRole::OnSurfaceVariant),
        (false, true) => cx.color(ColorRole::Primary)?.with_alpha(LEGACY_CHECKED_ALPHA),
        (false, false) => cx.color(ColorRole::Text)?.with_alpha(LEGACY_UNCHECKED_ALPHA),
    }
}

/// Mark color plus a ripple faded from it
pub fn resolve_selection_colors(
    cx: &StyleContext<'_>,
    status: ToggleStatus,
    disabled: bool,
    custom_color: Option<Color>,
) -> Result<ResolvedStyle> {
    let foreground = selection_control_color(cx, status, disabled, custom_color)?;
    let ripple = foreground.fade(RIPPLE_FADE)?;

    tracing::trace!(?status, disabled, %foreground, "resolved selection control colors");
    Ok(ResolvedStyle::new(foreground, Color::TRANSPARENT).ripple(ripple))
}

//! Menu item styles

use serde::Serialize;
use swatch_core::{Color, Result};
use swatch_theme::ColorRole;

use crate::style::{Resolve, StyleContext};

/// Narrowest menu surface
pub const MIN_WIDTH: f32 = 112.0;
/// Widest menu surface
pub const MAX_WIDTH: f32 = 280.0;

const LEGACY_DISABLED_ALPHA: f32 = 0.32;
const LEGACY_TITLE_ALPHA: f32 = 0.87;
const LEGACY_ICON_ALPHA: f32 = 0.54;
const UNDERLAY_ALPHA: f32 = 0.12;

fn disabled_color(cx: &StyleContext<'_>) -> Result<Color> {
    if cx.is_current() {
        cx.color(ColorRole::OnSurfaceDisabled)
    } else {
        cx.contrast_base().with_alpha(LEGACY_DISABLED_ALPHA)
    }
}

/// Widest the item text may grow given the icon layout
pub fn content_max_width(current: bool, icon_width: f32, leading: bool, trailing: bool) -> f32 {
    if current {
        match (leading, trailing) {
            (true, true) => MAX_WIDTH - (2.0 * icon_width + 24.0),
            (true, false) | (false, true) => MAX_WIDTH - (icon_width + 24.0),
            (false, false) => MAX_WIDTH - 12.0,
        }
    } else if leading {
        MAX_WIDTH - (icon_width + 48.0)
    } else {
        MAX_WIDTH - 16.0
    }
}

/// Menu item props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuItem {
    disabled: bool,
    leading_icon: bool,
    trailing_icon: bool,
}

impl MenuItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn leading_icon(mut self, leading: bool) -> Self {
        self.leading_icon = leading;
        self
    }

    /// Ignored on the legacy schema
    pub fn trailing_icon(mut self, trailing: bool) -> Self {
        self.trailing_icon = trailing;
        self
    }
}

/// Resolved menu item style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemStyle {
    pub title_color: Color,
    pub icon_color: Color,
    /// Pressed underlay; legacy items use the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlay_color: Option<Color>,
    pub icon_width: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub content_max_width: f32,
}

impl Resolve for MenuItem {
    type Style = MenuItemStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<MenuItemStyle> {
        let current = cx.is_current();

        let (title_color, icon_color) = if self.disabled {
            let disabled = disabled_color(cx)?;
            (disabled, disabled)
        } else if current {
            (
                cx.color(ColorRole::OnSurface)?,
                cx.color(ColorRole::OnSurfaceVariant)?,
            )
        } else {
            let text = cx.color(ColorRole::Text)?;
            (
                text.with_alpha(LEGACY_TITLE_ALPHA)?,
                text.with_alpha(LEGACY_ICON_ALPHA)?,
            )
        };

        let underlay_color = if current {
            Some(cx.color(ColorRole::Primary)?.with_alpha(UNDERLAY_ALPHA)?)
        } else {
            None
        };

        let icon_width = if current {
            cx.spacing().x(6)
        } else {
            cx.spacing().x(10)
        };

        Ok(MenuItemStyle {
            title_color,
            icon_color,
            underlay_color,
            icon_width,
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
            content_max_width: content_max_width(
                current,
                icon_width,
                self.leading_icon,
                self.trailing_icon,
            ),
        })
    }
}

//! Navigation drawer styles
//!
//! Covers full-width drawer items, the collapsed rail item (current schema
//! only) and titled drawer sections.
//!
//! # Example
//!
//! ```rust
//! use swatch_components::prelude::*;
//! use swatch_core::ScaleResolver;
//! use swatch_theme::ThemePreset;
//!
//! let theme = ThemePreset::LegacyLight.theme();
//! let scale = ScaleResolver::default();
//! let cx = StyleContext::new(&theme, &scale);
//!
//! // The collapsed rail only exists on the current schema
//! assert!(DrawerCollapsedItem::new().resolve(&cx).unwrap().is_none());
//! ```

use serde::Serialize;
use swatch_core::{Color, Result};
use swatch_theme::{ColorRole, FontDescriptor, FontRole};

use crate::style::{ComponentVisualState, Resolve, StyleContext};

const LEGACY_ACTIVE_ALPHA: f32 = 0.12;
const LEGACY_INACTIVE_ALPHA: f32 = 0.68;
const LEGACY_SECTION_TITLE_ALPHA: f32 = 0.54;
const LEGACY_DIVIDER_ALPHA: f32 = 0.12;
const UNDERLAY_MIX: f32 = 0.16;
/// Press-out animation length before the animation scale is applied
const PRESS_OUT_MS: f32 = 150.0;
/// Start scale of an inactive collapsed item's outline
const INACTIVE_SCALE: f32 = 0.5;

/// Drawer item props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerItem {
    active: bool,
    has_icon: bool,
}

impl DrawerItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn icon(mut self, has_icon: bool) -> Self {
        self.has_icon = has_icon;
        self
    }
}

impl From<ComponentVisualState> for DrawerItem {
    fn from(state: ComponentVisualState) -> Self {
        Self {
            active: state.active,
            has_icon: false,
        }
    }
}

/// Resolved drawer item style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerItemStyle {
    pub background: Color,
    /// Icon and label color
    pub content_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlay_color: Option<Color>,
    pub border_radius: f32,
    pub label_margin: f32,
    pub font: FontDescriptor,
    pub icon_size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    pub margin_horizontal: f32,
    pub margin_vertical: f32,
}

impl Resolve for DrawerItem {
    type Style = DrawerItemStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<DrawerItemStyle> {
        let spacing = cx.spacing();
        let current = cx.is_current();

        let background = match (self.active, current) {
            (false, _) => Color::TRANSPARENT,
            (true, true) => cx.color(ColorRole::SecondaryContainer)?,
            (true, false) => cx.color(ColorRole::Primary)?.with_alpha(LEGACY_ACTIVE_ALPHA)?,
        };

        let content_color = match (self.active, current) {
            (true, true) => cx.color(ColorRole::OnSecondaryContainer)?,
            (true, false) => cx.color(ColorRole::Primary)?,
            (false, true) => cx.color(ColorRole::OnSurfaceVariant)?,
            (false, false) => cx.color(ColorRole::Text)?.with_alpha(LEGACY_INACTIVE_ALPHA)?,
        };

        let label_margin = match (self.has_icon, current) {
            (false, _) => 0.0,
            (true, true) => spacing.x(3),
            (true, false) => spacing.x(8),
        };

        let unit = if current { cx.ms(7.0)? } else { cx.ms(1.0)? };

        let underlay_color = if current {
            Some(background.mix(cx.color(ColorRole::OnSecondaryContainer)?, UNDERLAY_MIX)?)
        } else {
            None
        };

        let (height, margin_horizontal, margin_vertical) = if current {
            (Some(spacing.x(14)), spacing.x(3), 0.0)
        } else {
            (None, cx.ms(10.0)?, spacing.x(1))
        };

        let font = if current {
            cx.font(FontRole::LabelLarge)?
        } else {
            cx.font(FontRole::Medium)?
        };

        tracing::trace!(active = self.active, %background, "resolved drawer item");
        Ok(DrawerItemStyle {
            background,
            content_color,
            underlay_color,
            border_radius: unit * cx.theme().roundness(),
            label_margin,
            font,
            icon_size: spacing.x(6),
            height,
            margin_horizontal,
            margin_vertical,
        })
    }
}

/// Badge on a collapsed drawer item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// Plain dot
    Dot,
    /// Numbered bubble
    Count(u32),
}

/// Collapsed (rail) drawer item props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerCollapsedItem {
    active: bool,
    has_label: bool,
    badge: Option<Badge>,
}

impl DrawerCollapsedItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn label(mut self, has_label: bool) -> Self {
        self.has_label = has_label;
        self
    }

    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Resolved collapsed drawer item style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerCollapsedItemStyle {
    pub background: Color,
    pub label_color: Color,
    pub icon_color: Color,
    pub item_size: f32,
    pub outline_height: f32,
    pub outline_radius: f32,
    pub icon_size: f32,
    /// Offset centering the icon inside its outline
    pub icon_padding: f32,
    pub wrapper_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_size: Option<f32>,
    /// Outline scale before the press-out animation runs
    pub scale_start: f32,
    pub press_out_duration_ms: f32,
}

impl Resolve for DrawerCollapsedItem {
    type Style = Option<DrawerCollapsedItemStyle>;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<Option<DrawerCollapsedItemStyle>> {
        if !cx.is_current() {
            return Ok(None);
        }
        let spacing = cx.spacing();

        let (background, label_color, icon_color) = if self.active {
            (
                cx.color(ColorRole::SecondaryContainer)?,
                cx.color(ColorRole::OnSurface)?,
                cx.color(ColorRole::OnSecondaryContainer)?,
            )
        } else {
            let variant = cx.color(ColorRole::OnSurfaceVariant)?;
            (Color::TRANSPARENT, variant, variant)
        };

        let item_size = spacing.xxx_large;
        let outline_height = if self.has_label {
            spacing.xx_medium
        } else {
            item_size
        };
        let icon_size = spacing.medium;

        let badge_size = match self.badge {
            None => None,
            Some(Badge::Dot) => Some(spacing.xxx_small),
            Some(Badge::Count(_)) => Some(cx.ms(2.0)? * spacing.xxx_small),
        };

        Ok(Some(DrawerCollapsedItemStyle {
            background,
            label_color,
            icon_color,
            item_size,
            outline_height,
            outline_radius: item_size / 2.0,
            icon_size,
            icon_padding: (outline_height - icon_size) / 2.0,
            wrapper_width: cx.ms(80.0)?,
            badge_size,
            scale_start: if self.active { 1.0 } else { INACTIVE_SCALE },
            press_out_duration_ms: PRESS_OUT_MS * cx.theme().animation_scale(),
        }))
    }
}

/// Drawer section props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerSection;

/// Resolved drawer section style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerSectionStyle {
    pub title_color: Color,
    pub title_margin: f32,
    pub title_font: FontDescriptor,
    pub title_height: f32,
    pub divider_color: Color,
    pub margin_bottom: f32,
}

impl Resolve for DrawerSection {
    type Style = DrawerSectionStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<DrawerSectionStyle> {
        let spacing = cx.spacing();
        if cx.is_current() {
            Ok(DrawerSectionStyle {
                title_color: cx.color(ColorRole::OnSurfaceVariant)?,
                title_margin: spacing.x(7),
                title_font: cx.font(FontRole::TitleSmall)?,
                title_height: spacing.x(14),
                divider_color: cx.color(ColorRole::Outline)?,
                margin_bottom: spacing.x(1),
            })
        } else {
            Ok(DrawerSectionStyle {
                title_color: cx
                    .color(ColorRole::Text)?
                    .with_alpha(LEGACY_SECTION_TITLE_ALPHA)?,
                title_margin: spacing.x(4),
                title_font: cx.font(FontRole::Medium)?,
                title_height: spacing.x(10),
                divider_color: cx.contrast_base().with_alpha(LEGACY_DIVIDER_ALPHA)?,
                margin_bottom: spacing.x(1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ScaleResolver;
    use swatch_theme::ThemePreset;

    fn with_cx<R>(preset: ThemePreset, f: impl FnOnce(&StyleContext<'_>) -> R) -> R {
        let theme = preset.theme();
        let scale = ScaleResolver::default();
        f(&StyleContext::new(&theme, &scale))
    }

    #[test]
    fn test_item_from_visual_state() {
        with_cx(ThemePreset::CurrentDark, |cx| {
            let state = ComponentVisualState::new().active(true);
            let from_state = DrawerItem::from(state).resolve(cx).unwrap();
            let built = DrawerItem::new().active(true).resolve(cx).unwrap();
            assert_eq!(from_state, built);
            assert_eq!(
                from_state.background,
                cx.color(ColorRole::SecondaryContainer).unwrap()
            );
        });
    }

    #[test]
    fn test_active_item_colors() {
        with_cx(ThemePreset::CurrentLight, |cx| {
            let style = DrawerItem::new().active(true).icon(true).resolve(cx).unwrap();
            assert_eq!(style.background, cx.color(ColorRole::SecondaryContainer).unwrap());
            assert_eq!(style.content_color, cx.color(ColorRole::OnSecondaryContainer).unwrap());
            assert_eq!(style.label_margin, 12.0);
            assert_eq!(style.border_radius, 28.0);
            assert!(style.underlay_color.is_some());
        });
        with_cx(ThemePreset::LegacyLight, |cx| {
            let style = DrawerItem::new().resolve(cx).unwrap();
            assert_eq!(style.background, Color::TRANSPARENT);
            assert_eq!(style.content_color.to_canonical_string(), "rgba(0, 0, 0, 0.68)");
            assert_eq!(style.label_margin, 0.0);
            assert_eq!(style.underlay_color, None);
            assert_eq!(style.font.family, "sans-serif-medium");
        });
    }

    #[test]
    fn test_current_underlay_mixes_toward_on_container() {
        with_cx(ThemePreset::CurrentDark, |cx| {
            let style = DrawerItem::new().active(true).resolve(cx).unwrap();
            let expected = cx
                .color(ColorRole::SecondaryContainer)
                .unwrap()
                .mix(cx.color(ColorRole::OnSecondaryContainer).unwrap(), 0.16)
                .unwrap();
            assert_eq!(style.underlay_color, Some(expected));
        });
    }

    #[test]
    fn test_collapsed_item_is_current_only() {
        with_cx(ThemePreset::LegacyDark, |cx| {
            assert_eq!(DrawerCollapsedItem::new().resolve(cx).unwrap(), None);
        });
        with_cx(ThemePreset::CurrentLight, |cx| {
            let style = DrawerCollapsedItem::new()
                .label(true)
                .badge(Badge::Count(3))
                .resolve(cx)
                .unwrap()
                .unwrap();
            assert_eq!(style.icon_padding, 4.0);
            assert_eq!(style.badge_size, Some(16.0));
            assert_eq!(style.scale_start, 0.5);
            assert_eq!(style.outline_radius, 28.0);
            assert_eq!(style.press_out_duration_ms, 150.0);

            let unlabeled = DrawerCollapsedItem::new().active(true).resolve(cx).unwrap().unwrap();
            assert_eq!(unlabeled.icon_padding, 16.0);
            assert_eq!(unlabeled.scale_start, 1.0);
        });
    }

    #[test]
    fn test_press_out_follows_animation_scale() {
        let theme = ThemePreset::CurrentDark
            .theme()
            .derive()
            .animation_scale(0.5)
            .build()
            .unwrap();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);
        let style = DrawerCollapsedItem::new().resolve(&cx).unwrap().unwrap();
        assert_eq!(style.press_out_duration_ms, 75.0);
    }

    #[test]
    fn test_section_styles() {
        with_cx(ThemePreset::LegacyDark, |cx| {
            let style = DrawerSection.resolve(cx).unwrap();
            assert_eq!(style.divider_color.to_canonical_string(), "rgba(255, 255, 255, 0.12)");
            assert_eq!(style.title_margin, 16.0);
            assert_eq!(style.title_height, 40.0);
        });
        with_cx(ThemePreset::CurrentLight, |cx| {
            let style = DrawerSection.resolve(cx).unwrap();
            assert_eq!(style.divider_color, cx.color(ColorRole::Outline).unwrap());
            assert_eq!(style.title_height, 56.0);
        });
    }
}

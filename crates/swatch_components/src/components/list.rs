//! List item, list icon and list image styles

use serde::Serialize;
use swatch_core::{Color, Result};
use swatch_theme::ColorRole;

use crate::style::{Align, Resolve, StyleContext, StyleFragment};

const LEGACY_TITLE_ALPHA: f32 = 0.87;
const LEGACY_DESCRIPTION_ALPHA: f32 = 0.54;
/// Gap between an accessory and the item text
const ACCESSORY_GAP: f32 = 16.0;

/// Title and description colors of a list row
pub fn list_item_colors(cx: &StyleContext<'_>) -> Result<(Color, Color)> {
    if cx.is_current() {
        Ok((
            cx.color(ColorRole::OnSurface)?,
            cx.color(ColorRole::OnSurfaceVariant)?,
        ))
    } else {
        let text = cx.color(ColorRole::Text)?;
        Ok((
            text.with_alpha(LEGACY_TITLE_ALPHA)?,
            text.with_alpha(LEGACY_DESCRIPTION_ALPHA)?,
        ))
    }
}

fn current_accessory(align_to_top: bool) -> StyleFragment {
    StyleFragment::new()
        .margin_left(ACCESSORY_GAP)
        .align_self(if align_to_top {
            Align::FlexStart
        } else {
            Align::Center
        })
}

/// Style handed to the leading accessory
pub fn left_accessory_style(
    current: bool,
    align_to_top: bool,
    has_description: bool,
) -> StyleFragment {
    let mut style = StyleFragment::new().margin_left(0.0).margin_right(ACCESSORY_GAP);
    if !has_description {
        style = style.margin_vertical(0.0);
    }
    if current {
        style = style
            .merge(&current_accessory(align_to_top))
            .margin_right(0.0);
    }
    style
}

/// Style handed to the trailing accessory
pub fn right_accessory_style(
    current: bool,
    align_to_top: bool,
    has_description: bool,
) -> StyleFragment {
    let mut style = StyleFragment::new().margin_right(0.0);
    if !has_description {
        style = style.margin_vertical(0.0);
    }
    if current {
        style = style.merge(&current_accessory(align_to_top));
    }
    style
}

/// Padding on each side; unset sides are zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// List item props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListItem {
    has_description: bool,
    description_lines: usize,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, lines: usize) -> Self {
        self.has_description = lines > 0;
        self.description_lines = lines;
        self
    }

    /// Accessories pin to the top once the description wraps (current only)
    pub fn align_to_top(&self, cx: &StyleContext<'_>) -> bool {
        cx.is_current() && self.description_lines >= 2
    }
}

/// Resolved list item style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemStyle {
    pub title_color: Color,
    pub description_color: Color,
    pub title_font_size: f32,
    pub description_font_size: f32,
    pub container_padding: Insets,
    pub row_margin_vertical: f32,
    pub item_padding_left: f32,
    pub item_margin_vertical: f32,
    pub left: StyleFragment,
    pub right: StyleFragment,
}

impl Resolve for ListItem {
    type Style = ListItemStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<ListItemStyle> {
        let (title_color, description_color) = list_item_colors(cx)?;
        let spacing = cx.spacing();
        let current = cx.is_current();
        let align_to_top = self.align_to_top(cx);

        let (container_padding, row_margin_vertical, item_padding_left, item_margin_vertical) =
            if current {
                let padding = Insets {
                    top: spacing.x(2),
                    bottom: spacing.x(2),
                    right: spacing.x(6),
                    left: 0.0,
                };
                (padding, cx.ms(6.0)?, spacing.x(4), 0.0)
            } else {
                (Insets::all(spacing.x(2)), 0.0, spacing.x(2), cx.ms(6.0)?)
            };

        Ok(ListItemStyle {
            title_color,
            description_color,
            title_font_size: spacing.x(4),
            description_font_size: cx.ms(14.0)?,
            container_padding,
            row_margin_vertical,
            item_padding_left,
            item_margin_vertical,
            left: left_accessory_style(current, align_to_top, self.has_description),
            right: right_accessory_style(current, align_to_top, self.has_description),
        })
    }
}

/// Box around a list icon
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIconStyle {
    pub icon_size: f32,
    /// Legacy icons sit in a fixed square box with a margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_size: Option<f32>,
}

/// List icon props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListIcon;

impl Resolve for ListIcon {
    type Style = ListIconStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<ListIconStyle> {
        let spacing = cx.spacing();
        let (margin, box_size) = if cx.is_current() {
            (None, None)
        } else {
            (Some(spacing.x(2)), Some(spacing.x(10)))
        };
        Ok(ListIconStyle {
            icon_size: spacing.x(6),
            margin,
            box_size,
        })
    }
}

/// List image variant
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListImageVariant {
    #[default]
    Image,
    Video,
    Flag,
}

/// Resolved list image size
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListImageStyle {
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
}

/// List image props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListImage {
    variant: ListImageVariant,
}

impl ListImage {
    pub fn new(variant: ListImageVariant) -> Self {
        Self { variant }
    }
}

impl Resolve for ListImage {
    type Style = ListImageStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<ListImageStyle> {
        let square = |side: f32| -> Result<ListImageStyle> {
            let side = cx.ms(side)?;
            Ok(ListImageStyle {
                width: side,
                height: side,
                margin_left: None,
            })
        };

        match self.variant {
            ListImageVariant::Image => square(76.0),
            ListImageVariant::Flag => square(40.0),
            ListImageVariant::Video if cx.is_current() => Ok(ListImageStyle {
                width: cx.ms(114.0)?,
                height: cx.spacing().x(16),
                margin_left: Some(0.0),
            }),
            ListImageVariant::Video => Ok(ListImageStyle {
                width: cx.ms(100.0)?,
                height: cx.ms(64.0)?,
                margin_left: Some(0.0),
            }),
        }
    }
}

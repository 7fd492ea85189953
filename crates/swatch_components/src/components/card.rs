//! Card and card cover styles

use serde::{Deserialize, Serialize};
use swatch_core::{Color, Result};
use swatch_theme::ColorRole;

use crate::style::{CornerRadii, Resolve, StyleContext};

/// Placeholder fill behind a cover image while it loads
pub const COVER_PLACEHOLDER: Color = Color::rgb(238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0);

const LEGACY_BORDER_ALPHA: f32 = 0.12;

/// Card surface treatment
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardMode {
    #[default]
    Elevated,
    Outlined,
    Contained,
}

/// Card props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Card {
    mode: CardMode,
}

impl Card {
    pub fn new(mode: CardMode) -> Self {
        Self { mode }
    }
}

/// Resolved card colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    /// Unset when the surface comes from the elevation resolver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub border_color: Color,
}

impl Resolve for Card {
    type Style = CardStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<CardStyle> {
        if cx.is_current() {
            let background = match self.mode {
                CardMode::Contained => Some(cx.color(ColorRole::SurfaceVariant)?),
                CardMode::Outlined => Some(cx.color(ColorRole::Surface)?),
                CardMode::Elevated => None,
            };
            Ok(CardStyle {
                background,
                border_color: cx.color(ColorRole::Outline)?,
            })
        } else {
            Ok(CardStyle {
                background: None,
                border_color: cx.contrast_base().with_alpha(LEGACY_BORDER_ALPHA)?,
            })
        }
    }
}

/// Card cover props: where the cover sits among the card's children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardCover {
    index: Option<usize>,
    total: Option<usize>,
}

impl CardCover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, index: usize, total: usize) -> Self {
        self.index = Some(index);
        self.total = Some(total);
        self
    }

    /// Corner radii for this position; `None` leaves the cover square
    pub fn radii(&self, cx: &StyleContext<'_>) -> Option<CornerRadii> {
        let roundness = cx.theme().roundness();
        if cx.is_current() {
            return Some(CornerRadii::all(3.0 * roundness));
        }
        match (self.index, self.total) {
            (Some(0), Some(1)) => Some(CornerRadii::all(roundness)),
            (Some(0), _) => Some(CornerRadii::top(roundness)),
            (Some(index), Some(total)) if index + 1 == total => Some(CornerRadii {
                bottom_left: roundness,
                ..CornerRadii::default()
            }),
            _ => None,
        }
    }
}

/// Resolved card cover style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCoverStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<CornerRadii>,
    pub height: f32,
    pub background: Color,
    pub padding: f32,
}

impl Resolve for CardCover {
    type Style = CardCoverStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<CardCoverStyle> {
        Ok(CardCoverStyle {
            corner_radii: self.radii(cx),
            height: cx.ms(195.0)?,
            background: COVER_PLACEHOLDER,
            padding: cx.spacing().x_small,
        })
    }
}

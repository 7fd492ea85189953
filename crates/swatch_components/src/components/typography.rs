//! Styled text variants
//!
//! Caption, headline, paragraph, subheading and title carry their own
//! metrics. The text color is the theme's base text role at the variant's
//! alpha; legacy themes also pin the variant's font family.
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
//! let caption = StyledText::new(TextVariant::Caption).resolve(&cx).unwrap();
//! assert_eq!(caption.color.to_canonical_string(), "rgba(0, 0, 0, 0.54)");
//! assert_eq!(caption.font_size, 12.0);
//! ```

use serde::{Deserialize, Serialize};
use swatch_core::{Color, Result};
use swatch_theme::{ColorRole, FontRole, FontWeight};

use crate::style::{Resolve, StyleContext};

/// Styled text variant
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Caption,
    Headline,
    Paragraph,
    Subheading,
    Title,
}

impl TextVariant {
    pub fn all() -> &'static [TextVariant] {
        &[
            TextVariant::Caption,
            TextVariant::Headline,
            TextVariant::Paragraph,
            TextVariant::Subheading,
            TextVariant::Title,
        ]
    }

    /// Opacity applied to the base text color
    pub fn alpha(&self) -> f32 {
        match self {
            TextVariant::Caption => 0.54,
            _ => 0.87,
        }
    }

    /// Legacy font family role
    pub fn family(&self) -> FontRole {
        match self {
            TextVariant::Title => FontRole::Medium,
            _ => FontRole::Regular,
        }
    }
}

/// Resolved text style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    pub font_size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub margin_vertical: f32,
}

/// Styled text props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyledText {
    variant: TextVariant,
}

impl StyledText {
    pub fn new(variant: TextVariant) -> Self {
        Self { variant }
    }
}

impl Resolve for StyledText {
    type Style = TextStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<TextStyle> {
        let spacing = cx.spacing();
        let base = if cx.is_current() {
            cx.color(ColorRole::OnSurface)?
        } else {
            cx.color(ColorRole::Text)?
        };

        let (font_size, line_height, letter_spacing) = match self.variant {
            TextVariant::Caption => (spacing.x(3), spacing.x(5), cx.ms(0.4)?),
            TextVariant::Headline => (spacing.x(6), spacing.x(8), 0.0),
            TextVariant::Paragraph => (cx.ms(14.0)?, spacing.x(5), cx.ms(0.25)?),
            TextVariant::Subheading => (spacing.x(4), spacing.x(6), cx.ms(0.5)?),
            TextVariant::Title => (spacing.x(5), cx.ms(30.0)?, cx.ms(0.15)?),
        };

        let (font_family, font_weight) = if cx.is_current() {
            (None, None)
        } else {
            let font = cx.font(self.variant.family())?;
            (Some(font.family), Some(font.weight))
        };

        Ok(TextStyle {
            color: base.with_alpha(self.variant.alpha())?,
            font_family,
            font_weight,
            font_size,
            line_height,
            letter_spacing,
            margin_vertical: cx.ms(2.0)?,
        })
    }
}

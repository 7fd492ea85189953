//! Text input styles
//!
//! Flat inputs draw an underline indicator over a filled background;
//! outlined inputs draw a border and cut the label out of it with a
//! [`LabelBackground`] while the label is minimized.

use serde::Serialize;
use swatch_animation::Interpolation;
use swatch_core::{Color, Result};
use swatch_theme::ColorRole;

use crate::style::{Resolve, StyleContext};

const LEGACY_DISABLED_TEXT_ALPHA: f32 = 0.54;
const CURRENT_DISABLED_FILL_ALPHA: f32 = 0.04;
const SELECTION_ALPHA: f32 = 0.54;
/// Roundness above which the outlined label needs an edge cover
const ROUNDED_EDGE_THRESHOLD: f32 = 6.0;

/// Text input variant
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputMode {
    #[default]
    Flat,
    Outlined,
}

/// Resolved text input colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputColors {
    pub text: Color,
    /// Focused indicator and label color
    pub active: Color,
    pub placeholder: Color,
    pub background: Color,
    /// Underline (flat) or outline (outlined) color while unfocused
    pub indicator: Color,
    pub error: Color,
    pub selection: Color,
}

/// Layout constants for one mode and schema, scaled for the device
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMetrics {
    pub maximized_label_font_size: f32,
    pub minimized_label_font_size: f32,
    pub label_wiggle_x_offset: f32,
    pub adornment_size: f32,
    pub adornment_offset: f32,
    pub affix_offset: f32,
    pub icon_size: f32,
    pub icon_offset: f32,
    pub min_height: f32,
    pub label_padding_top: f32,
    pub padding_horizontal: f32,
    /// Extra space keeping the text clear of icons
    pub input_offset: f32,
    pub minimized_label_y_offset: f32,
}

impl InputMetrics {
    pub fn resolve(
        cx: &StyleContext<'_>,
        mode: TextInputMode,
        dense: bool,
        has_label: bool,
    ) -> Result<Self> {
        let current = cx.is_current();
        let pick = |legacy: f32, current_value: f32| {
            cx.ms(if current { current_value } else { legacy })
        };

        let (min_height, label_padding_top, padding_horizontal, minimized_label_y_offset) =
            match mode {
                TextInputMode::Flat => (
                    match (dense, has_label) {
                        (true, true) => cx.ms(52.0)?,
                        (true, false) => cx.ms(40.0)?,
                        (false, _) => pick(54.0, 56.0)?,
                    },
                    if dense { cx.ms(24.0)? } else { pick(30.0, 26.0)? },
                    pick(12.0, 16.0)?,
                    cx.ms_offset(-18.0)?,
                ),
                TextInputMode::Outlined => (
                    if dense { cx.ms(48.0)? } else { pick(54.0, 56.0)? },
                    cx.ms(8.0)?,
                    pick(14.0, 16.0)?,
                    cx.ms_offset(-6.0)?,
                ),
            };

        Ok(Self {
            maximized_label_font_size: cx.ms(16.0)?,
            minimized_label_font_size: cx.ms(12.0)?,
            label_wiggle_x_offset: cx.ms(4.0)?,
            adornment_size: cx.ms(24.0)?,
            adornment_offset: pick(12.0, 16.0)?,
            affix_offset: pick(12.0, 16.0)?,
            icon_size: cx.ms(24.0)?,
            icon_offset: pick(12.0, 16.0)?,
            min_height,
            label_padding_top,
            padding_horizontal,
            input_offset: pick(8.0, 16.0)?,
            minimized_label_y_offset,
        })
    }
}

/// Text input props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextInput {
    mode: TextInputMode,
    disabled: bool,
    error: bool,
    dense: bool,
    has_label: bool,
    text_color: Option<Color>,
    active_color: Option<Color>,
    selection_color: Option<Color>,
}

impl TextInput {
    pub fn new(mode: TextInputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn flat() -> Self {
        Self::new(TextInputMode::Flat)
    }

    pub fn outlined() -> Self {
        Self::new(TextInputMode::Outlined)
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    pub fn label(mut self, has_label: bool) -> Self {
        self.has_label = has_label;
        self
    }

    /// Text color override; ignored while disabled
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Focused indicator override; an error state still wins
    pub fn active_color(mut self, color: Color) -> Self {
        self.active_color = Some(color);
        self
    }

    pub fn selection_color(mut self, color: Color) -> Self {
        self.selection_color = Some(color);
        self
    }

    fn text(&self, cx: &StyleContext<'_>) -> Result<Color> {
        if self.disabled {
            return if cx.is_current() {
                cx.color(ColorRole::OnSurfaceDisabled)
            } else {
                cx.color(ColorRole::Text)?.with_alpha(LEGACY_DISABLED_TEXT_ALPHA)
            };
        }
        match self.text_color {
            Some(color) => Ok(color),
            None if cx.is_current() => cx.color(ColorRole::OnSurface),
            None => cx.color(ColorRole::Text),
        }
    }

    fn active(&self, cx: &StyleContext<'_>) -> Result<Color> {
        if self.error {
            return cx.color(ColorRole::Error);
        }
        match self.active_color {
            Some(color) => Ok(color),
            None => cx.color(ColorRole::Primary),
        }
    }

    fn placeholder(&self, cx: &StyleContext<'_>) -> Result<Color> {
        match (cx.is_current(), self.disabled) {
            (true, true) => cx.color(ColorRole::OnSurfaceDisabled),
            (true, false) => cx.color(ColorRole::OnSurfaceVariant),
            (false, true) => cx.color(ColorRole::Disabled),
            (false, false) => cx.color(ColorRole::Placeholder),
        }
    }

    fn background(&self, cx: &StyleContext<'_>) -> Result<Color> {
        if self.mode == TextInputMode::Outlined {
            return cx.color(ColorRole::Background);
        }
        match (cx.is_current(), self.disabled) {
            (true, true) => cx
                .color(ColorRole::OnSurface)?
                .with_alpha(CURRENT_DISABLED_FILL_ALPHA),
            (true, false) => cx.color(ColorRole::SurfaceVariant),
            (false, true) => Ok(Color::TRANSPARENT),
            (false, false) => cx.color(ColorRole::Background),
        }
    }

    fn indicator(&self, cx: &StyleContext<'_>) -> Result<Color> {
        match (self.mode, cx.is_current(), self.disabled) {
            (_, true, true) => cx.color(ColorRole::OnSurfaceDisabled),
            (TextInputMode::Flat, true, false) => cx.color(ColorRole::OnSurfaceVariant),
            (TextInputMode::Outlined, true, false) => cx.color(ColorRole::Outline),
            (TextInputMode::Flat, false, true) => Ok(Color::TRANSPARENT),
            (TextInputMode::Flat, false, false) => cx.color(ColorRole::Disabled),
            (TextInputMode::Outlined, false, true) => cx.color(ColorRole::Disabled),
            (TextInputMode::Outlined, false, false) => cx.color(ColorRole::Placeholder),
        }
    }

    /// Resolve only the colors
    pub fn colors(&self, cx: &StyleContext<'_>) -> Result<InputColors> {
        let active = self.active(cx)?;
        let selection = match self.selection_color {
            Some(color) => color,
            None => active.with_alpha(SELECTION_ALPHA)?,
        };

        Ok(InputColors {
            text: self.text(cx)?,
            active,
            placeholder: self.placeholder(cx)?,
            background: self.background(cx)?,
            indicator: self.indicator(cx)?,
            error: cx.color(ColorRole::Error)?,
            selection,
        })
    }
}

/// Resolved text input style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputStyle {
    pub mode: TextInputMode,
    pub colors: InputColors,
    pub metrics: InputMetrics,
    /// Corner radius of the outline or the filled background's top corners
    pub border_radius: f32,
}

impl Resolve for TextInput {
    type Style = TextInputStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<TextInputStyle> {
        let colors = self.colors(cx)?;
        let metrics = InputMetrics::resolve(cx, self.mode, self.dense, self.has_label)?;

        tracing::trace!(
            mode = ?self.mode,
            disabled = self.disabled,
            error = self.error,
            active = %colors.active,
            "resolved text input"
        );
        Ok(TextInputStyle {
            mode: self.mode,
            colors,
            metrics,
            border_radius: cx.roundness()?,
        })
    }
}

/// Strip of background drawn over the outline corner on rounded inputs
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCover {
    pub max_height: f32,
    pub bottom: f32,
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

/// Background behind a minimized outlined label
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBackgroundStyle {
    pub background: Color,
    pub top: f32,
    pub left: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_cover: Option<EdgeCover>,
    /// Label progress to opacity
    #[serde(skip)]
    pub opacity: Interpolation,
    /// Label progress to horizontal translation
    #[serde(skip)]
    pub translate_x: Interpolation,
    /// Label progress to vertical text scale
    #[serde(skip)]
    pub scale_y: Interpolation,
}

/// Outlined label cut-out inputs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBackground {
    background: Color,
    base_translate_x: f32,
    top_position: f32,
}

impl LabelBackground {
    pub fn new(background: Color, base_translate_x: f32, top_position: f32) -> Self {
        Self {
            background,
            base_translate_x,
            top_position,
        }
    }
}

impl Resolve for LabelBackground {
    type Style = LabelBackgroundStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<LabelBackgroundStyle> {
        let roundness = cx.theme().roundness();
        let edge_cover = if roundness > ROUNDED_EDGE_THRESHOLD {
            Some(EdgeCover {
                max_height: (roundness / 3.0).max(2.0),
                bottom: roundness.max(2.0),
                top: cx.ms(6.0)?,
                left: cx.ms(10.0)?,
                width: cx.spacing().x(3),
            })
        } else {
            None
        };

        Ok(LabelBackgroundStyle {
            background: self.background,
            top: self.top_position + 1.0,
            left: cx.spacing().x(2),
            edge_cover,
            opacity: Interpolation::new(&[0.0, 0.6], &[1.0, 0.0])?,
            translate_x: Interpolation::new(&[0.0, 1.0], &[-self.base_translate_x, 0.0])?,
            scale_y: Interpolation::new(&[0.0, 1.0], &[0.2, 1.0])?,
        })
    }
}

//! Segmented button styles
//!
//! One segment of a segmented control. Corner radii depend on where the
//! segment sits in the group; colors depend on the checked and disabled
//! states.

use serde::Serialize;
use swatch_animation::Interpolation;
use swatch_core::{Color, Result};
use swatch_theme::{ColorRole, FontDescriptor, FontRole, FontWeight};

use crate::style::{CornerRadii, ResolvedStyle, Resolve, StyleContext};

const LEGACY_CHECKED_ALPHA: f32 = 0.12;
const LEGACY_BORDER_ALPHA: f32 = 0.29;
const RIPPLE_ALPHA: f32 = 0.12;
const DESCRIPTION_ALPHA: f32 = 0.54;

/// Position of a segment inside its group
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    First,
    #[default]
    Middle,
    Last,
    /// A group of one keeps all four corners
    Single,
}

/// Vertical density of a segment
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Regular,
    Small,
    Medium,
    High,
}

impl Density {
    /// Vertical content padding
    pub fn padding(&self, cx: &StyleContext<'_>) -> Result<f32> {
        cx.ms(match self {
            Density::Regular => 9.0,
            Density::Small => 7.0,
            Density::Medium => 5.0,
            Density::High => 1.0,
        })
    }
}

/// Segment colors for the given state
pub fn segmented_button_colors(
    cx: &StyleContext<'_>,
    checked: bool,
    disabled: bool,
) -> Result<ResolvedStyle> {
    let background = match (checked, cx.is_current()) {
        (false, _) => Color::TRANSPARENT,
        (true, true) => cx.color(ColorRole::SecondaryContainer)?,
        (true, false) => cx.color(ColorRole::Primary)?.with_alpha(LEGACY_CHECKED_ALPHA)?,
    };

    let (border, border_width) = if cx.is_current() {
        let border = if disabled {
            cx.color(ColorRole::SurfaceDisabled)?
        } else {
            cx.color(ColorRole::Outline)?
        };
        (border, 1.0)
    } else {
        let border = if checked {
            cx.color(ColorRole::Primary)?
        } else {
            cx.contrast_base().with_alpha(LEGACY_BORDER_ALPHA)?
        };
        (border, cx.scale().hairline_width())
    };

    let text = if cx.is_current() {
        if disabled {
            cx.color(ColorRole::OnSurfaceDisabled)?
        } else if checked {
            cx.color(ColorRole::OnSecondaryContainer)?
        } else {
            cx.color(ColorRole::OnSurface)?
        }
    } else if disabled {
        cx.color(ColorRole::Disabled)?
    } else {
        cx.color(ColorRole::Primary)?
    };

    Ok(ResolvedStyle::new(text, background)
        .border(border, border_width)
        .ripple(text.with_alpha(RIPPLE_ALPHA)?))
}

/// Corner radii for a segment; inner corners are square
pub fn segment_radii(segment: Segment, radius: f32) -> CornerRadii {
    match segment {
        Segment::First => CornerRadii {
            top_left: radius,
            bottom_left: radius,
            ..CornerRadii::default()
        },
        Segment::Last => CornerRadii {
            top_right: radius,
            bottom_right: radius,
            ..CornerRadii::default()
        },
        Segment::Middle => CornerRadii::default(),
        Segment::Single => CornerRadii::all(radius),
    }
}

/// Segmented button props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentedButton {
    checked: bool,
    disabled: bool,
    segment: Segment,
    density: Density,
    has_icon: bool,
    has_label: bool,
    show_selected_check: bool,
}

impl SegmentedButton {
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

    pub fn segment(mut self, segment: Segment) -> Self {
        self.segment = segment;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn icon(mut self, has_icon: bool) -> Self {
        self.has_icon = has_icon;
        self
    }

    pub fn label(mut self, has_label: bool) -> Self {
        self.has_label = has_label;
        self
    }

    pub fn show_selected_check(mut self, show: bool) -> Self {
        self.show_selected_check = show;
        self
    }

    /// Whether the caller's icon is drawn
    pub fn shows_icon(&self) -> bool {
        (self.has_icon && !self.has_label) || !(self.checked && self.show_selected_check)
    }

    /// Whether the check mark is drawn
    pub fn shows_check(&self) -> bool {
        self.checked && self.show_selected_check
    }
}

/// Label text treatment
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentLabel {
    pub color: Color,
    /// Type-scale font on the current schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontDescriptor>,
    pub uppercase: bool,
    pub weight: FontWeight,
}

/// Resolved segmented button style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentedButtonStyle {
    pub colors: ResolvedStyle,
    pub border_radius: f32,
    pub corner_radii: CornerRadii,
    /// Zeroed on current-schema segments followed by another segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_end_width: Option<f32>,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub min_width: f32,
    pub icon_size: f32,
    pub icon_margin_right: f32,
    pub show_icon: bool,
    pub show_check: bool,
    pub label: SegmentLabel,
    pub description_color: Color,
    /// Icon scale while the check mark animates in
    #[serde(skip)]
    pub check_scale: Option<Interpolation>,
}

impl Resolve for SegmentedButton {
    type Style = SegmentedButtonStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<SegmentedButtonStyle> {
        let colors = segmented_button_colors(cx, self.checked, self.disabled)?;
        let theme = cx.theme();
        let spacing = cx.spacing();

        let unit = if cx.is_current() { cx.ms(5.0)? } else { cx.ms(1.0)? };
        let border_radius = unit * theme.roundness();

        let border_end_width = match self.segment {
            Segment::First | Segment::Middle if cx.is_current() => Some(0.0),
            _ => None,
        };

        let icon_margin_right = if self.has_label {
            cx.ms(5.0)?
        } else if self.shows_check() {
            cx.ms(3.0)?
        } else {
            0.0
        };

        let label = if cx.is_current() {
            let font = cx.font(FontRole::LabelLarge)?;
            SegmentLabel {
                color: colors.foreground,
                weight: font.weight,
                font: Some(font),
                uppercase: false,
            }
        } else {
            SegmentLabel {
                color: colors.foreground,
                font: None,
                uppercase: true,
                weight: FontWeight::Medium,
            }
        };

        let description_color = if cx.is_current() {
            cx.color(ColorRole::OnSurfaceVariant)?
        } else {
            cx.color(ColorRole::Text)?.with_alpha(DESCRIPTION_ALPHA)?
        };

        let check_scale = if self.has_label {
            Some(Interpolation::new(&[0.0, 1.0], &[1.0, 0.0])?)
        } else {
            None
        };

        tracing::trace!(
            checked = self.checked,
            disabled = self.disabled,
            segment = ?self.segment,
            "resolved segmented button"
        );
        Ok(SegmentedButtonStyle {
            colors,
            border_radius,
            corner_radii: segment_radii(self.segment, border_radius),
            border_end_width,
            padding_vertical: self.density.padding(cx)?,
            padding_horizontal: spacing.x(4),
            min_width: spacing.x(19),
            icon_size: if cx.is_current() { cx.ms(18.0)? } else { spacing.x(4) },
            icon_margin_right,
            show_icon: self.shows_icon(),
            show_check: self.shows_check(),
            label,
            description_color,
            check_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_animation::Interpolate;
    use swatch_core::ScaleResolver;
    use swatch_theme::ThemePreset;

    fn resolve(preset: ThemePreset, button: SegmentedButton) -> SegmentedButtonStyle {
        let theme = preset.theme();
        let scale = ScaleResolver::default();
        button.resolve(&StyleContext::new(&theme, &scale)).unwrap()
    }

    #[test]
    fn test_segment_radii() {
        assert_eq!(
            segment_radii(Segment::First, 20.0),
            CornerRadii {
                top_left: 20.0,
                top_right: 0.0,
                bottom_right: 0.0,
                bottom_left: 20.0,
            }
        );
        assert_eq!(segment_radii(Segment::Middle, 20.0), CornerRadii::default());
        assert_eq!(segment_radii(Segment::Last, 20.0).top_right, 20.0);
        assert_eq!(segment_radii(Segment::Single, 20.0), CornerRadii::all(20.0));
    }

    #[test]
    fn test_current_checked_colors() {
        let theme = ThemePreset::CurrentLight.theme();
        let style = resolve(ThemePreset::CurrentLight, SegmentedButton::new(true));
        assert_eq!(
            style.colors.background,
            theme.color(ColorRole::SecondaryContainer).unwrap()
        );
        assert_eq!(
            style.colors.foreground,
            theme.color(ColorRole::OnSecondaryContainer).unwrap()
        );
        assert_eq!(style.colors.border_width, Some(1.0));
        assert_eq!(style.border_radius, 20.0);
        assert_eq!(style.label.font, theme.fonts().get(FontRole::LabelLarge).cloned());
    }

    #[test]
    fn test_current_disabled_overrides_checked_text() {
        let theme = ThemePreset::CurrentDark.theme();
        let style = resolve(
            ThemePreset::CurrentDark,
            SegmentedButton::new(true).disabled(true),
        );
        assert_eq!(
            style.colors.foreground,
            theme.color(ColorRole::OnSurfaceDisabled).unwrap()
        );
        assert_eq!(
            style.colors.border_color,
            Some(theme.color(ColorRole::SurfaceDisabled).unwrap())
        );
    }

    #[test]
    fn test_legacy_colors() {
        let style = resolve(ThemePreset::LegacyLight, SegmentedButton::new(false));
        assert_eq!(
            style.colors.border_color.unwrap().to_canonical_string(),
            "rgba(0, 0, 0, 0.29)"
        );
        assert_eq!(style.colors.background, Color::TRANSPARENT);
        assert!(style.label.uppercase);
        assert_eq!(style.border_radius, 4.0);

        let checked = resolve(ThemePreset::LegacyDark, SegmentedButton::new(true));
        assert_eq!(
            checked.colors.background.to_canonical_string(),
            "rgba(187, 134, 252, 0.12)"
        );
    }

    #[test]
    fn test_border_end_width_only_on_current_leading_segments() {
        let first = SegmentedButton::new(false).segment(Segment::First);
        assert_eq!(resolve(ThemePreset::CurrentLight, first).border_end_width, Some(0.0));
        assert_eq!(resolve(ThemePreset::LegacyLight, first).border_end_width, None);
        let last = SegmentedButton::new(false).segment(Segment::Last);
        assert_eq!(resolve(ThemePreset::CurrentLight, last).border_end_width, None);
    }

    #[test]
    fn test_icon_visibility_and_check_scale() {
        let button = SegmentedButton::new(true)
            .icon(true)
            .label(true)
            .show_selected_check(true);
        assert!(!button.shows_icon());
        assert!(button.shows_check());

        let style = resolve(ThemePreset::CurrentLight, button);
        assert_eq!(style.icon_margin_right, 5.0);
        let scale = style.check_scale.unwrap();
        assert_eq!(scale.interpolate(1.0), 0.0);

        let icon_only = SegmentedButton::new(true).icon(true).show_selected_check(true);
        assert!(icon_only.shows_icon());
        assert_eq!(resolve(ThemePreset::CurrentLight, icon_only).icon_margin_right, 3.0);
    }

    #[test]
    fn test_density_padding() {
        let high = resolve(
            ThemePreset::CurrentLight,
            SegmentedButton::new(false).density(Density::High),
        );
        assert_eq!(high.padding_vertical, 1.0);
        assert_eq!(
            resolve(ThemePreset::CurrentLight, SegmentedButton::new(false)).padding_vertical,
            9.0
        );
    }
}

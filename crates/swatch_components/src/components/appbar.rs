//! App bar styles
//!
//! Background color comes from the elevation overlay resolver. Height and
//! title font depend on the bar mode on the current schema; legacy bars have
//! a single height.
//!
//! # Example
//!
//! ```rust
//! use swatch_components::prelude::*;
//! use swatch_core::ScaleResolver;
//! use swatch_theme::ThemePreset;
//!
//! let theme = ThemePreset::CurrentLight.theme();
//! let scale = ScaleResolver::default();
//! let cx = StyleContext::new(&theme, &scale);
//!
//! let style = Appbar::new().mode(AppbarMode::Large).resolve(&cx).unwrap();
//! assert_eq!(style.height, 152.0);
//! ```

use serde::{Deserialize, Serialize};
use swatch_core::{Color, Result};
use swatch_theme::{ElevationLevel, FontDescriptor, FontRole};

use crate::content::{render_content, ContentContext, ContentFilter, ContentNode, Element};
use crate::style::{resolve_surface_color, ComponentVisualState, Resolve, StyleContext};

/// App bar layout mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppbarMode {
    #[default]
    Small,
    Medium,
    Large,
    CenterAligned,
}

impl AppbarMode {
    /// Title type-scale role for this mode
    pub fn title_role(&self) -> FontRole {
        match self {
            AppbarMode::Small | AppbarMode::CenterAligned => FontRole::TitleLarge,
            AppbarMode::Medium => FontRole::HeadlineSmall,
            AppbarMode::Large => FontRole::HeadlineMedium,
        }
    }

    /// Bar height on the current schema
    pub fn height(&self, cx: &StyleContext<'_>) -> Result<f32> {
        match self {
            AppbarMode::Small | AppbarMode::CenterAligned => Ok(cx.spacing().xxxx_large),
            AppbarMode::Medium => cx.ms(112.0),
            AppbarMode::Large => cx.ms(152.0),
        }
    }
}

/// Bar background color: override, legacy overlay/primary, or surface tint
pub fn appbar_color(
    cx: &StyleContext<'_>,
    level: ElevationLevel,
    custom_background: Option<Color>,
    elevated: bool,
) -> Result<Color> {
    resolve_surface_color(cx, level, custom_background, elevated)
}

/// App bar props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Appbar {
    mode: AppbarMode,
    elevation: ElevationLevel,
    elevated: bool,
    background: Option<Color>,
}

impl Appbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: AppbarMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn elevation(mut self, level: ElevationLevel) -> Self {
        self.elevation = level;
        self
    }

    pub fn elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Filter children and inject colors/spacing for this bar
    pub fn render_content(
        &self,
        cx: &StyleContext<'_>,
        children: &[ContentNode],
        filter: &ContentFilter,
    ) -> Vec<Element> {
        let content_cx = ContentContext::new(cx.theme())
            .mode(self.mode)
            .center_content(self.mode == AppbarMode::CenterAligned);
        render_content(children, filter, &content_cx)
    }
}

impl From<ComponentVisualState> for Appbar {
    fn from(state: ComponentVisualState) -> Self {
        Self {
            mode: AppbarMode::default(),
            elevation: state.elevation,
            elevated: state.elevated,
            background: state.custom_color,
        }
    }
}

/// Resolved app bar style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppbarStyle {
    pub background: Color,
    pub height: f32,
    /// Title font; legacy titles use the content slot's own font
    pub title_font: Option<FontDescriptor>,
}

impl Resolve for Appbar {
    type Style = AppbarStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<AppbarStyle> {
        let background = appbar_color(cx, self.elevation, self.background, self.elevated)?;

        let (height, title_font) = if cx.is_current() {
            (
                self.mode.height(cx)?,
                Some(cx.font(self.mode.title_role())?),
            )
        } else {
            (cx.spacing().xxx_large, None)
        };

        Ok(AppbarStyle {
            background,
            height,
            title_font,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SlotKind;
    use swatch_core::{DeviceMetrics, ScaleResolver};
    use swatch_theme::ThemePreset;

    #[test]
    fn test_current_heights_by_mode() {
        let theme = ThemePreset::CurrentLight.theme();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);

        let height = |mode| Appbar::new().mode(mode).resolve(&cx).unwrap().height;
        assert_eq!(height(AppbarMode::Small), 64.0);
        assert_eq!(height(AppbarMode::CenterAligned), 64.0);
        assert_eq!(height(AppbarMode::Medium), 112.0);
        assert_eq!(height(AppbarMode::Large), 152.0);
    }

    #[test]
    fn test_medium_height_scales_with_device() {
        let theme = ThemePreset::CurrentLight.theme();
        let scale = ScaleResolver::new(DeviceMetrics::new(700.0, 1400.0, 2.0).unwrap());
        let cx = StyleContext::new(&theme, &scale);
        let style = Appbar::new().mode(AppbarMode::Medium).resolve(&cx).unwrap();
        assert_eq!(style.height, 168.0);
    }

    #[test]
    fn test_legacy_has_single_height_and_primary_background() {
        let theme = ThemePreset::LegacyLight.theme();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);
        let style = Appbar::new().mode(AppbarMode::Large).resolve(&cx).unwrap();
        assert_eq!(style.height, 56.0);
        assert_eq!(style.title_font, None);
        assert_eq!(
            style.background,
            theme.color(swatch_theme::ColorRole::Primary).unwrap()
        );
    }

    #[test]
    fn test_visual_state_drives_background() {
        let theme = ThemePreset::CurrentLight.theme();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);

        let elevated = ComponentVisualState::new().elevated(true);
        let style = Appbar::from(elevated).resolve(&cx).unwrap();
        assert_eq!(style.background.to_canonical_string(), "rgb(245, 238, 235)");

        let custom = Color::from_hex(0x336699);
        let overridden = ComponentVisualState::new().elevated(true).custom_color(custom);
        assert_eq!(Appbar::from(overridden).resolve(&cx).unwrap().background, custom);

        let dark = ThemePreset::LegacyDark.theme();
        let cx = StyleContext::new(&dark, &scale);
        let level = ElevationLevel::new(2).unwrap();
        let style = Appbar::from(ComponentVisualState::new().elevation(level))
            .resolve(&cx)
            .unwrap();
        assert_eq!(style.background.to_canonical_string(), "rgb(35, 35, 35)");
    }

    #[test]
    fn test_title_font_follows_mode() {
        let theme = ThemePreset::CurrentDark.theme();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);
        let style = Appbar::new().mode(AppbarMode::Medium).resolve(&cx).unwrap();
        assert_eq!(
            style.title_font.as_ref(),
            theme.fonts().get(FontRole::HeadlineSmall)
        );
    }

    #[test]
    fn test_center_aligned_bar_centers_content() {
        let theme = ThemePreset::CurrentLight.theme();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);
        let children = vec![ContentNode::from(Element::slot(SlotKind::Content))];

        let rendered = Appbar::new().mode(AppbarMode::CenterAligned).render_content(
            &cx,
            &children,
            &ContentFilter::default(),
        );
        assert_eq!(rendered[0].style.flatten().absolute_fill, Some(true));
        assert_eq!(rendered[0].mode, Some(AppbarMode::CenterAligned));
    }
}

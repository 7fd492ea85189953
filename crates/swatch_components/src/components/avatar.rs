//! Avatar image styles

use serde::Serialize;
use swatch_core::{Color, Result};
use swatch_theme::ColorRole;

use crate::style::{Resolve, StyleContext};

/// Avatar image props
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AvatarImage {
    size: Option<f32>,
    background: Option<Color>,
}

impl AvatarImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

/// Resolved avatar style: a circle of `size`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStyle {
    pub size: f32,
    pub border_radius: f32,
    pub background: Color,
}

impl Resolve for AvatarImage {
    type Style = AvatarStyle;

    fn resolve(&self, cx: &StyleContext<'_>) -> Result<AvatarStyle> {
        let size = self.size.unwrap_or_else(|| cx.spacing().x(16));
        let background = match self.background {
            Some(color) => color,
            None => cx.color(ColorRole::Primary)?,
        };
        Ok(AvatarStyle {
            size,
            border_radius: size / 2.0,
            background,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ScaleResolver;
    use swatch_theme::ThemePreset;

    #[test]
    fn test_defaults_and_override() {
        let theme = ThemePreset::CurrentLight.theme();
        let scale = ScaleResolver::default();
        let cx = StyleContext::new(&theme, &scale);

        let style = AvatarImage::new().resolve(&cx).unwrap();
        assert_eq!(style.size, 64.0);
        assert_eq!(style.border_radius, 32.0);
        assert_eq!(style.background, theme.color(ColorRole::Primary).unwrap());

        let custom = AvatarImage::new()
            .size(24.0)
            .background(Color::WHITE)
            .resolve(&cx)
            .unwrap();
        assert_eq!(custom.border_radius, 12.0);
        assert_eq!(custom.background, Color::WHITE);
    }
}

//! Color values and color algebra
//!
//! Every derived color in Swatch (disabled states, overlays, ripple tints)
//! is produced from theme base colors through the operations in this module.
//! All operations are pure and return a new [`Color`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, StyleError};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a 0xRRGGBB hex value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create from a 0xRRGGBB hex value and an alpha in [0, 1] (clamped)
    pub fn from_hex_alpha(hex: u32, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..Self::from_hex(hex)
        }
    }

    /// Parse a color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` and the keywords `transparent`, `white`, `black`.
    /// Anything else fails with [`StyleError::InvalidColorFormat`]; no
    /// default is substituted.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || {
            tracing::trace!(input, "rejected color string");
            StyleError::invalid_color(input)
        };

        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(invalid);
        }

        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        if let Some(body) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_channels(body, true).ok_or_else(invalid);
        }

        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_channels(body, false).ok_or_else(invalid);
        }

        Err(invalid())
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_rgba8(digit(0)?, digit(1)?, digit(2)?, 255)),
            4 => Some(Self::from_rgba8(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
            6 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, 255)),
            8 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Parse the inside of `rgb(...)` / `rgba(...)`
    fn parse_channels(body: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return None;
        }

        let channel = |raw: &str| -> Option<f32> {
            let value: f32 = raw.parse().ok()?;
            (value.is_finite() && (0.0..=255.0).contains(&value)).then_some(value / 255.0)
        };

        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if with_alpha {
            let value: f32 = parts[3].parse().ok()?;
            if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                return None;
            }
            value
        } else {
            1.0
        };

        Some(Self::rgba(r, g, b, a))
    }

    /// Set the opacity, replacing the current alpha (no compounding).
    pub fn with_alpha(self, alpha: f32) -> Result<Self> {
        let alpha = unit_interval("alpha", alpha)?;
        Ok(Self { a: alpha, ..self })
    }

    /// Reduce the current opacity by `ratio` (0.32 keeps 68% of the alpha).
    pub fn fade(self, ratio: f32) -> Result<Self> {
        let ratio = unit_interval("fade ratio", ratio)?;
        Ok(Self {
            a: self.a * (1.0 - ratio),
            ..self
        })
    }

    /// Linear channel-wise interpolation toward `other`.
    ///
    /// `ratio = 0` yields `self`, `ratio = 1` yields `other`.
    pub fn mix(self, other: Color, ratio: f32) -> Result<Self> {
        let t = unit_interval("mix ratio", ratio)?;
        let keep = 1.0 - t;
        Ok(Self {
            r: self.r * keep + other.r * t,
            g: self.g * keep + other.g * t,
            b: self.b * keep + other.b * t,
            a: self.a * keep + other.a * t,
        })
    }

    /// Convert to u8 array [r, g, b, a], rounding each channel
    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Deterministic serialization: `rgb(r, g, b)` when opaque, otherwise
    /// `rgba(r, g, b, a)` with alpha rounded to three decimals. Every fully
    /// transparent color serializes as `rgba(0, 0, 0, 0)`.
    pub fn to_canonical_string(&self) -> String {
        let [r, g, b] = self.canonical_channels();
        let alpha = canonical_alpha(self.a);
        if alpha >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
    }

    /// Whether two colors serialize to the same canonical string
    pub fn same_as(&self, other: &Color) -> bool {
        self.canonical_channels() == other.canonical_channels()
            && canonical_alpha(self.a) == canonical_alpha(other.a)
    }

    fn canonical_channels(&self) -> [u8; 3] {
        if self.is_transparent() {
            return [0; 3];
        }
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    pub fn is_transparent(&self) -> bool {
        canonical_alpha(self.a) == 0.0
    }
}

fn canonical_alpha(alpha: f32) -> f32 {
    (alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

fn unit_interval(name: &str, value: f32) -> Result<f32> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(StyleError::precondition(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(input: &str) -> Color {
        Color::parse(input).unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(c("#fff"), Color::WHITE);
        assert_eq!(c("#000000"), Color::BLACK);
        assert_eq!(c("transparent"), Color::TRANSPARENT);
        assert_eq!(c("rgb(133, 84, 0)").to_rgba8(), [133, 84, 0, 255]);
        assert_eq!(c("#85540080").to_rgba8(), [133, 84, 0, 128]);
        assert!((c("rgba(255, 255, 255, .12)").a - 0.12).abs() < 1e-6);
        assert_eq!(c("  RGB(1, 2, 3) ").to_rgba8(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in [
            "",
            "#12",
            "#ggg",
            "rgb(1, 2)",
            "rgb(256, 0, 0)",
            "rgba(0, 0, 0, 1.5)",
            "rgba(0, 0, 0, nan)",
            "hsl(0, 0%, 0%)",
            "chartreuse",
        ] {
            let err = Color::parse(bad).unwrap_err();
            assert!(
                matches!(err, StyleError::InvalidColorFormat { .. }),
                "{bad:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn test_canonical_string() {
        assert_eq!(c("#855400").to_canonical_string(), "rgb(133, 84, 0)");
        assert_eq!(
            c("rgba(31, 27, 22, 0.38)").to_canonical_string(),
            "rgba(31, 27, 22, 0.38)"
        );
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
        assert_eq!(Color::default().to_string(), "rgb(0, 0, 0)");
        // Perceptually identical inputs serialize identically
        assert_eq!(
            c("#ffffff").to_canonical_string(),
            c("rgb(255, 255, 255)").to_canonical_string()
        );
    }

    #[test]
    fn test_mix_endpoints() {
        let a = c("rgb(255, 251, 255)");
        let b = c("rgb(133, 84, 0)");
        assert!(a.mix(b, 0.0).unwrap().same_as(&a));
        assert!(a.mix(b, 1.0).unwrap().same_as(&b));
    }

    #[test]
    fn test_mix_is_symmetric() {
        let a = c("rgba(240, 224, 208, 0.5)");
        let b = c("rgb(40, 24, 5)");
        for step in 0..=20 {
            let r = step as f32 / 20.0;
            let left = a.mix(b, r).unwrap();
            let right = b.mix(a, 1.0 - r).unwrap();
            assert!(left.same_as(&right), "ratio {r}: {left} vs {right}");
        }
    }

    #[test]
    fn test_surface_tint_mix() {
        let surface = c("rgb(255, 251, 255)");
        let primary = c("rgb(133, 84, 0)");
        assert_eq!(
            surface.mix(primary, 0.08).unwrap().to_canonical_string(),
            "rgb(245, 238, 235)"
        );
    }

    #[test]
    fn test_with_alpha_last_write_wins() {
        let base = c("rgba(40, 24, 5, 0.5)");
        let once = base.with_alpha(0.2).unwrap().with_alpha(0.7).unwrap();
        assert_eq!(once, base.with_alpha(0.7).unwrap());
    }

    #[test]
    fn test_alpha_preconditions() {
        assert!(matches!(
            Color::WHITE.with_alpha(1.2),
            Err(StyleError::PreconditionViolation(_))
        ));
        assert!(matches!(
            Color::WHITE.with_alpha(f32::NAN),
            Err(StyleError::PreconditionViolation(_))
        ));
        assert!(matches!(
            Color::WHITE.mix(Color::BLACK, -0.1),
            Err(StyleError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&c("#855400")).unwrap();
        assert_eq!(json, "\"rgb(133, 84, 0)\"");
        let back: Color = serde_json::from_str("\"rgba(0, 0, 0, 0.5)\"").unwrap();
        assert_eq!(back.to_rgba8(), [0, 0, 0, 128]);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_fade_scales_alpha() {
        let faded = c("rgba(0, 0, 0, 0.5)").fade(0.5).unwrap();
        assert!((faded.a - 0.25).abs() < 1e-6);
        assert_eq!(
            Color::BLACK.fade(0.32).unwrap().to_canonical_string(),
            "rgba(0, 0, 0, 0.68)"
        );
    }

    #[test]
    fn test_fully_transparent_colors_share_one_form() {
        let clear_red = Color::rgba(1.0, 0.0, 0.0, 0.0);
        assert_eq!(clear_red.to_canonical_string(), "rgba(0, 0, 0, 0)");
        assert!(clear_red.same_as(&Color::TRANSPARENT));
        assert!(Color::WHITE.fade(1.0).unwrap().same_as(&Color::TRANSPARENT));
        assert!(!Color::rgba(1.0, 0.0, 0.0, 0.5).same_as(&Color::rgba(0.0, 0.0, 0.0, 0.5)));
    }
}

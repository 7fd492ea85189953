//! Swatch Theme System
//!
//! Immutable theme values for the Swatch design system.
//!
//! # Overview
//!
//! A [`Theme`] bundles everything the style resolvers read:
//! - **Color roles**: semantic slots such as `surface` or `onSecondaryContainer`
//! - **Elevation levels**: six surface tints, levels 0 through 5
//! - **Spacing scale**: a 4px grid plus named steps
//! - **Font roles**: type scale entries and legacy font families
//! - **Flags**: dark mode, adaptive mode, and the [`SchemaVersion`]
//!
//! Two schema versions exist. The legacy token set has no container roles
//! and encodes elevation as a precomputed overlay table; the current token
//! set has container/on-container pairs and tonal elevation.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::{ColorRole, ThemePreset};
//!
//! let theme = ThemePreset::CurrentLight.theme();
//! let surface = theme.color(ColorRole::Surface).unwrap();
//! assert_eq!(surface.to_canonical_string(), "rgb(255, 251, 255)");
//! ```
//!
//! # Derived themes
//!
//! Themes are never edited in place. Overrides produce a new value:
//!
//! ```rust
//! use swatch_core::Color;
//! use swatch_theme::{ColorRole, ThemePreset};
//!
//! let base = ThemePreset::CurrentLight.theme();
//! let branded = base
//!     .derive()
//!     .name("Branded")
//!     .color(ColorRole::Primary, Color::from_hex(0x0061A4))
//!     .build()
//!     .unwrap();
//!
//! assert_ne!(base.color(ColorRole::Primary), branded.color(ColorRole::Primary));
//! ```

pub mod config;
pub mod presets;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use config::{ConfigError, ThemeConfig};
pub use presets::ThemePreset;
pub use theme::{SchemaVersion, Theme, ThemeBuilder, ThemeMode};
pub use themes::{CurrentTheme, LegacyTheme};
pub use tokens::*;

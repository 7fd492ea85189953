//! Swatch Core
//!
//! Foundational value types shared by every Swatch crate:
//!
//! - **Color**: RGBA values plus the color algebra used to derive every
//!   state color (parse, alpha, fade, mix, canonical serialization)
//! - **Scale**: device-adjusted sizes from logical design sizes
//! - **Errors**: the [`StyleError`] taxonomy surfaced by all resolvers
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Color;
//!
//! let surface = Color::parse("rgb(255, 251, 255)").unwrap();
//! let primary = Color::parse("#855400").unwrap();
//!
//! let tinted = surface.mix(primary, 0.08).unwrap();
//! assert_eq!(tinted.to_canonical_string(), "rgb(245, 238, 235)");
//! ```

pub mod color;
pub mod error;
pub mod scale;

pub use color::Color;
pub use error::{Result, StyleError};
pub use scale::{DeviceMetrics, ScaleResolver};

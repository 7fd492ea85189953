//! Swatch Animation Contract
//!
//! Animation drivers (springs, timers, native drivers) live outside Swatch.
//! The only thing the style engine needs from them is a progress value; this
//! crate maps that progress onto visual values.
//!
//! Interpolation tables are monotonic input → output maps, like
//! `progress [0, 0.6] → opacity [1, 0]`. Easing stays with the driver.

pub mod interpolate;

pub use interpolate::{Interpolate, Interpolation};

//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Color roles
//! - Elevation levels
//! - Typography (font roles)
//! - Spacing
//! - State-layer opacity

mod color;
mod elevation;
mod opacity;
mod spacing;
mod typography;

pub use color::*;
pub use elevation::*;
pub use opacity::*;
pub use spacing::*;
pub use typography::*;

//! Swatch component styles
//!
//! State-dependent style resolvers for the themed component families, plus
//! the content filtering and prop-injection pass used by container
//! components such as the app bar.
//!
//! Every resolver takes a [`StyleContext`](style::StyleContext) and the
//! component's current state and returns a plain `*Style` record. Nothing
//! here renders or keeps state between calls.
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
//! let style = Checkbox::new(ToggleStatus::Checked).resolve(&cx).unwrap();
//! assert_eq!(style.colors.foreground.to_canonical_string(), "rgba(98, 0, 238, 0.87)");
//! ```

pub mod components;
pub mod content;
pub mod style;

pub use content::{render_content, ContentContext, ContentFilter, ContentNode, Element, SlotKind};
pub use style::{
    resolve_surface_color, ComponentVisualState, ResolvedStyle, Resolve, StyleContext,
    ToggleStatus,
};

/// Common imports for resolver users.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::content::{
        render_content, ContentContext, ContentFilter, ContentNode, Element, ElementKind,
        SlotKind,
    };
    pub use crate::style::{
        resolve_surface_color, Align, ComponentVisualState, CornerRadii, ResolvedStyle, Resolve,
        StyleContext, StyleFragment, StyleStack, ToggleStatus,
    };
}

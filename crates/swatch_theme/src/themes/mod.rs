//! Built-in themes

mod current;
mod legacy;

pub use current::CurrentTheme;
pub use legacy::LegacyTheme;

//! Elevation overlay resolution
//!
//! The legacy and current schemas encode elevation differently: a
//! precomputed overlay table versus tinting the surface toward primary.
//! The schema is checked first and the two policies are never blended.

use swatch_core::{Color, Result};
use swatch_theme::{ColorRole, ElevationLevel, SchemaVersion};

use super::StyleContext;

/// Share of primary mixed into an elevated current-schema surface
pub const ELEVATED_TINT_RATIO: f32 = 0.08;

/// Resolve the surface color for a container at `level`.
///
/// Evaluated in strict order:
/// 1. `custom` is returned verbatim.
/// 2. Legacy schema: dark and adaptive themes use the overlay table entry
///    for `level`; every other legacy theme gets the primary color.
/// 3. Current schema: elevated containers mix the surface toward primary
///    by [`ELEVATED_TINT_RATIO`]; otherwise the plain surface color.
pub fn resolve_surface_color(
    cx: &StyleContext<'_>,
    level: ElevationLevel,
    custom: Option<Color>,
    elevated: bool,
) -> Result<Color> {
    if let Some(color) = custom {
        tracing::trace!(%color, "surface color from caller override");
        return Ok(color);
    }

    let theme = cx.theme();
    let color = match theme.schema() {
        SchemaVersion::Legacy => {
            if theme.is_dark() && theme.is_adaptive() {
                theme.elevation(level)
            } else {
                theme.color(ColorRole::Primary)?
            }
        }
        SchemaVersion::Current => {
            let surface = theme.color(ColorRole::Surface)?;
            if elevated {
                surface.mix(theme.color(ColorRole::Primary)?, ELEVATED_TINT_RATIO)?
            } else {
                surface
            }
        }
    };

    tracing::trace!(
        schema = %theme.schema(),
        level = level.get(),
        elevated,
        %color,
        "resolved surface color"
    );
    Ok(color)
}

//! Elevation tokens

use serde::Serialize;
use swatch_core::{Color, Result, StyleError};

/// Overlay transparency of white over the surface, per level, for legacy
/// dark themes
const LEGACY_OVERLAY_TRANSPARENCY: [f32; 6] = [0.0, 0.05, 0.07, 0.08, 0.09, 0.10];

/// Nominal visual height above the base surface, 0 through 5
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct ElevationLevel(u8);

impl ElevationLevel {
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX {
            return Err(StyleError::precondition(format!(
                "elevation level must be within 0..={}, got {level}",
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for ElevationLevel {
    type Error = StyleError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

/// Surface tint for each elevation level
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationLevels([Color; 6]);

impl ElevationLevels {
    pub const fn new(levels: [Color; 6]) -> Self {
        Self(levels)
    }

    /// Legacy overlay table: `surface` mixed toward white by the overlay
    /// transparency of each level.
    pub fn legacy_overlay(surface: Color) -> Result<Self> {
        let mut levels = [surface; 6];
        for (slot, transparency) in levels.iter_mut().zip(LEGACY_OVERLAY_TRANSPARENCY) {
            *slot = surface.mix(Color::WHITE, transparency)?;
        }
        Ok(Self(levels))
    }

    pub fn get(&self, level: ElevationLevel) -> Color {
        self.0[level.index()]
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }
}

impl Default for ElevationLevels {
    fn default() -> Self {
        Self([Color::TRANSPARENT; 6])
    }
}

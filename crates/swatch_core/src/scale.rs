//! Device scaling
//!
//! Design sizes are authored against a 350 x 680 guideline device. The
//! [`ScaleResolver`] converts them into sizes for the actual device metrics.
//! Scaling is linear in the logical size, so it is monotonic and
//! deterministic for a given device profile.

use crate::error::{Result, StyleError};

/// Guideline device width the design sizes were authored against
pub const GUIDELINE_BASE_WIDTH: f32 = 350.0;
/// Guideline device height the design sizes were authored against
pub const GUIDELINE_BASE_HEIGHT: f32 = 680.0;
/// Default damping factor for [`ScaleResolver::moderate_scale`]
pub const DEFAULT_MODERATE_FACTOR: f32 = 0.5;

/// Physical characteristics of the target device
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceMetrics {
    width: f32,
    height: f32,
    pixel_ratio: f32,
}

impl DeviceMetrics {
    /// The guideline device itself; scaling against it is the identity.
    pub const REFERENCE: DeviceMetrics = DeviceMetrics {
        width: GUIDELINE_BASE_WIDTH,
        height: GUIDELINE_BASE_HEIGHT,
        pixel_ratio: 1.0,
    };

    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("pixel ratio", pixel_ratio),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(StyleError::precondition(format!(
                    "device {name} must be positive and finite, got {value}"
                )));
            }
        }

        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Shorter screen edge, independent of orientation
    pub fn short_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Longer screen edge, independent of orientation
    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Converts logical sizes into device-adjusted sizes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleResolver {
    metrics: DeviceMetrics,
}

impl ScaleResolver {
    pub fn new(metrics: DeviceMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> DeviceMetrics {
        self.metrics
    }

    /// Scale proportionally to the device's short side
    pub fn scale(&self, size: f32) -> Result<f32> {
        let size = logical_size(size)?;
        Ok(self.metrics.short_side() / GUIDELINE_BASE_WIDTH * size)
    }

    /// Scale proportionally to the device's long side
    pub fn vertical_scale(&self, size: f32) -> Result<f32> {
        let size = logical_size(size)?;
        Ok(self.metrics.long_side() / GUIDELINE_BASE_HEIGHT * size)
    }

    /// Scale halfway between the logical size and [`Self::scale`]
    pub fn moderate_scale(&self, size: f32) -> Result<f32> {
        self.moderate_scale_with(size, DEFAULT_MODERATE_FACTOR)
    }

    /// Scale by `factor` of the way between the logical size and [`Self::scale`]
    pub fn moderate_scale_with(&self, size: f32, factor: f32) -> Result<f32> {
        if !(factor.is_finite() && (0.0..=1.0).contains(&factor)) {
            return Err(StyleError::precondition(format!(
                "moderate scale factor must be within [0, 1], got {factor}"
            )));
        }
        let scaled = self.scale(size)?;
        Ok(size + (scaled - size) * factor)
    }

    /// Snap a device size to the nearest physical pixel
    pub fn round_to_pixel(&self, value: f32) -> f32 {
        (value * self.metrics.pixel_ratio).round() / self.metrics.pixel_ratio
    }

    /// Thinnest line that still renders: one physical pixel, at least 0.4 logical
    pub fn hairline_width(&self) -> f32 {
        let width = self.round_to_pixel(0.4);
        if width == 0.0 {
            1.0 / self.metrics.pixel_ratio
        } else {
            width
        }
    }
}

fn logical_size(size: f32) -> Result<f32> {
    if size.is_finite() && size >= 0.0 {
        Ok(size)
    } else {
        Err(StyleError::precondition(format!(
            "logical size must be finite and non-negative, got {size}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> ScaleResolver {
        ScaleResolver::new(DeviceMetrics::new(390.0, 844.0, 3.0).unwrap())
    }

    #[test]
    fn test_reference_device_is_identity() {
        let scale = ScaleResolver::default();
        assert_eq!(scale.scale(16.0).unwrap(), 16.0);
        assert_eq!(scale.moderate_scale(16.0).unwrap(), 16.0);
        assert_eq!(scale.vertical_scale(16.0).unwrap(), 16.0);
    }

    #[test]
    fn test_moderate_scale_is_halfway() {
        let scale = phone();
        let full = scale.scale(100.0).unwrap();
        let moderate = scale.moderate_scale(100.0).unwrap();
        assert!((moderate - (100.0 + (full - 100.0) / 2.0)).abs() < 1e-4);
        assert!(moderate > 100.0 && moderate < full);
    }

    #[test]
    fn test_scaling_is_monotonic() {
        let scale = phone();
        let mut previous = scale.moderate_scale(0.0).unwrap();
        for step in 1..200 {
            let next = scale.moderate_scale(step as f32 * 0.5).unwrap();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let portrait = ScaleResolver::new(DeviceMetrics::new(390.0, 844.0, 3.0).unwrap());
        let landscape = ScaleResolver::new(DeviceMetrics::new(844.0, 390.0, 3.0).unwrap());
        assert_eq!(portrait.scale(24.0), landscape.scale(24.0));
    }

    #[test]
    fn test_invalid_sizes_are_precondition_violations() {
        let scale = phone();
        for bad in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                scale.moderate_scale(bad),
                Err(StyleError::PreconditionViolation(_))
            ));
        }
        assert!(DeviceMetrics::new(0.0, 800.0, 2.0).is_err());
        assert!(scale.moderate_scale_with(10.0, 1.5).is_err());
    }

    #[test]
    fn test_pixel_rounding_and_hairline() {
        let scale = phone();
        assert!((scale.round_to_pixel(10.1) - 10.0).abs() < 1e-6);
        assert!((scale.hairline_width() - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(ScaleResolver::default().hairline_width(), 1.0);
    }
}

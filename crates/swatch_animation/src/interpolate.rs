//! Progress interpolation tables
//!
//! An [`Interpolation`] maps a progress value produced by an external
//! animation driver onto a visual value (opacity, scale, translation).
//! Timing and cancellation belong to the driver; this side is pure.

use smallvec::SmallVec;
use swatch_core::{Result, StyleError};

/// Anything that turns driver progress into an output value
pub trait Interpolate {
    fn interpolate(&self, progress: f32) -> f32;
}

/// Piecewise linear interpolation over a strictly increasing input range.
/// Progress outside the range holds the first or last output value.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
}

impl Interpolation {
    /// Build a table; `input` must be strictly increasing and the same
    /// length as `output` (at least two stops).
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self> {
        if input.len() < 2 || input.len() != output.len() {
            return Err(StyleError::precondition(format!(
                "interpolation needs two or more matching stops, got {} inputs and {} outputs",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(StyleError::precondition(
                "interpolation ranges must be finite",
            ));
        }
        if input.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(StyleError::precondition(
                "interpolation input range must be strictly increasing",
            ));
        }

        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
        })
    }

    pub fn input_range(&self) -> &[f32] {
        &self.input
    }

    pub fn output_range(&self) -> &[f32] {
        &self.output
    }

    fn segment(&self, progress: f32) -> usize {
        let last = self.input.len() - 2;
        self.input[1..=last]
            .iter()
            .position(|&stop| progress < stop)
            .unwrap_or(last)
    }
}

impl Interpolate for Interpolation {
    fn interpolate(&self, progress: f32) -> f32 {
        let first = self.input[0];
        let last = self.input[self.input.len() - 1];

        if progress <= first {
            return self.output[0];
        }
        if progress >= last {
            return self.output[self.output.len() - 1];
        }

        let i = self.segment(progress);
        let (in_lo, in_hi) = (self.input[i], self.input[i + 1]);
        let (out_lo, out_hi) = (self.output[i], self.output[i + 1]);

        let local = (progress - in_lo) / (in_hi - in_lo);
        out_lo + (out_hi - out_lo) * local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fades_out_over_partial_range() {
        let opacity = Interpolation::new(&[0.0, 0.6], &[1.0, 0.0]).unwrap();
        assert_eq!(opacity.interpolate(0.0), 1.0);
        assert!((opacity.interpolate(0.3) - 0.5).abs() < 1e-6);
        assert_eq!(opacity.interpolate(0.6), 0.0);
        assert_eq!(opacity.interpolate(1.0), 0.0);
    }

    #[test]
    fn test_out_of_range_progress_holds_endpoints() {
        let scale = Interpolation::new(&[0.0, 1.0], &[0.2, 1.0]).unwrap();
        assert_eq!(scale.interpolate(1.5), 1.0);
        assert_eq!(scale.interpolate(-0.5), 0.2);
    }

    #[test]
    fn test_multi_segment_lookup() {
        let table = Interpolation::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 30.0]).unwrap();
        assert!((table.interpolate(0.25) - 5.0).abs() < 1e-5);
        assert!((table.interpolate(0.75) - 20.0).abs() < 1e-5);
        assert_eq!(table.interpolate(0.5), 10.0);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert!(Interpolation::new(&[0.0], &[1.0]).is_err());
        assert!(Interpolation::new(&[0.0, 1.0], &[1.0]).is_err());
        assert!(Interpolation::new(&[1.0, 0.0], &[0.0, 1.0]).is_err());
        assert!(Interpolation::new(&[0.0, f32::NAN], &[0.0, 1.0]).is_err());
    }
}

//! CIE L*a*b* color triple and its domain checks.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Valid lightness domain.
pub const LIGHTNESS_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Valid domain for each chrominance axis (a* and b*).
pub const CHROMINANCE_RANGE: RangeInclusive<f64> = -128.0..=127.0;

/// A color in CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (diffuse white).
    pub l: f64,
    /// Green (negative) to red (positive) axis.
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis.
    pub b: f64,
}

impl Lab {
    /// Build a color without checking its ranges.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Build a color from raw components, checking shape and then each
    /// component in L*, a*, b* order.
    pub fn parse(components: &[f64]) -> Result<Self, LabError> {
        let lab = Self::try_from(components)?;
        lab.validate()?;
        Ok(lab)
    }

    /// Check every component against its domain, stopping at the first
    /// offending value. NaN is never in range.
    pub fn validate(&self) -> Result<(), LabError> {
        if !LIGHTNESS_RANGE.contains(&self.l) {
            return Err(LabError::InvalidColorRange { value: self.l });
        }
        for value in [self.a, self.b] {
            if !CHROMINANCE_RANGE.contains(&value) {
                return Err(LabError::InvalidColorRange { value });
            }
        }
        Ok(())
    }

    /// Chroma of the untransformed (a*, b*) vector.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl From<[f64; 3]> for Lab {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self { l, a, b }
    }
}

impl TryFrom<&[f64]> for Lab {
    type Error = LabError;

    /// Shape check only; ranges are left to [`Lab::validate`].
    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match components {
            &[l, a, b] => Ok(Self { l, a, b }),
            _ => Err(LabError::InvalidInputShape {
                components: components.to_vec(),
            }),
        }
    }
}

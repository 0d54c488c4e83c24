//! Parametric weighting factors k_L, k_C, k_H.
//!
//! The factors adapt the formula to viewing conditions. The CIE reference
//! conditions (graphic arts) use 1 for all three; the textile industry
//! conventionally doubles k_L.

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Divisors applied to the lightness, chroma and hue terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightingFactors {
    /// Lightness weight. Default: 1.
    #[serde(default = "WeightingFactors::unit")]
    pub k_l: f64,
    /// Chroma weight. Default: 1.
    #[serde(default = "WeightingFactors::unit")]
    pub k_c: f64,
    /// Hue weight. Default: 1.
    #[serde(default = "WeightingFactors::unit")]
    pub k_h: f64,
}

impl WeightingFactors {
    /// CIE reference conditions.
    pub const GRAPHIC_ARTS: Self = Self {
        k_l: 1.0,
        k_c: 1.0,
        k_h: 1.0,
    };

    /// Textile industry convention (lightness differences are tolerated more).
    pub const TEXTILES: Self = Self {
        k_l: 2.0,
        k_c: 1.0,
        k_h: 1.0,
    };

    /// Build a set of factors, rejecting anything that is not a positive
    /// finite number.
    pub fn new(k_l: f64, k_c: f64, k_h: f64) -> Result<Self, LabError> {
        for (name, value) in [("k_L", k_l), ("k_C", k_c), ("k_H", k_h)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LabError::InvalidWeightingFactor { name, value });
            }
        }
        Ok(Self { k_l, k_c, k_h })
    }

    fn unit() -> f64 {
        1.0
    }
}

impl Default for WeightingFactors {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

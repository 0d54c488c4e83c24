//! CIEDE2000 color difference (ΔE₀₀).
//!
//! Works in a primed Lab space where the a* axis is stretched for near-neutral
//! colors, then combines lightness, chroma and hue differences with their
//! compensation factors and the blue-region rotation term.
//!
//! All angles are in degrees; conversion to radians happens only at the
//! trigonometric call.
//!
//! # Reference
//! - Sharma, Wu & Dalal (2005): implementation notes and supplementary test
//!   data for the CIEDE2000 formula
//! - Luo, Cui & Rigg (2001): development of the CIEDE2000 formula

use serde::Serialize;

use crate::error::LabError;
use crate::lab::Lab;
use crate::weights::WeightingFactors;

/// 25⁷, the chroma pivot shared by G and R_C.
const CHROMA_PIVOT_7: f64 = 6_103_515_625.0;

/// Result record of one color difference evaluation.
///
/// Holds ΔE₀₀ together with the intermediate quantities it was derived from.
/// Serialized keys follow the formula's notation (`C_1_dash`, `S_L`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ciede2000 {
    /// a* of the first color after the G stretch.
    pub a_1_dash: f64,
    /// a* of the second color after the G stretch.
    pub a_2_dash: f64,
    #[serde(rename = "C_1_dash")]
    pub c_1_dash: f64,
    #[serde(rename = "C_2_dash")]
    pub c_2_dash: f64,
    /// Hue of the first color in [0, 360).
    pub h_1_dash: f64,
    /// Hue of the second color in [0, 360).
    pub h_2_dash: f64,
    /// Mean hue. Equals `h_1_dash + h_2_dash` when either chroma is zero.
    pub h_bar_dash: f64,
    /// a* stretch factor for low-chroma colors, in [0, 0.5].
    #[serde(rename = "G")]
    pub g: f64,
    /// Hue-dependent weighting used by S_H.
    #[serde(rename = "T")]
    pub t: f64,
    #[serde(rename = "S_L")]
    pub s_l: f64,
    #[serde(rename = "S_H")]
    pub s_h: f64,
    #[serde(rename = "S_C")]
    pub s_c: f64,
    /// Rotation term coupling chroma and hue differences in the blue region.
    #[serde(rename = "R_T")]
    pub r_t: f64,
    /// The color difference. Never negative; NaN only when a weight is zero.
    #[serde(rename = "delta_E_00")]
    pub delta_e_00: f64,
}

impl Ciede2000 {
    /// Evaluate the formula for two typed colors.
    ///
    /// Both colors are range-checked first, `lab1` before `lab2`.
    pub fn between(
        lab1: &Lab,
        lab2: &Lab,
        weights: WeightingFactors,
    ) -> Result<Self, LabError> {
        lab1.validate()?;
        lab2.validate()?;
        Ok(evaluate(lab1, lab2, weights))
    }
}

/// Compute CIEDE2000 for two raw `[L*, a*, b*]` component slices.
///
/// Validation runs color by color: shape, then L*, a*, b* of `color1`, then
/// the same for `color2`. The first violation is returned and nothing is
/// computed.
pub fn ciede2000(
    color1: &[f64],
    color2: &[f64],
    weights: WeightingFactors,
) -> Result<Ciede2000, LabError> {
    let lab1 = Lab::parse(color1)?;
    let lab2 = Lab::parse(color2)?;
    Ok(evaluate(&lab1, &lab2, weights))
}

/// ΔE₀₀ under the CIE reference conditions (all weights 1).
pub fn delta_e_00(lab1: &Lab, lab2: &Lab) -> Result<f64, LabError> {
    Ciede2000::between(lab1, lab2, WeightingFactors::default()).map(|r| r.delta_e_00)
}

impl Lab {
    /// ΔE₀₀ from `self` to `other` under the CIE reference conditions.
    pub fn delta_e_00(&self, other: &Lab) -> Result<f64, LabError> {
        delta_e_00(self, other)
    }
}

/// The numeric pipeline. Inputs must already be validated.
fn evaluate(lab1: &Lab, lab2: &Lab, weights: WeightingFactors) -> Ciede2000 {
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_bar));

    let a_1_dash = (1.0 + g) * lab1.a;
    let a_2_dash = (1.0 + g) * lab2.a;
    let c_1_dash = (a_1_dash * a_1_dash + lab1.b * lab1.b).sqrt();
    let c_2_dash = (a_2_dash * a_2_dash + lab2.b * lab2.b).sqrt();
    let h_1_dash = hue_angle(lab1.b, a_1_dash);
    let h_2_dash = hue_angle(lab2.b, a_2_dash);

    // An achromatic color has no hue; both hue rules fall back when either
    // chroma is zero.
    let chromatic = c_1_dash * c_2_dash != 0.0;

    let delta_l_dash = lab2.l - lab1.l;
    let delta_c_dash = c_2_dash - c_1_dash;
    let delta_h_dash = if chromatic {
        hue_difference(h_1_dash, h_2_dash)
    } else {
        0.0
    };
    let delta_big_h_dash =
        2.0 * (c_1_dash * c_2_dash).sqrt() * (delta_h_dash.to_radians() / 2.0).sin();

    let l_bar_dash = (lab1.l + lab2.l) / 2.0;
    let c_bar_dash = (c_1_dash + c_2_dash) / 2.0;
    let h_bar_dash = if chromatic {
        mean_hue(h_1_dash, h_2_dash)
    } else {
        h_1_dash + h_2_dash
    };

    let t = 1.0 - 0.17 * cos_deg(h_bar_dash - 30.0) + 0.24 * cos_deg(2.0 * h_bar_dash)
        + 0.32 * cos_deg(3.0 * h_bar_dash + 6.0)
        - 0.20 * cos_deg(4.0 * h_bar_dash - 63.0);

    // Gaussian bump centred on the blue region.
    let delta_theta = 30.0 * (-((h_bar_dash - 275.0) / 25.0).powi(2)).exp();
    let r_c = 2.0 * chroma_weight(c_bar_dash);

    let l_offset_sq = (l_bar_dash - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_dash;
    let s_h = 1.0 + 0.015 * c_bar_dash * t;
    let r_t = -r_c * (2.0 * delta_theta.to_radians()).sin();

    let lightness = delta_l_dash / (weights.k_l * s_l);
    let chroma = delta_c_dash / (weights.k_c * s_c);
    let hue = delta_big_h_dash / (weights.k_h * s_h);
    let radicand = lightness.powi(2) + chroma.powi(2) + hue.powi(2) + r_t * chroma * hue;
    // Cancellation can leave a tiny negative radicand for near-identical
    // colors. NaN (e.g. from a zero weight) must pass through unchanged.
    let delta_e_00 = if radicand < 0.0 { 0.0 } else { radicand.sqrt() };

    Ciede2000 {
        a_1_dash,
        a_2_dash,
        c_1_dash,
        c_2_dash,
        h_1_dash,
        h_2_dash,
        h_bar_dash,
        g,
        t,
        s_l,
        s_h,
        s_c,
        r_t,
        delta_e_00,
    }
}

/// sqrt(C⁷ / (C⁷ + 25⁷)), in [0, 1).
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + CHROMA_PIVOT_7)).sqrt()
}

/// Hue angle of (a', b) in degrees, normalized to [0, 360).
fn hue_angle(b: f64, a_dash: f64) -> f64 {
    let h = b.atan2(a_dash).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// Signed hue difference `h2 - h1` along the shorter arc.
fn hue_difference(h1: f64, h2: f64) -> f64 {
    let diff = h2 - h1;
    if diff.abs() <= 180.0 {
        diff
    } else if diff > 180.0 {
        diff - 360.0
    } else {
        diff + 360.0
    }
}

/// Mean of two hues, taken across the 0/360 seam when they are more than
/// 180 degrees apart.
fn mean_hue(h1: f64, h2: f64) -> f64 {
    let sum = h1 + h2;
    if (h1 - h2).abs() <= 180.0 {
        sum / 2.0
    } else if sum < 360.0 {
        (sum + 360.0) / 2.0
    } else {
        (sum - 360.0) / 2.0
    }
}

fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Input validation failures for the color difference calculator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LabError {
    #[error("{components:?} -> Tuple not in valid (L*, a*, b*) format")]
    InvalidInputShape { components: Vec<f64> },
    #[error(
        "{value} -> Value not in valid L*a*b* color space. L*: 0..100 a*: -128..127 b*: -128..127"
    )]
    InvalidColorRange { value: f64 },
    #[error("{name} -> weighting factor must be a positive finite number, got {value}")]
    InvalidWeightingFactor { name: &'static str, value: f64 },
}

//! CIEDE2000 core — perceptual color difference between two CIE L*a*b* colors.
//!
//! Pure math: validate two Lab triples, run the CIEDE2000 pipeline, and
//! return ΔE₀₀ along with every intermediate quantity.

pub mod difference;
pub mod error;
pub mod lab;
pub mod weights;

// Re-exports for convenience.
pub use difference::{Ciede2000, ciede2000, delta_e_00};
pub use error::LabError;
pub use lab::Lab;
pub use weights::WeightingFactors;

//! Rendering of the result record.

use ciede2000_core::Ciede2000;

use crate::config::{MAX_PRECISION, OutputFormat};
use crate::error::CliError;

/// Every quantity of the record in output order, keyed by its formula name.
fn quantities(result: &Ciede2000) -> [(&'static str, f64); 14] {
    [
        ("a_1_dash", result.a_1_dash),
        ("a_2_dash", result.a_2_dash),
        ("C_1_dash", result.c_1_dash),
        ("C_2_dash", result.c_2_dash),
        ("h_1_dash", result.h_1_dash),
        ("h_2_dash", result.h_2_dash),
        ("h_bar_dash", result.h_bar_dash),
        ("G", result.g),
        ("T", result.t),
        ("S_L", result.s_l),
        ("S_H", result.s_h),
        ("S_C", result.s_c),
        ("R_T", result.r_t),
        ("delta_E_00", result.delta_e_00),
    ]
}

pub fn render(
    result: &Ciede2000,
    format: OutputFormat,
    verbose: bool,
    precision: usize,
) -> Result<String, CliError> {
    let precision = precision.min(MAX_PRECISION);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text if verbose => Ok(quantities(result)
            .iter()
            .map(|(name, value)| format!("{name:<10} = {value:.precision$}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Text => Ok(format!("{:.precision$}", result.delta_e_00)),
    }
}

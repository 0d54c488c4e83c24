//! Command-line argument parsing.
//!
//! ```text
//! ciede2000 [--kl K] [--kc K] [--kh K] [--textiles] [--json] [--verbose] L1,a1,b1 L2,a2,b2
//! ```
//!
//! Colors are comma-separated so that negative components never look like
//! options. Only `-h` and arguments starting with `--` are treated as options.

use ciede2000_core::WeightingFactors;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

pub const USAGE: &str = "\
Usage: ciede2000 [OPTIONS] L1,a1,b1 L2,a2,b2

Compute the CIEDE2000 color difference between two CIE L*a*b* colors.

Options:
  --kl <K>      lightness weighting factor (default 1)
  --kc <K>      chroma weighting factor (default 1)
  --kh <K>      hue weighting factor (default 1)
  --textiles    use textile weights (k_L = 2)
  --json        print every intermediate quantity as JSON
  --verbose     print every intermediate quantity as text
  -h, --help    show this message

Environment:
  CIEDE2000_FORMAT     text | json
  CIEDE2000_PRECISION  decimal places for text output (default 4)";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Compare(Comparison),
}

/// A fully parsed comparison request. Colors are left unvalidated for the
/// calculator to check.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub color1: Vec<f64>,
    pub color2: Vec<f64>,
    pub weights: WeightingFactors,
    pub format: OutputFormat,
    pub verbose: bool,
}

pub fn parse_args<I>(args: I, config: &CliConfig) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut colors = Vec::new();
    let mut textiles = false;
    let mut k_l = None;
    let mut k_c = None;
    let mut k_h = None;
    let mut format = config.format;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--kl" => k_l = Some(option_value(&mut args, "--kl")?),
            "--kc" => k_c = Some(option_value(&mut args, "--kc")?),
            "--kh" => k_h = Some(option_value(&mut args, "--kh")?),
            "--textiles" => textiles = true,
            "--json" => format = OutputFormat::Json,
            "--verbose" => verbose = true,
            other if other.starts_with("--") => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
            _ => colors.push(parse_color(&arg)?),
        }
    }

    let preset = if textiles {
        WeightingFactors::TEXTILES
    } else {
        WeightingFactors::GRAPHIC_ARTS
    };
    let weights = WeightingFactors::new(
        k_l.unwrap_or(preset.k_l),
        k_c.unwrap_or(preset.k_c),
        k_h.unwrap_or(preset.k_h),
    )?;

    let count = colors.len();
    let mut colors = colors.into_iter();
    match (colors.next(), colors.next(), colors.next()) {
        (Some(color1), Some(color2), None) => Ok(Command::Compare(Comparison {
            color1,
            color2,
            weights,
            format,
            verbose,
        })),
        _ => Err(CliError::ColorCount(count)),
    }
}

fn option_value(
    args: &mut impl Iterator<Item = String>,
    name: &'static str,
) -> Result<f64, CliError> {
    parse_number(args.next().ok_or(CliError::MissingValue(name))?)
}

fn parse_color(arg: &str) -> Result<Vec<f64>, CliError> {
    arg.split(',').map(|part| parse_number(part.trim().to_string())).collect()
}

fn parse_number(arg: String) -> Result<f64, CliError> {
    arg.parse().map_err(|source| CliError::InvalidNumber { arg, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            format: OutputFormat::Text,
            precision: 4,
        }
    }

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        parse_args(args.iter().map(|s| s.to_string()), &config())
    }

    fn comparison(args: &[&str]) -> Comparison {
        match parse(args).expect("valid arguments") {
            Command::Compare(c) => c,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_two_colors_with_default_weights() {
        let c = comparison(&["50,2.6772,-79.7751", "50, 0, -82.7485"]);
        assert_eq!(c.color1, vec![50.0, 2.6772, -79.7751]);
        assert_eq!(c.color2, vec![50.0, 0.0, -82.7485]);
        assert_eq!(c.weights, WeightingFactors::default());
        assert_eq!(c.format, OutputFormat::Text);
        assert!(!c.verbose);
    }

    #[test]
    fn test_negative_leading_component_is_a_color() {
        let c = comparison(&["-5,0,0", "50,0,0"]);
        assert_eq!(c.color1, vec![-5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_weight_options_override_preset() {
        let c = comparison(&["--textiles", "--kh", "1.5", "50,0,0", "60,0,0"]);
        assert_eq!(
            c.weights,
            WeightingFactors {
                k_l: 2.0,
                k_c: 1.0,
                k_h: 1.5
            }
        );
    }

    #[test]
    fn test_json_flag_overrides_config() {
        let c = comparison(&["50,0,0", "60,0,0", "--json", "--verbose"]);
        assert_eq!(c.format, OutputFormat::Json);
        assert!(c.verbose);
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(&["50,0,0", "--help"]).expect("help"), Command::Help);
        assert_eq!(parse(&["-h"]).expect("help"), Command::Help);
    }

    #[test]
    fn test_wrong_color_count() {
        assert!(matches!(parse(&["50,0,0"]), Err(CliError::ColorCount(1))));
        assert!(matches!(
            parse(&["50,0,0", "50,0,0", "50,0,0"]),
            Err(CliError::ColorCount(3))
        ));
    }

    #[test]
    fn test_short_color_is_passed_through_for_shape_check() {
        let c = comparison(&["50,0", "50,0,0"]);
        assert_eq!(c.color1, vec![50.0, 0.0]);
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        assert!(matches!(
            parse(&["--kc", "0", "50,0,0", "60,0,0"]),
            Err(CliError::Lab(_))
        ));
    }

    #[test]
    fn test_bad_number_and_missing_value() {
        assert!(matches!(
            parse(&["50,x,0", "60,0,0"]),
            Err(CliError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse(&["50,0,0", "60,0,0", "--kl"]),
            Err(CliError::MissingValue("--kl"))
        ));
        assert!(matches!(
            parse(&["--fast", "50,0,0", "60,0,0"]),
            Err(CliError::UnknownOption(_))
        ));
    }
}

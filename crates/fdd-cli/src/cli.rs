//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fdd_app::app::ConstantOverrides;
use fdd_domain::model::constants::STRICT_THRESHOLD_PERCENT;
use fdd_domain::model::parse_reading;
use fdd_types::OutputFormat;

#[derive(Parser)]
#[command(name = "fdd-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Field dry density and compaction check (sand replacement method)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub constants: ConstantArgs,
}

/// Reference parameter overrides for this run only
#[derive(Args, Debug, Default)]
pub struct ConstantArgs {
    /// Bulk density of sand γs (g/cc)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub bulk_density_sand: Option<f64>,

    /// Weight of sand in cone Wc (g)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub sand_in_cone: Option<f64>,

    /// Specific gravity of stone particles Gs
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub specific_gravity: Option<f64>,

    /// Maximum dry density MDD (g/cc)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub mdd: Option<f64>,

    /// Compaction requirement (%)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Use the 98% compaction requirement
    #[arg(long, global = true, conflicts_with = "threshold")]
    pub strict: bool,
}

impl ConstantArgs {
    pub fn to_overrides(&self) -> ConstantOverrides {
        ConstantOverrides {
            bulk_density_sand: self.bulk_density_sand,
            weight_sand_in_cone: self.sand_in_cone,
            specific_gravity_particles: self.specific_gravity,
            max_dry_density: self.mdd,
            compaction_threshold: if self.strict {
                Some(STRICT_THRESHOLD_PERCENT)
            } else {
                self.threshold
            },
        }
    }
}

/// Readings follow form semantics: empty or invalid text counts as 0
fn lenient_reading(s: &str) -> Result<f64, String> {
    Ok(parse_reading(s))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a single test point
    Calc {
        /// Test label
        #[arg(long, short = 'n', default_value = "Test 1")]
        test_no: String,

        /// Initial weight of sand + apparatus (g)
        #[arg(long, value_parser = lenient_reading, default_value = "0", allow_hyphen_values = true)]
        w1: f64,

        /// Final weight of sand + apparatus (g)
        #[arg(long, value_parser = lenient_reading, default_value = "0", allow_hyphen_values = true)]
        w2: f64,

        /// Total wet soil excavated (g)
        #[arg(long, value_parser = lenient_reading, default_value = "0", allow_hyphen_values = true)]
        w3: f64,

        /// Wet stone / oversize weight (g)
        #[arg(long, value_parser = lenient_reading, default_value = "0", allow_hyphen_values = true)]
        w4: f64,

        /// Moisture content (%)
        #[arg(long, short = 'm', value_parser = lenient_reading, default_value = "0", allow_hyphen_values = true)]
        moisture: f64,
    },

    /// Evaluate every test point in a sheet (.toml) or readings file (.csv)
    Evaluate {
        /// Path to sheet file
        file: PathBuf,

        /// Export CSV report; `--csv` alone uses Field_Density_Report_<date>.csv,
        /// `--csv=PATH` picks the file
        #[arg(long, require_equals = true, value_name = "PATH")]
        csv: Option<Option<PathBuf>>,

        /// Export Excel report
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Write a blank sheet to fill in
    Template {
        /// Output path (.toml)
        output: PathBuf,

        /// Number of test points
        #[arg(long, short = 'n', default_value = "1")]
        points: usize,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default bulk density of sand (g/cc)
        #[arg(long)]
        set_bulk_density_sand: Option<f64>,

        /// Set default weight of sand in cone (g)
        #[arg(long)]
        set_sand_in_cone: Option<f64>,

        /// Set default specific gravity of stone particles
        #[arg(long)]
        set_specific_gravity: Option<f64>,

        /// Set default maximum dry density (g/cc)
        #[arg(long)]
        set_mdd: Option<f64>,

        /// Set default compaction requirement (%)
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_lenient_readings() {
        let cli = Cli::try_parse_from([
            "fdd-checker", "calc", "--w1", "3,500", "--w2", "abc", "--moisture", "",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc { w1, w2, w3, moisture, .. } => {
                assert_eq!(w1, 3500.0);
                assert_eq!(w2, 0.0);
                assert_eq!(w3, 0.0);
                assert_eq!(moisture, 0.0);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_strict_sets_98() {
        let cli = Cli::try_parse_from(["fdd-checker", "--strict", "calc"]).unwrap();
        assert_eq!(cli.constants.to_overrides().compaction_threshold, Some(98.0));
    }

    #[test]
    fn test_evaluate_csv_flag_forms() {
        let cli = Cli::try_parse_from(["fdd-checker", "evaluate", "s.toml", "--csv"]).unwrap();
        match cli.command {
            Commands::Evaluate { csv, .. } => assert_eq!(csv, Some(None)),
            _ => panic!("expected evaluate"),
        }
        let cli = Cli::try_parse_from(["fdd-checker", "evaluate", "s.toml", "--csv=out.csv"]).unwrap();
        match cli.command {
            Commands::Evaluate { csv, .. } => assert_eq!(csv, Some(Some(PathBuf::from("out.csv")))),
            _ => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_csv_flag_before_file_keeps_file() {
        let cli = Cli::try_parse_from(["fdd-checker", "evaluate", "--csv", "sheet.toml"]).unwrap();
        match cli.command {
            Commands::Evaluate { file, csv, .. } => {
                assert_eq!(file, PathBuf::from("sheet.toml"));
                assert_eq!(csv, Some(None));
            }
            _ => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_negative_constant_overrides() {
        let cli = Cli::try_parse_from([
            "fdd-checker", "--mdd", "-1", "calc", "--threshold", "-5.5",
        ])
        .unwrap();
        let overrides = cli.constants.to_overrides();
        assert_eq!(overrides.max_dry_density, Some(-1.0));
        assert_eq!(overrides.compaction_threshold, Some(-5.5));
    }

    #[test]
    fn test_decimal_comma_reading_is_zero() {
        let cli = Cli::try_parse_from(["fdd-checker", "calc", "--moisture", "8,5"]).unwrap();
        match cli.command {
            Commands::Calc { moisture, .. } => assert_eq!(moisture, 0.0),
            _ => panic!("expected calc"),
        }
    }
}

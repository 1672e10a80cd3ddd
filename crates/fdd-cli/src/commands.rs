//! Command handlers

use std::path::{Path, PathBuf};

use fdd_app::app::{evaluate_point, evaluate_sheet, open_sheet, ConstantOverrides};
use fdd_app::config::Config;
use fdd_app::export::export_to_excel;
use fdd_domain::model::{EvaluatedPoint, GlobalConstants, TestPoint};
use fdd_infra::csv_export::{export_results_csv, report_file_name};
use fdd_infra::sheet_file::write_sheet_template;
use fdd_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_point, output_report};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Calc {
            test_no,
            w1,
            w2,
            w3,
            w4,
            moisture,
        } => {
            let ctx = RunContext::load(&cli)?;
            let mut point = TestPoint::blank(0).with_readings(*w1, *w2, *w3, *w4, *moisture);
            point.test_no = test_no.clone();
            cmd_calc(&ctx, &point)
        }

        Commands::Evaluate { file, csv, xlsx } => {
            let ctx = RunContext::load(&cli)?;
            cmd_evaluate(&ctx, file, csv.as_ref(), xlsx.as_deref())
        }

        Commands::Template {
            output,
            points,
            force,
        } => {
            let ctx = RunContext::load(&cli)?;
            cmd_template(&ctx, output, *points, *force)
        }

        // Loads the config itself so --reset works on a broken file
        Commands::Config {
            show,
            set_bulk_density_sand,
            set_sand_in_cone,
            set_specific_gravity,
            set_mdd,
            set_threshold,
            set_output,
            reset,
        } => {
            if !cli.constants.to_overrides().is_empty() {
                warn_ignored_overrides();
            }
            cmd_config(
                *show,
                ConstantOverrides {
                    bulk_density_sand: *set_bulk_density_sand,
                    weight_sand_in_cone: *set_sand_in_cone,
                    specific_gravity_particles: *set_specific_gravity,
                    max_dry_density: *set_mdd,
                    compaction_threshold: *set_threshold,
                },
                *set_output,
                *reset,
            )
        }
    }
}

/// Config merged with the per-run CLI flags
struct RunContext {
    config: Config,
    overrides: ConstantOverrides,
    output_format: OutputFormat,
    verbose: bool,
}

impl RunContext {
    fn load(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;
        if cli.verbose {
            if let Ok(path) = Config::config_path() {
                eprintln!("Config: {}", path.display());
            }
        }

        let overrides = cli.constants.to_overrides();
        if cli.verbose && !overrides.is_empty() {
            eprintln!("Reference parameter overrides: {:?}", overrides);
        }

        Ok(Self {
            output_format: cli.format.unwrap_or(config.output_format),
            config,
            overrides,
            verbose: cli.verbose,
        })
    }

    fn constants(&self) -> GlobalConstants {
        self.overrides.apply(self.config.constants)
    }
}

fn cmd_calc(ctx: &RunContext, point: &TestPoint) -> Result<()> {
    let constants = ctx.constants();
    let evaluated = evaluate_point(point, &constants);
    warn_non_finite(std::slice::from_ref(&evaluated));
    output_point(ctx.output_format, &constants, &evaluated)
}

fn cmd_evaluate(
    ctx: &RunContext,
    file: &Path,
    csv: Option<&Option<PathBuf>>,
    xlsx: Option<&Path>,
) -> Result<()> {
    let mut sheet = open_sheet(file, &ctx.config.constants)?;
    sheet.constants = ctx.overrides.apply(sheet.constants);
    if ctx.verbose {
        eprintln!(
            "Loaded {} test point(s) from {}",
            sheet.points.len(),
            file.display()
        );
    }

    let report = evaluate_sheet(&sheet);
    let flagged: Vec<EvaluatedPoint> = report.non_finite_points().cloned().collect();
    warn_non_finite(&flagged);

    output_report(ctx.output_format, &report)?;

    if let Some(csv_path) = csv {
        let path = csv_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(report_file_name(report.generated_on)));
        export_results_csv(&report.points, &path)?;
        eprintln!("CSV exported to: {}", path.display());
    }

    if let Some(xlsx_path) = xlsx {
        export_to_excel(&report, xlsx_path)?;
        eprintln!("Excel exported to: {}", xlsx_path.display());
    }

    Ok(())
}

fn cmd_template(ctx: &RunContext, output: &Path, points: usize, force: bool) -> Result<()> {
    if output.exists() && !force {
        return Err(Error::FileExists(output.display().to_string()));
    }
    let count = points.max(1);
    write_sheet_template(output, &ctx.constants(), count)?;
    println!("Template with {} test point(s) written to {}", count, output.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    updates: ConstantOverrides,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if !updates.is_empty() {
        config.constants = updates.apply(config.constants);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

/// Reference parameter flags only affect calc/evaluate/template runs
fn warn_ignored_overrides() {
    eprintln!(
        "Warning: --bulk-density-sand/--sand-in-cone/--specific-gravity/--mdd/--threshold/--strict \
         apply to a single run and are not saved; use config --set-bulk-density-sand, \
         --set-sand-in-cone, --set-specific-gravity, --set-mdd or --set-threshold to change defaults"
    );
}

/// A moisture content of -100% makes the dry density division blow up;
/// the values are reported as computed, with a warning.
fn warn_non_finite(points: &[EvaluatedPoint]) {
    for evaluated in points.iter().filter(|p| !p.result.is_finite()) {
        eprintln!(
            "Warning: {}: moisture content {}% gives a non-finite dry density ({})",
            evaluated.point.test_no, evaluated.point.moisture_content, evaluated.result.dry_density
        );
    }
}

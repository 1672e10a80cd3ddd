//! Sheet evaluation use case

use std::path::Path;

use chrono::{Local, NaiveDate};
use fdd_domain::model::{EvaluatedPoint, GlobalConstants, TestPoint, TestSheet};
use fdd_domain::service::calculate;
use fdd_infra::csv_import::load_test_points_from_csv;
use fdd_infra::sheet_file::load_sheet;
use fdd_types::{Error, Result};
use serde::Serialize;

/// Input file kind, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSource {
    Toml,
    Csv,
}

impl SheetSource {
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("toml") => Ok(SheetSource::Toml),
            Some("csv") => Ok(SheetSource::Csv),
            _ => Err(Error::UnsupportedFile(path.display().to_string())),
        }
    }
}

/// Per-invocation overrides for individual reference parameters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantOverrides {
    pub bulk_density_sand: Option<f64>,
    pub weight_sand_in_cone: Option<f64>,
    pub specific_gravity_particles: Option<f64>,
    pub max_dry_density: Option<f64>,
    pub compaction_threshold: Option<f64>,
}

impl ConstantOverrides {
    pub fn apply(&self, constants: GlobalConstants) -> GlobalConstants {
        GlobalConstants {
            bulk_density_sand: self.bulk_density_sand.unwrap_or(constants.bulk_density_sand),
            weight_sand_in_cone: self.weight_sand_in_cone.unwrap_or(constants.weight_sand_in_cone),
            specific_gravity_particles: self
                .specific_gravity_particles
                .unwrap_or(constants.specific_gravity_particles),
            max_dry_density: self.max_dry_density.unwrap_or(constants.max_dry_density),
            compaction_threshold: self
                .compaction_threshold
                .unwrap_or(constants.compaction_threshold),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Open a TOML sheet or a CSV of readings.
///
/// CSV files carry no constants, so `fallback` is used for them and for
/// TOML sheets without a `[constants]` table.
pub fn open_sheet(path: &Path, fallback: &GlobalConstants) -> Result<TestSheet> {
    match SheetSource::detect(path)? {
        SheetSource::Toml => load_sheet(path, fallback),
        SheetSource::Csv => {
            let points = load_test_points_from_csv(path)?;
            if points.is_empty() {
                return Err(Error::SheetFormat(format!(
                    "No test points found in {}",
                    path.display()
                )));
            }
            Ok(TestSheet {
                constants: *fallback,
                points,
            })
        }
    }
}

/// Evaluated sheet, ready for display or export
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub generated_on: NaiveDate,
    pub constants: GlobalConstants,
    pub points: Vec<EvaluatedPoint>,
}

impl EvaluationReport {
    /// Points whose dry density came out infinite or NaN
    pub fn non_finite_points(&self) -> impl Iterator<Item = &EvaluatedPoint> {
        self.points.iter().filter(|p| !p.result.is_finite())
    }
}

pub fn evaluate_sheet(sheet: &TestSheet) -> EvaluationReport {
    EvaluationReport {
        generated_on: Local::now().date_naive(),
        constants: sheet.constants,
        points: sheet.evaluate(),
    }
}

pub fn evaluate_point(point: &TestPoint, constants: &GlobalConstants) -> EvaluatedPoint {
    EvaluatedPoint {
        point: point.clone(),
        result: calculate(point, constants),
    }
}

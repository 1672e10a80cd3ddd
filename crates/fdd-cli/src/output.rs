//! Output formatting module

use fdd_app::app::EvaluationReport;
use fdd_domain::model::{EvaluatedPoint, GlobalConstants};
use fdd_domain::service::{generate_compaction_report, FORMULA_FOOTER};
use fdd_types::{OutputFormat, Result};

pub fn output_point(
    output_format: OutputFormat,
    constants: &GlobalConstants,
    evaluated: &EvaluatedPoint,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(evaluated)?;
        println!("{}", content);
        return Ok(());
    }

    let r = &evaluated.result;
    println!("\nField Compaction: {}", evaluated.point.test_no);
    println!("==================");

    println!("\n--- Derivation ---");
    println!("Sand in hole:    {:.1} g", r.weight_sand_in_hole);
    println!("Total volume:    {:.1} cc", r.v_total);
    println!("Stone volume:    {:.1} cc", r.v_stone);
    println!("Wet soil:        {:.1} g", r.weight_wet_soil);
    println!("Soil volume:     {:.1} cc", r.v_soil);
    println!("Wet density:     {:.3} g/cc", r.wet_density);
    println!("------------------");

    println!("Dry density:     {:.3} g/cc", r.dry_density);
    println!(
        "Compaction:      {:.1}% ({}, requirement {}%)",
        r.field_compaction,
        r.verdict().label(),
        constants.compaction_threshold
    );
    println!("Calculated against {} g/cc MDD", constants.max_dry_density);

    if r.is_incomplete() {
        println!("\nSoil volume is zero or negative; check the w1, w2 and w4 readings.");
    }

    println!("\n{}", FORMULA_FOOTER);
    Ok(())
}

pub fn output_report(output_format: OutputFormat, report: &EvaluationReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", generate_compaction_report(&report.constants, &report.points));
    }
    Ok(())
}

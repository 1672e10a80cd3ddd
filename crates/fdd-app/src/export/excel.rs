//! Excel export functionality

use std::path::Path;

use fdd_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::app::EvaluationReport;

const DETAIL_HEADERS: [&str; 16] = [
    "Test No",
    "W1 (g)",
    "W2 (g)",
    "W3 (g)",
    "W4 (g)",
    "Moisture (%)",
    "Sand in Hole (g)",
    "V total (cc)",
    "V stone (cc)",
    "Wet Soil (g)",
    "V soil (cc)",
    "Wet Density (g/cc)",
    "Dry Density (g/cc)",
    "Compaction (%)",
    "Threshold (%)",
    "Result",
];

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export an evaluated sheet to an Excel workbook
pub fn export_to_excel(report: &EvaluationReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let parameters_sheet = workbook.add_worksheet();
    write_parameters_sheet(parameters_sheet, report)?;

    let points_sheet = workbook.add_worksheet();
    write_points_sheet(points_sheet, report)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_parameters_sheet(sheet: &mut Worksheet, report: &EvaluationReport) -> Result<()> {
    sheet.set_name("Reference Parameters").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let c = &report.constants;

    sheet
        .write_string_with_format(0, 0, "Field Dry Density Report", &header_format)
        .map_err(excel_err)?;
    sheet
        .write_string(1, 0, "Sand Replacement Method (with Stone Correction)")
        .map_err(excel_err)?;

    sheet.write_string(3, 0, "Report Date:").map_err(excel_err)?;
    sheet
        .write_string(3, 1, report.generated_on.format("%Y-%m-%d").to_string())
        .map_err(excel_err)?;

    let rows: [(&str, f64, &str); 5] = [
        ("Bulk Density Sand (γs)", c.bulk_density_sand, "g/cc"),
        ("Sand in Cone (Wc)", c.weight_sand_in_cone, "g"),
        ("Specific Gravity (Gs)", c.specific_gravity_particles, ""),
        ("Max Dry Density (MDD)", c.max_dry_density, "g/cc"),
        ("Threshold", c.compaction_threshold, "%"),
    ];
    let mut row = 5;
    for (label, value, unit) in rows {
        sheet.write_string(row, 0, label).map_err(excel_err)?;
        write_value(sheet, row, 1, value, None)?;
        sheet.write_string(row, 2, unit).map_err(excel_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 28).map_err(excel_err)?;
    Ok(())
}

fn write_points_sheet(sheet: &mut Worksheet, report: &EvaluationReport) -> Result<()> {
    sheet.set_name("Test Points").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let density_format = Format::new().set_num_format("0.000");
    let volume_format = Format::new().set_num_format("0.0");
    let percent_format = Format::new().set_num_format("0.00");

    for (col, header) in DETAIL_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (i, evaluated) in report.points.iter().enumerate() {
        let row = (i + 1) as u32;
        let p = &evaluated.point;
        let r = &evaluated.result;

        sheet.write_string(row, 0, &p.test_no).map_err(excel_err)?;
        write_value(sheet, row, 1, p.w1, None)?;
        write_value(sheet, row, 2, p.w2, None)?;
        write_value(sheet, row, 3, p.w3, None)?;
        write_value(sheet, row, 4, p.w4, None)?;
        write_value(sheet, row, 5, p.moisture_content, None)?;
        write_value(sheet, row, 6, r.weight_sand_in_hole, None)?;
        write_value(sheet, row, 7, r.v_total, Some(&volume_format))?;
        write_value(sheet, row, 8, r.v_stone, Some(&volume_format))?;
        write_value(sheet, row, 9, r.weight_wet_soil, None)?;
        write_value(sheet, row, 10, r.v_soil, Some(&volume_format))?;
        write_value(sheet, row, 11, r.wet_density, Some(&density_format))?;
        write_value(sheet, row, 12, r.dry_density, Some(&density_format))?;
        write_value(sheet, row, 13, r.field_compaction, Some(&percent_format))?;
        write_value(sheet, row, 14, report.constants.compaction_threshold, None)?;
        sheet
            .write_string(row, 15, r.verdict().label())
            .map_err(excel_err)?;
    }

    sheet.set_column_width(0, 16).map_err(excel_err)?;
    Ok(())
}

/// Excel has no representation for infinity or NaN; those cells get "-"
fn write_value(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
    format: Option<&Format>,
) -> Result<()> {
    if !value.is_finite() {
        sheet.write_string(row, col, "-").map_err(excel_err)?;
        return Ok(());
    }
    match format {
        Some(format) => sheet
            .write_number_with_format(row, col, value, format)
            .map_err(excel_err)?,
        None => sheet.write_number(row, col, value).map_err(excel_err)?,
    };
    Ok(())
}

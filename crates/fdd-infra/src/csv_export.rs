//! CSV export of evaluated test points

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use fdd_domain::model::EvaluatedPoint;
use fdd_types::Result;

pub const CSV_HEADERS: [&str; 9] = [
    "Test No",
    "W1",
    "W2",
    "W3",
    "W4",
    "Moisture %",
    "Dry Density (g/cc)",
    "Compaction %",
    "Result",
];

/// Default export file name, e.g. `Field_Density_Report_2024-05-01.csv`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Field_Density_Report_{}.csv", date.format("%Y-%m-%d"))
}

/// Write one header row and one row per point.
///
/// Dry density is written to 3 decimals and compaction to 2; raw readings
/// are written as entered.
pub fn write_results_csv<W: Write>(writer: W, points: &[EvaluatedPoint]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for evaluated in points {
        let p = &evaluated.point;
        let r = &evaluated.result;
        wtr.write_record([
            p.test_no.clone(),
            p.w1.to_string(),
            p.w2.to_string(),
            p.w3.to_string(),
            p.w4.to_string(),
            p.moisture_content.to_string(),
            format!("{:.3}", r.dry_density),
            format!("{:.2}", r.field_compaction),
            r.verdict().label().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_results_csv(points: &[EvaluatedPoint], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_results_csv(std::io::BufWriter::new(file), points)
}

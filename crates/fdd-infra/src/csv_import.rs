//! CSV loader for test point readings
//!
//! Expected columns (header optional):
//! test_no, w1, w2, w3, w4, moisture_content
//!
//! Further columns are ignored, so a report written by
//! [`crate::csv_export`] can be read back as input.

use std::path::Path;

use fdd_domain::model::{parse_reading, TestPoint};
use fdd_types::{Error, Result};

use crate::text::decode_text;

const MIN_COLUMNS: usize = 6;

/// Load test points from a CSV file
pub fn load_test_points_from_csv(path: &Path) -> Result<Vec<TestPoint>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    parse_test_points_csv(&decode_text(&bytes))
}

pub fn parse_test_points_csv(content: &str) -> Result<Vec<TestPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut points = Vec::new();
    let mut seen_any = false;
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 1;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if !seen_any {
            seen_any = true;
            if is_header(&record) {
                continue;
            }
        }
        if record.len() < MIN_COLUMNS {
            eprintln!(
                "Warning: Skipping row {}: expected {} columns, found {}",
                row_num,
                MIN_COLUMNS,
                record.len()
            );
            continue;
        }
        points.push(parse_record(&record, points.len()));
    }

    if !seen_any {
        return Err(Error::SheetFormat("CSV file is empty".to_string()));
    }
    Ok(points)
}

/// A header row carries labels where the readings would be
fn is_header(record: &csv::StringRecord) -> bool {
    let readings: Vec<&str> = record.iter().skip(1).take(5).filter(|s| !s.is_empty()).collect();
    !readings.is_empty() && readings.iter().all(|s| s.replace(',', "").parse::<f64>().is_err())
}

fn parse_record(record: &csv::StringRecord, index: usize) -> TestPoint {
    let field = |i: usize| parse_reading(record.get(i).unwrap_or(""));
    let mut point = TestPoint::blank(index).with_readings(field(1), field(2), field(3), field(4), field(5));
    if let Some(label) = record.get(0).filter(|s| !s.is_empty()) {
        point.test_no = label.to_string();
    }
    point
}

//! Test sheet files (TOML)
//!
//! ```toml
//! [constants]            # optional
//! max_dry_density = 2.301
//!
//! [[points]]
//! test_no = "L"
//! w1 = 3500.0
//! w2 = 1000.0
//! w3 = 2200.0
//! w4 = 300.0
//! moisture_content = 8.0
//! ```

use std::collections::HashSet;
use std::path::Path;

use fdd_domain::model::{GlobalConstants, TestPoint, TestSheet};
use fdd_types::{Error, Result};
use serde::Deserialize;

use crate::text::decode_text;

#[derive(Debug, Deserialize)]
struct SheetFile {
    constants: Option<GlobalConstants>,
    #[serde(default)]
    points: Vec<TestPoint>,
}

/// Load a sheet from a TOML file.
///
/// `fallback` supplies the constants when the file has no `[constants]`
/// table.
pub fn load_sheet(path: &Path, fallback: &GlobalConstants) -> Result<TestSheet> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    load_sheet_from_str(&decode_text(&bytes), fallback)
}

pub fn load_sheet_from_str(content: &str, fallback: &GlobalConstants) -> Result<TestSheet> {
    let file: SheetFile = toml::from_str(content)
        .map_err(|e| Error::SheetFormat(format!("Failed to parse sheet TOML: {}", e)))?;

    if file.points.is_empty() {
        return Err(Error::SheetFormat("Sheet has no [[points]] entries".to_string()));
    }

    let mut ids = HashSet::new();
    for point in &file.points {
        if !ids.insert(point.id.as_str()) {
            return Err(Error::SheetFormat(format!("Duplicate test point id: {}", point.id)));
        }
    }

    let points = file
        .points
        .into_iter()
        .enumerate()
        .map(|(i, mut p)| {
            if p.test_no.trim().is_empty() {
                p.test_no = TestPoint::blank(i).test_no;
            }
            p
        })
        .collect();

    Ok(TestSheet {
        constants: file.constants.unwrap_or(*fallback),
        points,
    })
}

/// Render a blank sheet with `count` points (at least one)
pub fn render_sheet_template(constants: &GlobalConstants, count: usize) -> Result<String> {
    let mut sheet = TestSheet::with_constants(*constants);
    for _ in 1..count {
        sheet.add_point();
    }
    toml::to_string_pretty(&sheet)
        .map_err(|e| Error::SheetFormat(format!("Failed to render sheet TOML: {}", e)))
}

pub fn write_sheet_template(path: &Path, constants: &GlobalConstants, count: usize) -> Result<()> {
    let content = render_sheet_template(constants, count)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

//! Infrastructure layer - file formats for test sheets and reports

pub mod csv_export;
pub mod csv_import;
pub mod sheet_file;
mod text;

//! Domain services

pub mod compaction_calculator;
pub mod report;

pub use compaction_calculator::calculate;
pub use report::{generate_compaction_report, FORMULA_FOOTER};

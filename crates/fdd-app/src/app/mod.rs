//! Use cases

mod evaluation_service;

pub use evaluation_service::{
    evaluate_point, evaluate_sheet, open_sheet, ConstantOverrides, EvaluationReport, SheetSource,
};

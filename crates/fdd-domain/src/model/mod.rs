//! Domain model types

pub mod calculation_result;
pub mod constants;
pub mod reading;
pub mod test_point;
pub mod test_sheet;

pub use calculation_result::{CalculationResult, Verdict};
pub use constants::GlobalConstants;
pub use reading::parse_reading;
pub use test_point::TestPoint;
pub use test_sheet::{EvaluatedPoint, TestSheet};

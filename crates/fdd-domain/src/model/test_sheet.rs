//! A working sheet: one set of constants and the test points checked against it

use serde::{Deserialize, Serialize};

use super::{CalculationResult, GlobalConstants, TestPoint};
use crate::service::calculate;

/// A test point paired with its derived values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedPoint {
    pub point: TestPoint,
    pub result: CalculationResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSheet {
    #[serde(default)]
    pub constants: GlobalConstants,
    #[serde(default)]
    pub points: Vec<TestPoint>,
}

impl Default for TestSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSheet {
    /// Default constants and a single blank point
    pub fn new() -> Self {
        Self::with_constants(GlobalConstants::default())
    }

    pub fn with_constants(constants: GlobalConstants) -> Self {
        Self {
            constants,
            points: vec![TestPoint::blank(0)],
        }
    }

    /// Append a blank point and return its id
    pub fn add_point(&mut self) -> String {
        let point = TestPoint::blank(self.points.len());
        let id = point.id.clone();
        self.points.push(point);
        id
    }

    /// Remove a point by id.
    ///
    /// The sheet always keeps at least one point; removing the last one,
    /// or an unknown id, returns `None` and leaves the sheet unchanged.
    pub fn remove_point(&mut self, id: &str) -> Option<TestPoint> {
        if self.points.len() <= 1 {
            return None;
        }
        let index = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(index))
    }

    pub fn point(&self, id: &str) -> Option<&TestPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn point_mut(&mut self, id: &str) -> Option<&mut TestPoint> {
        self.points.iter_mut().find(|p| p.id == id)
    }

    /// Calculate every point against the sheet constants, in sheet order
    pub fn evaluate(&self) -> Vec<EvaluatedPoint> {
        self.points
            .iter()
            .map(|point| EvaluatedPoint {
                point: point.clone(),
                result: calculate(point, &self.constants),
            })
            .collect()
    }
}

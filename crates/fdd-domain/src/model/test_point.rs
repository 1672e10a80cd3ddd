use serde::{Deserialize, Serialize};

/// Raw readings from one sand-replacement test location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestPoint {
    #[serde(default = "new_point_id")]
    pub id: String,
    #[serde(default)]
    pub test_no: String,
    #[serde(default)]
    pub w1: f64, // sand + apparatus before pouring (g)
    #[serde(default)]
    pub w2: f64, // sand + apparatus after pouring (g)
    #[serde(default)]
    pub w3: f64, // total wet soil excavated (g)
    #[serde(default)]
    pub w4: f64, // wet oversize stone within w3 (g)
    #[serde(default)]
    pub moisture_content: f64, // (%)
}

/// Generate a fresh opaque point id
pub fn new_point_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl TestPoint {
    /// Blank point labelled "Test {index + 1}" with every reading at zero
    pub fn blank(index: usize) -> Self {
        Self {
            id: new_point_id(),
            test_no: format!("Test {}", index + 1),
            w1: 0.0,
            w2: 0.0,
            w3: 0.0,
            w4: 0.0,
            moisture_content: 0.0,
        }
    }

    pub fn with_readings(mut self, w1: f64, w2: f64, w3: f64, w4: f64, moisture_content: f64) -> Self {
        self.w1 = w1;
        self.w2 = w2;
        self.w3 = w3;
        self.w4 = w4;
        self.moisture_content = moisture_content;
        self
    }
}

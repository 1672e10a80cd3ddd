use serde::{Deserialize, Serialize};

/// Compaction verdict for one test point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Values derived from one test point and the session constants.
///
/// Unrounded; formatting precision is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub weight_sand_in_hole: f64, // g
    pub v_total: f64,             // cc
    pub v_stone: f64,             // cc
    pub weight_wet_soil: f64,     // g
    pub v_soil: f64,              // cc
    pub wet_density: f64,         // g/cc
    pub dry_density: f64,         // g/cc
    pub field_compaction: f64,    // %
    pub is_passed: bool,
}

impl CalculationResult {
    pub fn verdict(&self) -> Verdict {
        if self.is_passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    /// No usable soil volume yet, so densities are placeholders
    pub fn is_incomplete(&self) -> bool {
        self.v_soil <= 0.0
    }

    /// False when a moisture content of -100% drove the dry density
    /// division to infinity or NaN
    pub fn is_finite(&self) -> bool {
        self.dry_density.is_finite() && self.field_compaction.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(is_passed: bool) -> CalculationResult {
        CalculationResult {
            weight_sand_in_hole: 0.0,
            v_total: 0.0,
            v_stone: 0.0,
            weight_wet_soil: 0.0,
            v_soil: 0.0,
            wet_density: 0.0,
            dry_density: 0.0,
            field_compaction: 0.0,
            is_passed,
        }
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(result(true).verdict().label(), "PASS");
        assert_eq!(result(false).verdict().to_string(), "FAIL");
    }

    #[test]
    fn test_incomplete_when_no_soil_volume() {
        assert!(result(false).is_incomplete());
        let mut r = result(false);
        r.v_soil = 10.0;
        assert!(!r.is_incomplete());
    }

    #[test]
    fn test_is_finite() {
        let mut r = result(false);
        assert!(r.is_finite());
        r.dry_density = f64::INFINITY;
        assert!(!r.is_finite());
        r.dry_density = f64::NAN;
        assert!(!r.is_finite());
    }

    #[test]
    fn test_verdict_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Verdict::Pass).unwrap(), "\"PASS\"");
    }
}

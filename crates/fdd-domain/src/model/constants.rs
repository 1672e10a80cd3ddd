use serde::{Deserialize, Serialize};

/// Standard acceptance threshold (%)
pub const STANDARD_THRESHOLD_PERCENT: f64 = 95.0;

/// Stricter acceptance threshold used for critical layers (%)
pub const STRICT_THRESHOLD_PERCENT: f64 = 98.0;

/// Reference values shared by every test point in a session.
///
/// Passed explicitly into each calculation; the calculator never reads
/// constants from anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConstants {
    pub bulk_density_sand: f64,          // γs (g/cc)
    pub weight_sand_in_cone: f64,        // Wc (g)
    pub specific_gravity_particles: f64, // Gs
    pub max_dry_density: f64,            // MDD (g/cc)
    pub compaction_threshold: f64,       // (%)
}

impl Default for GlobalConstants {
    fn default() -> Self {
        Self {
            bulk_density_sand: 1.420,
            weight_sand_in_cone: 1028.0,
            specific_gravity_particles: 2.580,
            max_dry_density: 2.301,
            compaction_threshold: STANDARD_THRESHOLD_PERCENT,
        }
    }
}

impl GlobalConstants {
    /// Copy with a different acceptance threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.compaction_threshold = threshold;
        self
    }
}

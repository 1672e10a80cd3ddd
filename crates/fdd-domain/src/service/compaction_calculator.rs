//! Sand replacement calculation with oversize stone correction
//!
//! Total over its inputs: zero or negative denominators fall back to 0
//! instead of producing an error, so a freshly added all-zero point still
//! evaluates.

use crate::model::{CalculationResult, GlobalConstants, TestPoint};

/// Derive densities and the compaction verdict for one test point.
///
/// The moisture correction is not guarded: a moisture content of -100%
/// divides by zero and yields an infinite or NaN dry density. Use
/// [`CalculationResult::is_finite`] to detect it.
pub fn calculate(test: &TestPoint, constants: &GlobalConstants) -> CalculationResult {
    let weight_sand_in_hole = ((test.w1 - test.w2) - constants.weight_sand_in_cone).max(0.0);

    let v_total = if constants.bulk_density_sand > 0.0 {
        weight_sand_in_hole / constants.bulk_density_sand
    } else {
        0.0
    };

    let v_stone = if constants.specific_gravity_particles > 0.0 {
        test.w4 / constants.specific_gravity_particles
    } else {
        0.0
    };

    // Negative when w4 > w3; surfaced as-is.
    let weight_wet_soil = test.w3 - test.w4;
    let v_soil = v_total - v_stone;

    let wet_density = if v_soil > 0.0 {
        weight_wet_soil / v_soil
    } else {
        0.0
    };

    let dry_density = wet_density / (1.0 + test.moisture_content / 100.0);

    let field_compaction = if constants.max_dry_density > 0.0 {
        (dry_density / constants.max_dry_density) * 100.0
    } else {
        0.0
    };

    CalculationResult {
        weight_sand_in_hole,
        v_total,
        v_stone,
        weight_wet_soil,
        v_soil,
        wet_density,
        dry_density,
        field_compaction,
        is_passed: field_compaction >= constants.compaction_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(w1: f64, w2: f64, w3: f64, w4: f64, moisture: f64) -> TestPoint {
        TestPoint::blank(0).with_readings(w1, w2, w3, w4, moisture)
    }

    #[test]
    fn test_scenario_a_fails() {
        let r = calculate(&point(3500.0, 1000.0, 2200.0, 300.0, 8.0), &GlobalConstants::default());
        assert_eq!(r.weight_sand_in_hole, 1472.0);
        assert!((r.v_total - 1036.619718309859).abs() < 1e-6);
        assert!((r.v_stone - 116.279069767441).abs() < 1e-6);
        assert_eq!(r.weight_wet_soil, 1900.0);
        assert!((r.v_soil - 920.340648542417).abs() < 1e-6);
        assert!((r.wet_density - 2.064452985977).abs() < 1e-9);
        assert!((r.dry_density - 1.911530542572).abs() < 1e-9);
        assert!((r.field_compaction - 83.073904501169).abs() < 1e-6);
        assert!(!r.is_passed);
    }

    #[test]
    fn test_scenario_b_literal_value() {
        // 2472 g of sand in the hole against 2800 g of wet soil: well short of 95%.
        let r = calculate(&point(4500.0, 1000.0, 3000.0, 200.0, 5.0), &GlobalConstants::default());
        assert_eq!(r.weight_sand_in_hole, 2472.0);
        assert!((r.v_total - 1740.845070422535).abs() < 1e-6);
        assert!((r.v_stone - 77.519379844961).abs() < 1e-6);
        assert_eq!(r.weight_wet_soil, 2800.0);
        assert!((r.v_soil - 1663.325690577574).abs() < 1e-6);
        assert!((r.dry_density - 1.603213779341).abs() < 1e-9);
        assert!((r.field_compaction - 69.674653600239).abs() < 1e-6);
        assert!(!r.is_passed);
    }

    #[test]
    fn test_dense_point_passes() {
        let r = calculate(&point(3500.0, 1000.0, 2500.0, 300.0, 5.0), &GlobalConstants::default());
        assert!((r.dry_density - 2.276589758973).abs() < 1e-9);
        assert!((r.field_compaction - 98.939146413422).abs() < 1e-6);
        assert!(r.is_passed);
        // Same point under the stricter requirement.
        let strict = GlobalConstants::default().with_threshold(99.0);
        assert!(!calculate(&point(3500.0, 1000.0, 2500.0, 300.0, 5.0), &strict).is_passed);
    }

    #[test]
    fn test_all_zero_point() {
        let r = calculate(&TestPoint::blank(0), &GlobalConstants::default());
        assert_eq!(r.weight_sand_in_hole, 0.0);
        assert_eq!(r.v_total, 0.0);
        assert_eq!(r.v_stone, 0.0);
        assert_eq!(r.weight_wet_soil, 0.0);
        assert_eq!(r.v_soil, 0.0);
        assert_eq!(r.wet_density, 0.0);
        assert_eq!(r.dry_density, 0.0);
        assert_eq!(r.field_compaction, 0.0);
        assert!(!r.is_passed);
        assert!(r.is_incomplete());
    }

    #[test]
    fn test_sand_in_hole_clamped_when_below_cone_weight() {
        let constants = GlobalConstants::default();
        for (w1, w2) in [(2000.0, 1000.0), (2028.0, 1000.0), (1000.0, 3000.0)] {
            let r = calculate(&point(w1, w2, 500.0, 0.0, 10.0), &constants);
            assert_eq!(r.weight_sand_in_hole, 0.0);
            assert_eq!(r.v_total, 0.0);
            assert_eq!(r.wet_density, 0.0);
        }
    }

    #[test]
    fn test_non_positive_sand_density_gives_zero_volume() {
        for gamma in [0.0, -1.42] {
            let constants = GlobalConstants {
                bulk_density_sand: gamma,
                ..GlobalConstants::default()
            };
            let r = calculate(&point(3500.0, 1000.0, 2200.0, 300.0, 8.0), &constants);
            assert_eq!(r.v_total, 0.0);
            // Stone volume alone leaves a negative soil volume.
            assert!(r.v_soil < 0.0);
            assert_eq!(r.wet_density, 0.0);
            assert_eq!(r.field_compaction, 0.0);
        }
    }

    #[test]
    fn test_non_positive_specific_gravity_ignores_stone_volume() {
        let constants = GlobalConstants {
            specific_gravity_particles: 0.0,
            ..GlobalConstants::default()
        };
        let r = calculate(&point(3500.0, 1000.0, 2200.0, 300.0, 8.0), &constants);
        assert_eq!(r.v_stone, 0.0);
        assert_eq!(r.v_soil, r.v_total);
        assert!((r.field_compaction - 73.755389556175).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_mdd_gives_zero_compaction() {
        let constants = GlobalConstants {
            max_dry_density: 0.0,
            ..GlobalConstants::default()
        };
        let r = calculate(&point(3500.0, 1000.0, 2200.0, 300.0, 8.0), &constants);
        assert!(r.dry_density > 0.0);
        assert_eq!(r.field_compaction, 0.0);
        assert!(!r.is_passed);
    }

    #[test]
    fn test_threshold_boundary_passes() {
        let test = point(3500.0, 1000.0, 2200.0, 300.0, 8.0);
        let exact = calculate(&test, &GlobalConstants::default()).field_compaction;

        let at = GlobalConstants::default().with_threshold(exact);
        assert!(calculate(&test, &at).is_passed);

        let above = GlobalConstants::default().with_threshold(exact + 1e-9);
        assert!(!calculate(&test, &above).is_passed);
    }

    #[test]
    fn test_stone_heavier_than_soil_passes_through_negative() {
        let r = calculate(&point(3500.0, 1000.0, 200.0, 300.0, 8.0), &GlobalConstants::default());
        assert_eq!(r.weight_wet_soil, -100.0);
        assert!(r.v_soil > 0.0);
        assert!((r.wet_density + 0.108655420315).abs() < 1e-9);
        assert!((r.dry_density + 0.100606870662).abs() < 1e-9);
        assert!(r.field_compaction < 0.0);
        assert!(!r.is_passed);
    }

    #[test]
    fn test_zero_moisture_keeps_wet_density() {
        let r = calculate(&point(3500.0, 1000.0, 2200.0, 300.0, 0.0), &GlobalConstants::default());
        assert_eq!(r.dry_density, r.wet_density);
        assert!((r.field_compaction - 89.719816861262).abs() < 1e-6);
    }

    #[test]
    fn test_moisture_minus_hundred_is_not_finite() {
        let r = calculate(&point(3500.0, 1000.0, 2200.0, 300.0, -100.0), &GlobalConstants::default());
        assert!(r.dry_density.is_infinite());
        assert!(!r.is_finite());

        let blank = point(0.0, 0.0, 0.0, 0.0, -100.0);
        let r = calculate(&blank, &GlobalConstants::default());
        assert!(r.dry_density.is_nan());
        assert!(!r.is_passed);
    }

    #[test]
    fn test_idempotent() {
        let test = point(3500.0, 1000.0, 2200.0, 300.0, 8.0);
        let constants = GlobalConstants::default();
        let a = calculate(&test, &constants);
        let b = calculate(&test, &constants);
        assert_eq!(a.field_compaction.to_bits(), b.field_compaction.to_bits());
        assert_eq!(a.dry_density.to_bits(), b.dry_density.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_inputs_untouched() {
        let test = point(3500.0, 1000.0, 2200.0, 300.0, 8.0);
        let constants = GlobalConstants::default();
        let before = (test.clone(), constants);
        let _ = calculate(&test, &constants);
        assert_eq!(before.0, test);
        assert_eq!(before.1, constants);
    }
}

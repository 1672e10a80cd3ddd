//! Plain-text compaction report

use crate::model::{EvaluatedPoint, GlobalConstants};

pub const FORMULA_FOOTER: &str =
    "Vtotal = (W1-W2-Wc)/γs | Vsoil = Vtotal - (W4/Gs) | Wetρ = (W3-W4)/Vsoil";

pub fn generate_compaction_report(constants: &GlobalConstants, points: &[EvaluatedPoint]) -> String {
    let mut report = String::new();
    report.push_str("==================================================================\n");
    report.push_str("                  Field Dry Density Report                        \n");
    report.push_str("       Sand Replacement Method (with Stone Correction)            \n");
    report.push_str("==================================================================\n\n");

    report.push_str("[Reference Parameters]\n");
    report.push_str(&format!(
        "  Bulk density of sand (γs):   {:.3} g/cc\n",
        constants.bulk_density_sand
    ));
    report.push_str(&format!(
        "  Sand in cone (Wc):           {} g\n",
        constants.weight_sand_in_cone
    ));
    report.push_str(&format!(
        "  Specific gravity (Gs):       {:.3}\n",
        constants.specific_gravity_particles
    ));
    report.push_str(&format!(
        "  Max dry density (MDD):       {:.3} g/cc\n",
        constants.max_dry_density
    ));
    report.push_str(&format!(
        "  Compaction threshold:        {}%\n\n",
        constants.compaction_threshold
    ));

    report.push_str("[Test Points]\n");
    report.push_str("-".repeat(66).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<16} {:>10} {:>10} {:>10} {:>9} {:>7}\n",
        "Test No", "Dry ρ", "Soil Vol", "Stone Vol", "Compact", "Result"
    ));
    report.push_str(&format!(
        "{:<16} {:>10} {:>10} {:>10} {:>9} {:>7}\n",
        "", "(g/cc)", "(cc)", "(cc)", "(%)", ""
    ));
    report.push_str("-".repeat(66).as_str());
    report.push('\n');

    let mut any_incomplete = false;
    for evaluated in points {
        let r = &evaluated.result;
        let marker = if r.is_incomplete() {
            any_incomplete = true;
            "*"
        } else {
            ""
        };
        report.push_str(&format!(
            "{:<16} {:>10.3} {:>10.1} {:>10.1} {:>9.1} {:>6}{:<1}\n",
            truncate_str(&evaluated.point.test_no, 15),
            r.dry_density,
            r.v_soil,
            r.v_stone,
            r.field_compaction,
            r.verdict().label(),
            marker
        ));
    }
    report.push('\n');

    if any_incomplete {
        report.push_str("  * soil volume is zero or negative; check w1/w2/w4 readings\n\n");
    }

    report.push_str(FORMULA_FOOTER);
    report.push('\n');
    report.push_str("==================================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

use anyhow::Result;

const FORMULAS: &[(&str, &str)] = &[
    (
        "Adjusted number of cameras",
        "num_cameras / overlap_factor",
    ),
    (
        "Camera false positive rate",
        "max_fp_rate / 100",
    ),
    (
        "Camera false negative rate",
        "1 - (1 - max_fn_rate / 100) ^ (1 / adjusted_cameras)",
    ),
    (
        "Required camera precision (%)",
        "100 - camera_fp_rate * 100",
    ),
    (
        "Required camera recall (%)",
        "100 - camera_fn_rate * 100",
    ),
    (
        "Effective recall with overlap (%)",
        "(1 - (1 - current_recall / 100) ^ overlap_factor) * 100",
    ),
    (
        "Expected defects (per day)",
        "current_defect_rate / 100 * production_rate * hours_per_day",
    ),
    (
        "False positives (per day)",
        "max_fp_rate / 100 * production_rate * hours_per_day",
    ),
    (
        "False negatives (per day)",
        "max_fn_rate / 100 * expected_defects",
    ),
    (
        "Cost of false positives",
        "false_positives * cost_impact_fp",
    ),
    (
        "Cost of false negatives",
        "false_negatives * cost_impact_fn",
    ),
    (
        "Total cost with system",
        "cost_of_false_negatives - cost_of_false_positives",
    ),
    (
        "Cost without system",
        "expected_defects * (1 - current_inspection_rate / 100) * cost_impact_fn",
    ),
    (
        "Daily savings",
        "cost_without_system - total_cost_with_system",
    ),
    (
        "Cumulative cost (month m)",
        "system_cost + recurring_cost / months_per_year * m",
    ),
    (
        "Cumulative savings (month m)",
        "daily_savings * days_per_month * m",
    ),
    (
        "ROI (month m)",
        "cumulative_savings(m) - cumulative_cost(m)",
    ),
];

/// Plain-text listing of every formula, numbered in evaluation order.
pub fn formula_reference() -> String {
    let width = FORMULAS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Calculations\n\n");
    for (i, (name, formula)) in FORMULAS.iter().enumerate() {
        text.push_str(&format!("{:>2}. {name:<width$} = {formula}\n", i + 1));
    }
    text.push_str(
        "\nPercentages are on a 0-100 scale. days_per_month defaults to 30 and \
         months_per_year to 12.\n",
    );
    text
}

pub fn print_formulas() -> Result<()> {
    print!("{}", formula_reference());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lists_all_formulas_in_order() {
        let text = formula_reference();
        assert_eq!(FORMULAS.len(), 17);
        assert!(text.contains(" 1. Adjusted number of cameras"));
        assert!(text.contains("17. ROI (month m)"));
        let first = text.find("Adjusted number of cameras").unwrap();
        let last = text.find("ROI (month m)").unwrap();
        assert!(first < last);
    }
}

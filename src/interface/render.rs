use crate::models::{GoalValue, Nutrient, NutrientVector, Sex};
use crate::reference::ReferenceTable;

/// Ordered `(label, text)` pairs ready for display.
pub type DisplayTable = Vec<(&'static str, String)>;

/// Whole units, truncated toward zero.
fn whole(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

fn format_goal_value(value: GoalValue) -> String {
    match value {
        GoalValue::Range(range) => format!("{}-{}", whole(range.low), whole(range.high)),
        GoalValue::Cap(cap) => format!("<{}", whole(cap)),
        GoalValue::Amount(amount) => whole(amount),
    }
}

/// Project a nutrient vector into display labels and strings.
///
/// Goals show macro ranges and caps; totals are plain integers throughout.
pub fn format_vector(vector: &NutrientVector) -> DisplayTable {
    Nutrient::ALL
        .iter()
        .map(|&n| {
            let text = match vector {
                NutrientVector::Goal(goal) => format_goal_value(goal.value(n)),
                NutrientVector::Totals(totals) => whole(totals.get(n)),
            };
            (n.label(), text)
        })
        .collect()
}

/// Display a formatted nutrient table.
pub fn display_table(title: &str, table: &DisplayTable) {
    if table.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ===", title);
    println!();

    let max_label_len = table.iter().map(|(l, _)| l.len()).max().unwrap_or(10);

    for (label, text) in table {
        println!("  {:<width$}  {:>10}", label, text, width = max_label_len);
    }

    println!();
}

/// Footnote explaining goal notation. Totals need none.
pub fn vector_legend(vector: &NutrientVector) -> Option<&'static str> {
    vector
        .is_goal()
        .then_some("low-high is an acceptable range; <N is an upper limit.")
}

/// Format and display a nutrient vector with its legend.
pub fn display_vector(title: &str, vector: &NutrientVector) {
    display_table(title, &format_vector(vector));
    if let Some(legend) = vector_legend(vector) {
        println!("  {}", legend);
        println!();
    }
}

/// Display the reference brackets for one sex.
pub fn display_brackets(table: &ReferenceTable, sex: Sex) {
    let rows = table.brackets(sex);
    if rows.is_empty() {
        println!("No reference brackets for sex {}.", sex);
        return;
    }

    println!();
    println!("=== Reference brackets ({}) ===", sex);
    println!();
    println!("  {:>8}  {:>9}  {:>9}  {:>9}", "ages", "protein%", "carbs%", "fat%");

    for row in rows {
        println!(
            "  {:>8}  {:>9}  {:>9}  {:>9}",
            format!(">{}", row.age_threshold),
            row.protein_pct.to_string(),
            row.carbs_pct.to_string(),
            row.fat_pct.to_string()
        );
    }

    println!();
}

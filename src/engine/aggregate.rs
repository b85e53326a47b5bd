use tracing::debug;

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, MealPlan, NutrientTotals};

/// Serving-weighted average daily nutrition over `length_days`.
///
/// Every nutrient is weighted and divided the same way. An empty item list
/// yields a zero vector.
pub fn daily_average(items: &[FoodItem], length_days: i64) -> Result<NutrientTotals> {
    if length_days <= 0 {
        return Err(NutriError::InvalidPlanLength(length_days));
    }
    let days = length_days as f64;

    Ok(NutrientTotals::from_fn(|nutrient| {
        let total: f64 = items
            .iter()
            .map(|item| item.nutrition.get(nutrient) * item.servings)
            .sum();
        total / days
    }))
}

impl MealPlan {
    /// Recompute and store the plan's daily average.
    ///
    /// On error the previously stored totals are left untouched.
    pub fn refresh_totals(&mut self) -> Result<&NutrientTotals> {
        let totals = daily_average(&self.items, self.length_days)?;
        debug!(
            plan = %self.name,
            items = self.items.len(),
            days = self.length_days,
            "Recomputed daily average"
        );
        Ok(self.totals.insert(totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrient;
    use assert_float_eq::assert_float_absolute_eq;

    fn item(name: &str, servings: f64, calories: f64, protein: f64) -> FoodItem {
        FoodItem::new(
            name,
            servings,
            NutrientTotals::zero()
                .with(Nutrient::Calories, calories)
                .with(Nutrient::Protein, protein),
        )
    }

    #[test]
    fn test_two_item_average() {
        let items = vec![item("A", 1.0, 500.0, 20.0), item("B", 2.0, 300.0, 10.0)];
        let avg = daily_average(&items, 2).unwrap();
        assert_float_absolute_eq!(avg.get(Nutrient::Calories), 550.0, 1e-9);
        assert_float_absolute_eq!(avg.get(Nutrient::Protein), 20.0, 1e-9);
        assert_eq!(avg.get(Nutrient::Fiber), 0.0);
    }

    #[test]
    fn test_empty_plan_is_zero() {
        let avg = daily_average(&[], 7).unwrap();
        assert!(avg.is_zero());
    }

    #[test]
    fn test_non_positive_length_rejected() {
        let items = vec![item("A", 1.0, 500.0, 20.0)];
        for length in [0, -3] {
            match daily_average(&items, length) {
                Err(NutriError::InvalidPlanLength(l)) => assert_eq!(l, length),
                other => panic!("expected InvalidPlanLength, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_refresh_keeps_totals_on_invalid_length() {
        let mut plan = MealPlan::new("week", 2).with_items(vec![item("A", 1.0, 500.0, 20.0)]);
        plan.refresh_totals().unwrap();
        let before = plan.totals.clone();

        plan.length_days = 0;
        assert!(plan.refresh_totals().is_err());
        assert_eq!(plan.totals, before);
    }

    #[test]
    fn test_refresh_replaces_totals() {
        let mut plan = MealPlan::new("day", 1).with_items(vec![item("A", 1.0, 500.0, 20.0)]);
        plan.refresh_totals().unwrap();

        plan.items.push(item("B", 1.0, 250.0, 5.0));
        let totals = plan.refresh_totals().unwrap();
        assert_float_absolute_eq!(totals.get(Nutrient::Calories), 750.0, 1e-9);
    }
}

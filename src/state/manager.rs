use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::warn;

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, MealPlan, NutrientTotals};

/// Minimum similarity for a plan-name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Holds meal plans and keeps each plan's daily average in step with its
/// items and length.
pub struct PlanBook {
    /// All plans keyed by lowercase name.
    plans: HashMap<String, MealPlan>,
}

impl PlanBook {
    /// Create a plan book, computing totals for every plan.
    ///
    /// Plans with an invalid length are kept with their stored totals and
    /// reported via the log.
    pub fn new(plans: Vec<MealPlan>) -> Self {
        let mut map = HashMap::new();
        for mut plan in plans {
            if let Err(e) = plan.refresh_totals() {
                warn!(plan = %plan.name, error = %e, "Could not compute plan totals");
            }
            map.insert(plan.key(), plan);
        }
        Self { plans: map }
    }

    /// Get a plan by name (case-insensitive).
    pub fn get_plan(&self, name: &str) -> Option<&MealPlan> {
        self.plans.get(&name.to_lowercase())
    }

    /// Like `get_plan`, but a miss reports the closest known name.
    pub fn find_plan(&self, name: &str) -> Result<&MealPlan> {
        self.get_plan(name).ok_or_else(|| NutriError::PlanNotFound {
            name: name.to_string(),
            suggestion: self.suggest_name(name),
        })
    }

    /// Closest plan name by Jaro-Winkler similarity.
    pub fn suggest_name(&self, name: &str) -> Option<String> {
        let needle = name.to_lowercase();
        self.plans
            .values()
            .map(|p| (p, jaro_winkler(&p.key(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(p, _)| p.name.clone())
    }

    /// Add or replace a plan, computing its totals.
    ///
    /// If the new plan's totals cannot be computed, a replaced plan's
    /// totals carry over unchanged.
    pub fn insert(&mut self, mut plan: MealPlan) -> Result<&NutrientTotals> {
        let outcome = plan.refresh_totals().map(|_| ());
        let key = plan.key();
        if outcome.is_err() {
            if let Some(previous) = self.plans.get_mut(&key) {
                plan.totals = previous.totals.take();
            }
        }
        self.plans.insert(key.clone(), plan);
        outcome?;
        self.totals_of(&key)
    }

    /// Replace every item in a plan and recompute.
    pub fn replace_items(&mut self, name: &str, items: Vec<FoodItem>) -> Result<&NutrientTotals> {
        self.edit(name, |plan| plan.items = items)
    }

    /// Append one item to a plan and recompute.
    pub fn push_item(&mut self, name: &str, item: FoodItem) -> Result<&NutrientTotals> {
        self.edit(name, |plan| plan.items.push(item))
    }

    /// Change a plan's length and recompute.
    pub fn set_length(&mut self, name: &str, length_days: i64) -> Result<&NutrientTotals> {
        self.edit(name, |plan| plan.length_days = length_days)
    }

    /// Remove a plan and return it.
    pub fn remove(&mut self, name: &str) -> Result<MealPlan> {
        self.find_plan(name)?;
        self.plans
            .remove(&name.to_lowercase())
            .ok_or_else(|| NutriError::PlanNotFound {
                name: name.to_string(),
                suggestion: None,
            })
    }

    /// Apply an edit, then recompute. The edit sticks even if recompute fails.
    fn edit<F>(&mut self, name: &str, f: F) -> Result<&NutrientTotals>
    where
        F: FnOnce(&mut MealPlan),
    {
        self.find_plan(name)?;
        let key = name.to_lowercase();
        if let Some(plan) = self.plans.get_mut(&key) {
            f(plan);
            plan.refresh_totals()?;
        }
        self.totals_of(&key)
    }

    fn totals_of(&self, key: &str) -> Result<&NutrientTotals> {
        self.plans
            .get(key)
            .and_then(|p| p.totals.as_ref())
            .ok_or_else(|| NutriError::PlanNotFound {
                name: key.to_string(),
                suggestion: None,
            })
    }

    /// All plans, sorted by name.
    pub fn all_plans(&self) -> Vec<&MealPlan> {
        let mut plans: Vec<&MealPlan> = self.plans.values().collect();
        plans.sort_by_key(|p| p.key());
        plans
    }

    /// Convert state to a list of plans for JSON serialization.
    pub fn to_plans(&self) -> Vec<MealPlan> {
        self.all_plans().into_iter().cloned().collect()
    }

    /// Count of plans in the book.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if the book has no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrient;

    fn item(name: &str, servings: f64, calories: f64) -> FoodItem {
        FoodItem::new(
            name,
            servings,
            NutrientTotals::zero().with(Nutrient::Calories, calories),
        )
    }

    fn sample_plans() -> Vec<MealPlan> {
        vec![
            MealPlan::new("Cutting Week", 7).with_items(vec![item("Oats", 7.0, 350.0)]),
            MealPlan::new("Bulk Day", 1).with_items(vec![
                item("Rice", 3.0, 200.0),
                item("Chicken", 2.0, 250.0),
            ]),
        ]
    }

    #[test]
    fn test_new_computes_totals() {
        let book = PlanBook::new(sample_plans());
        let bulk = book.get_plan("bulk day").unwrap();
        assert_eq!(bulk.totals.as_ref().unwrap().get(Nutrient::Calories), 1100.0);
        let cut = book.get_plan("CUTTING WEEK").unwrap();
        assert_eq!(cut.totals.as_ref().unwrap().get(Nutrient::Calories), 350.0);
    }

    #[test]
    fn test_push_item_recomputes() {
        let mut book = PlanBook::new(sample_plans());
        let totals = book.push_item("Bulk Day", item("Shake", 1.0, 400.0)).unwrap();
        assert_eq!(totals.get(Nutrient::Calories), 1500.0);
    }

    #[test]
    fn test_set_length_recomputes() {
        let mut book = PlanBook::new(sample_plans());
        let totals = book.set_length("bulk day", 2).unwrap();
        assert_eq!(totals.get(Nutrient::Calories), 550.0);
    }

    #[test]
    fn test_invalid_length_leaves_totals() {
        let mut book = PlanBook::new(sample_plans());
        let err = book.set_length("bulk day", 0).unwrap_err();
        assert!(matches!(err, NutriError::InvalidPlanLength(0)));

        let plan = book.get_plan("bulk day").unwrap();
        assert_eq!(plan.length_days, 0);
        assert_eq!(plan.totals.as_ref().unwrap().get(Nutrient::Calories), 1100.0);
    }

    #[test]
    fn test_replace_items_with_empty_is_zero() {
        let mut book = PlanBook::new(sample_plans());
        let totals = book.replace_items("cutting week", Vec::new()).unwrap();
        assert!(totals.is_zero());
    }

    #[test]
    fn test_missing_plan_suggests_name() {
        let book = PlanBook::new(sample_plans());
        match book.find_plan("Bulk Dya") {
            Err(NutriError::PlanNotFound { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Bulk Day"));
            }
            other => panic!("expected PlanNotFound, got {:?}", other),
        }
        assert_eq!(book.suggest_name("zzzzzz"), None);
    }

    #[test]
    fn test_insert_invalid_plan_is_stored() {
        let mut book = PlanBook::new(Vec::new());
        assert!(book.insert(MealPlan::new("Empty", 0)).is_err());
        assert_eq!(book.len(), 1);
        assert!(book.get_plan("empty").unwrap().totals.is_none());
    }

    #[test]
    fn test_insert_invalid_replacement_keeps_totals() {
        let mut book = PlanBook::new(Vec::new());
        let week = MealPlan::new("Week", 2).with_items(vec![item("Pasta", 2.0, 300.0)]);
        assert_eq!(book.insert(week).unwrap().get(Nutrient::Calories), 300.0);

        let err = book.insert(MealPlan::new("week", 0)).unwrap_err();
        assert!(matches!(err, NutriError::InvalidPlanLength(0)));

        let plan = book.get_plan("Week").unwrap();
        assert_eq!(plan.length_days, 0);
        assert!(plan.items.is_empty());
        assert_eq!(plan.totals.as_ref().unwrap().get(Nutrient::Calories), 300.0);
    }

    #[test]
    fn test_remove_plan() {
        let mut book = PlanBook::new(sample_plans());
        let removed = book.remove("BULK DAY").unwrap();
        assert_eq!(removed.name, "Bulk Day");
        assert_eq!(book.len(), 1);
        assert!(book.get_plan("bulk day").is_none());

        match book.remove("bulk day") {
            Err(NutriError::PlanNotFound { suggestion, .. }) => assert_eq!(suggestion, None),
            other => panic!("expected PlanNotFound, got {:?}", other),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::NutrientTotals;

/// A food eaten as part of a meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    /// Number of servings eaten over the whole plan.
    #[serde(default = "default_servings")]
    pub servings: f64,

    /// Nutrition for a single serving.
    #[serde(default)]
    pub nutrition: NutrientTotals,
}

fn default_servings() -> f64 {
    1.0
}

impl FoodItem {
    pub fn new(name: impl Into<String>, servings: f64, nutrition: NutrientTotals) -> Self {
        Self {
            name: name.into(),
            servings,
            nutrition,
        }
    }
}

/// A named collection of food items spread over a number of days.
///
/// `totals` is the derived average daily nutrition. It is only ever replaced
/// wholesale by a successful recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub name: String,

    pub length_days: i64,

    #[serde(default)]
    pub items: Vec<FoodItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<NutrientTotals>,
}

impl MealPlan {
    pub fn new(name: impl Into<String>, length_days: i64) -> Self {
        Self {
            name: name.into(),
            length_days,
            items: Vec::new(),
            totals: None,
        }
    }

    pub fn with_items(mut self, items: Vec<FoodItem>) -> Self {
        self.items = items;
        self
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod reference;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{FoodItem, GoalVector, MealPlan, NutrientTotals, NutrientVector};
pub use reference::ReferenceTable;

mod nutrient;
mod plan;
mod profile;
mod vector;

pub use nutrient::Nutrient;
pub use plan::{FoodItem, MealPlan};
pub use profile::{ActivityLevel, Member, PhysiologicalProfile, ProfileDraft, Sex};
pub use vector::{GoalValue, GoalVector, MacroRange, Micronutrients, NutrientTotals, NutrientVector};

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::NutriError;
use crate::models::Nutrient;

/// Single value per nutrient. Used for food items (per serving) and plan averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct NutrientTotals {
    values: [f64; Nutrient::COUNT],
}

impl NutrientTotals {
    pub fn zero() -> Self {
        Self {
            values: [0.0; Nutrient::COUNT],
        }
    }

    /// Build a vector by evaluating `f` once per nutrient key.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Nutrient) -> f64,
    {
        let mut values = [0.0; Nutrient::COUNT];
        for n in Nutrient::ALL {
            values[n.index()] = f(n);
        }
        Self { values }
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.values[nutrient.index()]
    }

    /// Builder-style setter, used while a vector is being assembled.
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.values[nutrient.index()] = value;
        self
    }

    /// Iterate `(nutrient, amount)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.iter().map(move |&n| (n, self.values[n.index()]))
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}

impl Default for NutrientTotals {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<Nutrient> for NutrientTotals {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &f64 {
        &self.values[nutrient.index()]
    }
}

/// Missing keys default to zero; unknown keys are rejected.
impl TryFrom<BTreeMap<String, f64>> for NutrientTotals {
    type Error = NutriError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut totals = NutrientTotals::zero();
        for (key, value) in map {
            let nutrient: Nutrient = key.parse()?;
            totals.values[nutrient.index()] = value;
        }
        Ok(totals)
    }
}

impl From<NutrientTotals> for BTreeMap<String, f64> {
    fn from(totals: NutrientTotals) -> Self {
        totals
            .iter()
            .map(|(n, v)| (n.key().to_string(), v))
            .collect()
    }
}

/// Low/high gram targets for a macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    pub low: f64,
    pub high: f64,
}

/// The 19 age/sex-determined mineral and vitamin amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Micronutrients {
    values: [f64; Nutrient::COUNT - Nutrient::FIRST_MICRONUTRIENT],
}

impl Micronutrients {
    /// Build from a per-nutrient lookup. Only micronutrient keys are queried.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Nutrient) -> f64,
    {
        let mut values = [0.0; Nutrient::COUNT - Nutrient::FIRST_MICRONUTRIENT];
        for (slot, &n) in values.iter_mut().zip(Nutrient::micronutrients()) {
            *slot = f(n);
        }
        Self { values }
    }

    /// Fallible `from_fn`. Stops at the first error.
    pub fn try_from_fn<F, E>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(Nutrient) -> Result<f64, E>,
    {
        let mut values = [0.0; Nutrient::COUNT - Nutrient::FIRST_MICRONUTRIENT];
        for (slot, &n) in values.iter_mut().zip(Nutrient::micronutrients()) {
            *slot = f(n)?;
        }
        Ok(Self { values })
    }

    /// `None` for energy and macronutrient keys.
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        nutrient
            .is_micronutrient()
            .then(|| self.values[nutrient.index() - Nutrient::FIRST_MICRONUTRIENT])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::micronutrients()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// How a goal expresses a single nutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalValue {
    /// Acceptable low/high band (protein, carbs, fat).
    Range(MacroRange),
    /// Upper bound not to exceed (sugar, saturated fat).
    Cap(f64),
    /// Plain daily target.
    Amount(f64),
}

/// Personalized daily targets for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalVector {
    /// Total daily energy expenditure in kcal.
    pub calories: f64,
    pub protein: MacroRange,
    pub carbs: MacroRange,
    pub fat: MacroRange,
    pub fiber: f64,
    pub sugar: f64,
    pub saturated_fat: f64,
    pub micronutrients: Micronutrients,
}

impl GoalVector {
    pub fn value(&self, nutrient: Nutrient) -> GoalValue {
        match nutrient {
            Nutrient::Calories => GoalValue::Amount(self.calories),
            Nutrient::Protein => GoalValue::Range(self.protein),
            Nutrient::Carbs => GoalValue::Range(self.carbs),
            Nutrient::Fat => GoalValue::Range(self.fat),
            Nutrient::Fiber => GoalValue::Amount(self.fiber),
            Nutrient::Sugar => GoalValue::Cap(self.sugar),
            Nutrient::SaturatedFat => GoalValue::Cap(self.saturated_fat),
            micro => GoalValue::Amount(self.micronutrients.get(micro).unwrap_or_default()),
        }
    }
}

/// Output of either producer. Only the presentation layer cares which one.
#[derive(Debug, Clone, PartialEq)]
pub enum NutrientVector {
    Goal(GoalVector),
    Totals(NutrientTotals),
}

impl NutrientVector {
    pub fn is_goal(&self) -> bool {
        matches!(self, NutrientVector::Goal(_))
    }
}

impl From<GoalVector> for NutrientVector {
    fn from(goal: GoalVector) -> Self {
        NutrientVector::Goal(goal)
    }
}

impl From<NutrientTotals> for NutrientVector {
    fn from(totals: NutrientTotals) -> Self {
        NutrientVector::Totals(totals)
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::NutriError;

/// Every nutrient the engine tracks, in canonical display order.
///
/// The first seven are energy and macronutrients; the rest are the
/// micronutrients copied verbatim from the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fiber,
    Sugar,
    Fat,
    SaturatedFat,
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Potassium,
    Sodium,
    Zinc,
    VitaminA,
    VitaminE,
    VitaminD,
    VitaminC,
    Thiamin,
    Riboflavin,
    Niacin,
    VitaminB6,
    VitaminB12,
    Chlorine,
    VitaminK,
    Folate,
}

impl Nutrient {
    pub const COUNT: usize = 26;

    /// Index of the first micronutrient in `ALL`.
    pub const FIRST_MICRONUTRIENT: usize = 7;

    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::Fat,
        Nutrient::SaturatedFat,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Sodium,
        Nutrient::Zinc,
        Nutrient::VitaminA,
        Nutrient::VitaminE,
        Nutrient::VitaminD,
        Nutrient::VitaminC,
        Nutrient::Thiamin,
        Nutrient::Riboflavin,
        Nutrient::Niacin,
        Nutrient::VitaminB6,
        Nutrient::VitaminB12,
        Nutrient::Chlorine,
        Nutrient::VitaminK,
        Nutrient::Folate,
    ];

    /// Position in `ALL`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The 19 minerals and vitamins.
    pub fn micronutrients() -> &'static [Nutrient] {
        let all: &'static [Nutrient; Nutrient::COUNT] = &Self::ALL;
        &all[Self::FIRST_MICRONUTRIENT..]
    }

    #[inline]
    pub fn is_micronutrient(self) -> bool {
        self.index() >= Self::FIRST_MICRONUTRIENT
    }

    /// Storage key used in plan files and reference dataset headers.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::Fat => "fat",
            Nutrient::SaturatedFat => "sat_fat",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
            Nutrient::Sodium => "sodium",
            Nutrient::Zinc => "zinc",
            Nutrient::VitaminA => "vitA",
            Nutrient::VitaminE => "vitE",
            Nutrient::VitaminD => "vitD",
            Nutrient::VitaminC => "vitC",
            Nutrient::Thiamin => "thiamin",
            Nutrient::Riboflavin => "riboflavin",
            Nutrient::Niacin => "niacin",
            Nutrient::VitaminB6 => "vitB6",
            Nutrient::VitaminB12 => "vitB12",
            Nutrient::Chlorine => "chlorine",
            Nutrient::VitaminK => "vitK",
            Nutrient::Folate => "folate",
        }
    }

    /// Human-readable label with unit.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories (kcal)",
            Nutrient::Protein => "Protein (g)",
            Nutrient::Carbs => "Carbohydrates (g)",
            Nutrient::Fiber => "Fiber (g)",
            Nutrient::Sugar => "Added Sugars (g)",
            Nutrient::Fat => "Total Fat (g)",
            Nutrient::SaturatedFat => "Saturated Fat (g)",
            Nutrient::Calcium => "Calcium (mg)",
            Nutrient::Iron => "Iron (mg)",
            Nutrient::Magnesium => "Magnesium (mg)",
            Nutrient::Phosphorus => "Phosphorus (mg)",
            Nutrient::Potassium => "Potassium (mg)",
            Nutrient::Sodium => "Sodium (mg)",
            Nutrient::Zinc => "Zinc (mg)",
            Nutrient::VitaminA => "Vitamin A (mcg RAE)",
            Nutrient::VitaminE => "Vitamin E (mg AT)",
            Nutrient::VitaminD => "Vitamin D (IU)",
            Nutrient::VitaminC => "Vitamin C (mg)",
            Nutrient::Thiamin => "Thiamin (mg)",
            Nutrient::Riboflavin => "Riboflavin (mg)",
            Nutrient::Niacin => "Niacin (mg)",
            Nutrient::VitaminB6 => "Vitamin B6 (mg)",
            Nutrient::VitaminB12 => "Vitamin B12 (mcg)",
            Nutrient::Chlorine => "Chlorine (mg)",
            Nutrient::VitaminK => "Vitamin K (mcg)",
            Nutrient::Folate => "Folate (mcg DFE)",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Nutrient {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nutrient::ALL
            .iter()
            .copied()
            .find(|n| n.key() == s)
            .ok_or_else(|| NutriError::UnknownNutrient(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, n) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
        }
    }

    #[test]
    fn test_micronutrient_split() {
        assert_eq!(Nutrient::micronutrients().len(), 19);
        assert_eq!(Nutrient::micronutrients()[0], Nutrient::Calcium);
        assert!(!Nutrient::SaturatedFat.is_micronutrient());
        assert!(Nutrient::Folate.is_micronutrient());
    }

    #[test]
    fn test_key_parse() {
        assert_eq!("sat_fat".parse::<Nutrient>().unwrap(), Nutrient::SaturatedFat);
        assert_eq!("vitB12".parse::<Nutrient>().unwrap(), Nutrient::VitaminB12);
        assert!("vitamin_z".parse::<Nutrient>().is_err());
    }
}

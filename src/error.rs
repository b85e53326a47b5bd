use thiserror::Error;

use crate::models::Sex;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Profile incomplete: {0} is missing. Complete your nutrition profile first")]
    ProfileIncomplete(&'static str),

    #[error("No reference bracket for sex {sex} below age {age}")]
    NoMatchingBracket { sex: Sex, age: u32 },

    #[error("Invalid plan length: {0} (must be at least 1 day)")]
    InvalidPlanLength(i64),

    #[error("Reference dataset error: {0}")]
    DatasetLoad(String),

    #[error("Unknown nutrient: {0}")]
    UnknownNutrient(String),

    #[error("Meal plan not found: {name}{}", suggestion_hint(.suggestion))]
    PlanNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, NutriError>;

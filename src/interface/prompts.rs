use dialoguer::{Confirm, Input, Select};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, ProfileDraft, Sex};

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("Age (years)").interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid age".to_string()))
}

/// Prompt for a positive decimal measurement.
fn prompt_measurement(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if value <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }

    Ok(value)
}

pub fn prompt_height() -> Result<f64> {
    prompt_measurement("Height (m)")
}

pub fn prompt_weight() -> Result<f64> {
    prompt_measurement("Weight (kg)")
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.description()).collect();

    let selection = Select::new()
        .with_prompt("Exercise")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask only for the fields still missing from `draft`.
pub fn complete_profile(draft: &ProfileDraft) -> Result<ProfileDraft> {
    let mut filled = draft.clone();

    if filled.age.is_none() {
        filled.age = Some(prompt_age()?);
    }
    if filled.height_m.is_none() {
        filled.height_m = Some(prompt_height()?);
    }
    if filled.weight_kg.is_none() {
        filled.weight_kg = Some(prompt_weight()?);
    }
    if filled.sex.is_none() {
        filled.sex = Some(prompt_sex()?);
    }
    if filled.activity.is_none() {
        filled.activity = Some(prompt_activity()?);
    }

    Ok(filled)
}

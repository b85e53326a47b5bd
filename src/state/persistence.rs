use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{NutriError, Result};
use crate::models::{MealPlan, ProfileDraft};
use crate::state::PlanBook;

/// Load meal plans from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<MealPlan>> {
    let content = fs::read_to_string(path.as_ref())?;
    let plans: Vec<MealPlan> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, MealPlan> = HashMap::new();
    for plan in plans {
        seen.insert(plan.key(), plan);
    }

    debug!(path = %path.as_ref().display(), plans = seen.len(), "Loaded meal plans");
    Ok(seen.into_values().collect())
}

/// Save meal plans to a JSON file.
///
/// Deduplicates by lowercase name before saving.
pub fn save_plans<P: AsRef<Path>>(path: P, plans: &[MealPlan]) -> Result<()> {
    let mut seen: HashMap<String, &MealPlan> = HashMap::new();
    for plan in plans {
        seen.insert(plan.key(), plan);
    }

    let mut deduped: Vec<&MealPlan> = seen.into_values().collect();
    deduped.sort_by_key(|p| p.key());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Open the plan book stored at `path`, computing every plan's totals.
///
/// A missing file is an error unless `create` is set, which starts an
/// empty book.
pub fn open_plan_book<P: AsRef<Path>>(path: P, create: bool) -> Result<PlanBook> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(PlanBook::new(load_plans(path)?));
    }
    if !create {
        return Err(NutriError::InvalidInput(format!(
            "meal plan file not found: {}",
            path.display()
        )));
    }
    debug!(path = %path.display(), "Starting new meal plan file");
    Ok(PlanBook::new(Vec::new()))
}

/// Load a (possibly partial) profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileDraft> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a profile draft to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &ProfileDraft) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

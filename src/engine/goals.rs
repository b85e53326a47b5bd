use tracing::debug;

use crate::engine::constants::*;
use crate::error::Result;
use crate::models::{GoalVector, MacroRange, Member, PhysiologicalProfile, Sex};
use crate::reference::{PercentRange, ReferenceTable};

/// Mifflin-St Jeor resting energy estimate in kcal/day.
pub fn basal_energy(profile: &PhysiologicalProfile) -> f64 {
    let sex_offset = match profile.sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * profile.weight_kg + (BMR_HEIGHT_COEF * CM_PER_M) * profile.height_m
        - BMR_AGE_COEF * profile.age as f64
        + sex_offset
}

/// Total daily energy expenditure: basal estimate scaled by activity.
pub fn energy_expenditure(profile: &PhysiologicalProfile) -> f64 {
    basal_energy(profile) * profile.activity.factor()
}

/// Convert a percent-of-energy band into grams.
fn macro_range(pct: PercentRange, tdee: f64, kcal_per_g: f64) -> MacroRange {
    MacroRange {
        low: (pct.low as f64 * tdee) / (100.0 * kcal_per_g),
        high: (pct.high as f64 * tdee) / (100.0 * kcal_per_g),
    }
}

/// Derive personalized daily targets for `profile`.
///
/// Either the complete vector is returned or an error; nothing partial.
pub fn compute_goals(profile: &PhysiologicalProfile, table: &ReferenceTable) -> Result<GoalVector> {
    let tdee = energy_expenditure(profile);
    let row = table.lookup(profile.sex, profile.age)?;

    debug!(
        sex = %profile.sex,
        age = profile.age,
        bracket = row.age_threshold,
        tdee,
        "Computing nutrition goals"
    );

    Ok(GoalVector {
        calories: tdee,
        protein: macro_range(row.protein_pct, tdee, KCAL_PER_G_PROTEIN),
        carbs: macro_range(row.carbs_pct, tdee, KCAL_PER_G_CARBS),
        fat: macro_range(row.fat_pct, tdee, KCAL_PER_G_FAT),
        // Caps and fiber are whole grams.
        fiber: (FIBER_G_PER_KCAL * tdee).trunc(),
        sugar: ((SUGAR_ENERGY_SHARE * tdee) / KCAL_PER_G_CARBS).trunc(),
        saturated_fat: ((SAT_FAT_ENERGY_SHARE * tdee) / KCAL_PER_G_FAT).trunc(),
        micronutrients: row.micronutrients.clone(),
    })
}

impl Member {
    /// Recompute and store this member's goals.
    ///
    /// The stored vector is replaced only on success.
    pub fn refresh_goals(&mut self, table: &ReferenceTable) -> Result<&GoalVector> {
        let profile = self.profile.complete()?;
        let goals = compute_goals(&profile, table)?;
        debug!(username = %self.username, calories = goals.calories, "Updated goals");
        Ok(self.goals.insert(goals))
    }
}

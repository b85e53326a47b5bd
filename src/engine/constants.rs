// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor basal estimate
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const BMR_WEIGHT_COEF: f64 = 10.0;

/// kcal per centimeter of height.
pub const BMR_HEIGHT_COEF: f64 = 6.25;

/// kcal subtracted per year of age.
pub const BMR_AGE_COEF: f64 = 5.0;

/// Sex-specific constant offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Profiles store height in meters; the formula wants centimeters.
pub const CM_PER_M: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Atwater energy factors
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy-derived caps and targets
// ─────────────────────────────────────────────────────────────────────────────

/// Added sugar cap as a share of daily energy.
pub const SUGAR_ENERGY_SHARE: f64 = 0.10;

/// Saturated fat cap as a share of daily energy.
pub const SAT_FAT_ENERGY_SHARE: f64 = 0.10;

/// Fiber target: 14 g per 1000 kcal.
pub const FIBER_G_PER_KCAL: f64 = 0.014;

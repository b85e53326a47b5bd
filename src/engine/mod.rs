pub mod aggregate;
pub mod constants;
pub mod goals;

pub use aggregate::daily_average;
pub use constants::*;
pub use goals::{basal_energy, compute_goals, energy_expenditure};

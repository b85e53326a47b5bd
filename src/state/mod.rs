mod manager;
mod persistence;

pub use manager::PlanBook;
pub use persistence::{load_plans, load_profile, open_plan_book, save_plans, save_profile};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, FoodItem, ProfileDraft, Sex};

/// NutriTrack: personal nutrition goals and meal plan daily averages.
#[derive(Parser, Debug)]
#[command(name = "nutritrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the nutrient reference CSV.
    #[arg(
        short,
        long,
        global = true,
        env = "NUTRITRACK_REFERENCE",
        default_value = "data/micronutrients.csv"
    )]
    pub reference: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily nutrition goals for a profile.
    Goals(GoalsArgs),

    /// Show, create, edit or delete meal plans.
    Plan(PlanArgs),

    /// List reference age brackets and macro ranges.
    Brackets {
        /// Sex to list (M or F).
        #[arg(long)]
        sex: Sex,
    },
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the meal plans JSON file.
    #[arg(short, long, default_value = "mealplans.json")]
    pub file: PathBuf,

    /// Plan to show or edit.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Set the plan length in days, creating the plan if it does not exist.
    #[arg(short, long, requires = "name")]
    pub length: Option<i64>,

    /// Add a food item given as JSON, e.g. '{"name":"Oats","servings":7,"nutrition":{"calories":150}}'.
    #[arg(long = "add-item", value_name = "JSON", value_parser = parse_food_item, requires = "name")]
    pub add_items: Vec<FoodItem>,

    /// Delete the plan.
    #[arg(long, requires = "name", conflicts_with_all = ["length", "add_items"])]
    pub delete: bool,

    /// Write plans and recomputed totals back to the file.
    #[arg(long)]
    pub save: bool,
}

impl PlanArgs {
    /// Whether any plan is changed.
    pub fn is_edit(&self) -> bool {
        self.delete || self.length.is_some() || !self.add_items.is_empty()
    }

    /// A missing plan file may only be started by a command that creates a plan.
    pub fn creates_plan(&self) -> bool {
        self.name.is_some() && self.length.is_some()
    }
}

fn parse_food_item(raw: &str) -> Result<FoodItem, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid food item: {}", e))
}

#[derive(Args, Debug, Default)]
pub struct GoalsArgs {
    /// Profile JSON file; flags below override its fields.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Height in meters.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Sex (M or F).
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Activity factor: 1.2, 1.375, 1.55, 1.725 or 1.9.
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Prompt for any fields still missing.
    #[arg(short, long)]
    pub interactive: bool,
}

impl GoalsArgs {
    /// Profile fields given on the command line.
    pub fn overrides(&self) -> ProfileDraft {
        ProfileDraft {
            age: self.age,
            height_m: self.height,
            weight_kg: self.weight,
            sex: self.sex,
            activity: self.activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrient;

    fn plan_args(args: &[&str]) -> PlanArgs {
        let argv = ["nutritrack", "plan"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Plan(args) => args,
            other => panic!("expected plan command, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_view_is_not_an_edit() {
        let args = plan_args(&["-f", "plans.json"]);
        assert_eq!(args.file, PathBuf::from("plans.json"));
        assert!(!args.is_edit());
        assert!(!args.creates_plan());
    }

    #[test]
    fn test_plan_add_items_parse_json() {
        let args = plan_args(&[
            "-n",
            "Week",
            "--add-item",
            r#"{"name": "Oats", "servings": 7, "nutrition": {"calories": 150}}"#,
            "--add-item",
            r#"{"name": "Milk"}"#,
        ]);
        assert!(args.is_edit());
        assert_eq!(args.add_items.len(), 2);
        assert_eq!(args.add_items[0].nutrition.get(Nutrient::Calories), 150.0);
        assert_eq!(args.add_items[1].servings, 1.0);
    }

    #[test]
    fn test_plan_length_creates() {
        let args = plan_args(&["-n", "Week", "--length", "7", "--save"]);
        assert!(args.creates_plan());
        assert_eq!(args.length, Some(7));
        assert!(args.save);
    }

    #[test]
    fn test_plan_edit_requires_name() {
        assert!(Cli::try_parse_from(["nutritrack", "plan", "--delete"]).is_err());
        assert!(Cli::try_parse_from(["nutritrack", "plan", "--length", "3"]).is_err());
    }

    #[test]
    fn test_plan_delete_conflicts_with_edits() {
        let argv = ["nutritrack", "plan", "-n", "Week", "--delete", "--length", "3"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_plan_rejects_bad_item_json() {
        let argv = [
            "nutritrack",
            "plan",
            "-n",
            "Week",
            "--add-item",
            r#"{"name": "Tea", "nutrition": {"caffeine": 40}}"#,
        ];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}

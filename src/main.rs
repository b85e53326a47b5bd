use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nutritrack_rs::cli::{Cli, Command, GoalsArgs, PlanArgs};
use nutritrack_rs::engine::compute_goals;
use nutritrack_rs::error::Result;
use nutritrack_rs::interface::{complete_profile, display_brackets, display_vector, prompt_yes_no};
use nutritrack_rs::models::{MealPlan, NutrientVector, ProfileDraft, Sex};
use nutritrack_rs::reference::ReferenceTable;
use nutritrack_rs::state::{PlanBook, load_profile, open_plan_book, save_plans, save_profile};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nutritrack_rs=info,nutritrack=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // The reference table is required by every command; failing here is fatal.
    let table = ReferenceTable::from_path(&cli.reference)?;

    match cli.command {
        Command::Goals(args) => cmd_goals(&table, &args),
        Command::Plan(args) => cmd_plan(&args),
        Command::Brackets { sex } => cmd_brackets(&table, sex),
    }
}

/// Compute and display personal nutrition goals.
fn cmd_goals(table: &ReferenceTable, args: &GoalsArgs) -> Result<()> {
    let base = match &args.profile {
        Some(path) => load_profile(path)?,
        None => ProfileDraft::default(),
    };
    let mut draft = base.merged_with(&args.overrides());

    if args.interactive && !draft.is_complete() {
        draft = complete_profile(&draft)?;
        if let Some(path) = &args.profile {
            if prompt_yes_no("Save completed profile?", true)? {
                save_profile(path, &draft)?;
                println!("Profile saved to {}.", path.display());
            }
        }
    }

    let profile = draft.complete()?;
    let goals = compute_goals(&profile, table)?;
    info!(calories = goals.calories, "Computed daily goals");

    display_vector("Daily Nutrition Goals", &NutrientVector::Goal(goals));
    Ok(())
}

/// Show meal plans, applying any requested edit first.
fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let mut book = open_plan_book(&args.file, args.creates_plan())?;
    info!(plans = book.len(), "Loaded meal plans");

    match args.name.as_deref() {
        Some(name) if args.delete => {
            let plan = book.remove(name)?;
            info!(plan = %plan.name, "Deleted meal plan");
            println!("Deleted meal plan {}.", plan.name);
        }
        Some(name) => {
            edit_plan(&mut book, name, args)?;
            show_plan(book.find_plan(name)?, true);
        }
        None => {
            if book.is_empty() {
                println!("No meal plans in {}.", args.file.display());
            }
            for plan in book.all_plans() {
                show_plan(plan, false);
            }
        }
    }

    if args.save {
        save_plans(&args.file, &book.to_plans())?;
        debug!(path = %args.file.display(), "Saved meal plans");
        println!("Meal plans saved.");
    } else if args.is_edit() {
        println!("Changes not saved; rerun with --save to keep them.");
    }

    Ok(())
}

/// Resize or create the plan, then append new items.
fn edit_plan(book: &mut PlanBook, name: &str, args: &PlanArgs) -> Result<()> {
    if let Some(days) = args.length {
        if book.get_plan(name).is_some() {
            book.set_length(name, days)?;
        } else {
            book.insert(MealPlan::new(name, days))?;
            info!(plan = name, days, "Created meal plan");
        }
    }
    for item in &args.add_items {
        book.push_item(name, item.clone())?;
        debug!(plan = name, item = %item.name, "Added food item");
    }
    Ok(())
}

/// Print a plan's daily average, optionally followed by each item per serving.
fn show_plan(plan: &MealPlan, with_items: bool) {
    match &plan.totals {
        Some(totals) if plan.length_days > 0 => {
            let title = format!(
                "{} ({} days, {} items): daily average",
                plan.name,
                plan.length_days,
                plan.items.len()
            );
            display_vector(&title, &NutrientVector::Totals(totals.clone()));
        }
        _ => println!(
            "{}: cannot compute daily average (length {} days).",
            plan.name, plan.length_days
        ),
    }

    if with_items {
        for item in &plan.items {
            let title = format!("{} x{}: per serving", item.name, item.servings);
            display_vector(&title, &NutrientVector::Totals(item.nutrition.clone()));
        }
    }
}

/// List reference brackets for one sex.
fn cmd_brackets(table: &ReferenceTable, sex: Sex) -> Result<()> {
    display_brackets(table, sex);
    Ok(())
}

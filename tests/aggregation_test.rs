use assert_float_eq::assert_float_absolute_eq;

use nutritrack_rs::engine::daily_average;
use nutritrack_rs::error::NutriError;
use nutritrack_rs::interface::format_vector;
use nutritrack_rs::models::{FoodItem, MealPlan, Nutrient, NutrientTotals, NutrientVector};
use nutritrack_rs::state::{PlanBook, open_plan_book, save_plans};

/// Per-serving vector where every nutrient gets a distinct non-zero value.
fn varied_nutrition(scale: f64) -> NutrientTotals {
    NutrientTotals::from_fn(|n| scale * (n.index() as f64 + 1.5))
}

fn sample_items() -> Vec<FoodItem> {
    vec![
        FoodItem::new("Oatmeal", 3.0, varied_nutrition(1.0)),
        FoodItem::new("Salmon", 1.5, varied_nutrition(2.25)),
        FoodItem::new("Apple", 0.5, varied_nutrition(0.4)),
    ]
}

#[test]
fn test_single_item_law() {
    for (servings, length) in [(1.0, 1), (2.5, 3), (0.25, 7), (10.0, 30)] {
        let nutrition = varied_nutrition(3.0);
        let items = vec![FoodItem::new("Only", servings, nutrition.clone())];
        let avg = daily_average(&items, length).unwrap();

        for n in Nutrient::ALL {
            assert_float_absolute_eq!(
                avg.get(n),
                nutrition.get(n) * servings / length as f64,
                1e-9
            );
        }
    }
}

#[test]
fn test_doubling_servings_and_length_is_invariant() {
    let items = sample_items();
    let doubled: Vec<FoodItem> = items
        .iter()
        .map(|i| FoodItem::new(i.name.clone(), i.servings * 2.0, i.nutrition.clone()))
        .collect();

    for length in [1, 2, 5, 14] {
        let base = daily_average(&items, length).unwrap();
        let scaled = daily_average(&doubled, length * 2).unwrap();
        for n in Nutrient::ALL {
            assert_float_absolute_eq!(base.get(n), scaled.get(n), 1e-9);
        }
    }
}

#[test]
fn test_empty_plan_is_zero_for_any_length() {
    for length in [1, 3, 365] {
        let avg = daily_average(&[], length).unwrap();
        for n in Nutrient::ALL {
            assert_eq!(avg.get(n), 0.0);
        }
    }
}

#[test]
fn test_zero_length_never_yields_non_finite() {
    let result = daily_average(&sample_items(), 0);
    assert!(matches!(result, Err(NutriError::InvalidPlanLength(0))));
}

#[test]
fn test_worked_example_two_items() {
    let items = vec![
        FoodItem::new(
            "A",
            1.0,
            NutrientTotals::zero().with(Nutrient::Calories, 500.0),
        ),
        FoodItem::new(
            "B",
            2.0,
            NutrientTotals::zero().with(Nutrient::Calories, 300.0),
        ),
    ];

    let mut plan = MealPlan::new("Two Day", 2).with_items(items);
    let totals = plan.refresh_totals().unwrap().clone();
    assert_float_absolute_eq!(totals.get(Nutrient::Calories), 550.0, 1e-9);

    let table = format_vector(&NutrientVector::Totals(totals));
    assert_eq!(table[0], ("Calories (kcal)", "550".to_string()));
}

#[test]
fn test_plan_book_tracks_membership_changes() {
    let mut book = PlanBook::new(vec![MealPlan::new("Week", 7).with_items(sample_items())]);
    let before = book.get_plan("week").unwrap().totals.clone().unwrap();

    let after = book
        .push_item("Week", FoodItem::new("Snack", 7.0, varied_nutrition(1.0)))
        .unwrap()
        .clone();
    for n in Nutrient::ALL {
        assert_float_absolute_eq!(
            after.get(n) - before.get(n),
            varied_nutrition(1.0).get(n),
            1e-9
        );
    }

    assert!(book.set_length("week", -1).is_err());
    assert_eq!(book.get_plan("week").unwrap().totals.as_ref(), Some(&after));
}

#[test]
fn test_plan_file_edit_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mealplans.json");

    assert!(matches!(
        open_plan_book(&path, false),
        Err(NutriError::InvalidInput(_))
    ));

    let mut book = open_plan_book(&path, true).unwrap();
    book.insert(MealPlan::new("Weekend", 2)).unwrap();
    book.push_item("weekend", FoodItem::new("Pancakes", 4.0, varied_nutrition(1.0)))
        .unwrap();
    save_plans(&path, &book.to_plans()).unwrap();

    let mut reopened = open_plan_book(&path, false).unwrap();
    let plan = reopened.find_plan("Weekend").unwrap();
    assert_eq!(plan.items.len(), 1);
    let per_item = format_vector(&NutrientVector::Totals(plan.items[0].nutrition.clone()));
    assert_eq!(per_item[0], ("Calories (kcal)", "1".to_string()));
    let average = format_vector(&NutrientVector::Totals(plan.totals.clone().unwrap()));
    assert_eq!(average[0], ("Calories (kcal)", "3".to_string()));

    let removed = reopened.remove("WEEKEND").unwrap();
    assert_eq!(removed.name, "Weekend");
    save_plans(&path, &reopened.to_plans()).unwrap();
    assert!(open_plan_book(&path, false).unwrap().is_empty());
}

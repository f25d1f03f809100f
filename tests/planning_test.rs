use rand::rngs::StdRng;
use rand::SeedableRng;

use smart_week_rs::data::{parse_recipe_table, RecipePools};
use smart_week_rs::models::{Lunch, PlannedMeal, Weekday};
use smart_week_rs::planner::{
    build_shopping_list, build_weekly_plan, is_no_egg_day, standardize, Preferences, EGG_TAG,
};

const BREAKFAST: &str = "\
RecipeID,MealName,TotalTime,Tags,Ingredients
1,Masala Omelette,15,Contains-Egg,Eggs:2:piece|Red Onion:0.5:piece
2,Poha,20,Veg,Poha:1:cup|Peanuts:2:tbsp
3,Ragi Dosa,30,Veg,Ragi Flour:1:cup|Yogurt:0.5:cup
4,Egg Sandwich,10,Contains-Egg|Quick,Eggs:2:piece|Bread:4:slice
5,Upma,25,Veg,Semolina:1:cup|Mixed Veggies:0.5:cup
";

const DINNER: &str = "\
RecipeID,MealName,TotalTime,Tags,Ingredients
1,Egg Curry,45,Contains-Egg,Eggs:4:piece|Tomato:2:piece
2,Dal Tadka,35,Veg,Toor Dal:1:cup|Garlic:4:clove
3,Rajma,90,Veg,Kidney Beans:1:cup|Onion:1:piece
4,Khichdi,30,Veg,Moong Dal:0.5:cup|Idli Rice:0.5:cup
5,Egg Fried Rice,25,Contains-Egg|Quick,Eggs:2:piece|Rice:1:cup
";

const MAINS: &str = "\
RecipeID,MealName,TotalTime,Tags,Ingredients
1,Jeera Rice,20,,Rice:1:cup|Cumin:1:tsp
2,Chapati,30,,Atta Flour:2:cup
";

const VEG_SIDES: &str = "\
RecipeID,MealName,TotalTime,Tags,Ingredients
1,Aloo Gobi,30,,Potato:2:piece|Cauliflower:0.5:piece
2,Bhindi Fry,25,,Okra:250:g
";

const NON_VEG_SIDES: &str = "\
RecipeID,MealName,TotalTime,Tags,Ingredients
1,Boiled Egg,10,Contains-Egg,Eggs:2:piece
2,Egg Bhurji,15,Contains-Egg,Eggs:3:piece
";

fn pools() -> RecipePools {
    RecipePools {
        breakfast: parse_recipe_table(BREAKFAST).unwrap(),
        dinner: parse_recipe_table(DINNER).unwrap(),
        lunch_mains: parse_recipe_table(MAINS).unwrap(),
        lunch_veg_sides: parse_recipe_table(VEG_SIDES).unwrap(),
        lunch_non_veg_sides: parse_recipe_table(NON_VEG_SIDES).unwrap(),
    }
}

fn has_egg(meal: &PlannedMeal) -> bool {
    meal.recipe().is_some_and(|r| r.has_tag(EGG_TAG))
}

#[test]
fn test_week_has_seven_days_in_order() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = build_weekly_plan(&pools(), &Preferences::default(), &mut rng);
        let days: Vec<Weekday> = plan.days().map(|(d, _)| d).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
    }
}

#[test]
fn test_egg_days_never_serve_egg() {
    let prefs = Preferences {
        tiffin_night: Some(Weekday::Friday),
        quick_dinner_day: Some(Weekday::Tuesday),
        ..Default::default()
    };

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = build_weekly_plan(&pools(), &prefs, &mut rng);

        for (day, slots) in plan.days() {
            if !is_no_egg_day(day) {
                continue;
            }
            assert!(!has_egg(&slots.breakfast), "seed {seed}: egg breakfast on {day}");
            assert!(!has_egg(&slots.dinner), "seed {seed}: egg dinner on {day}");
            assert!(
                slots.lunch.non_veg_side().is_none(),
                "seed {seed}: non-veg side on {day}"
            );
        }
    }
}

#[test]
fn test_breakfasts_do_not_repeat_while_pool_allows() {
    // Monday to Wednesday can always be filled from fresh recipes: Tuesday
    // still has at least two egg-free breakfasts left.
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = build_weekly_plan(&pools(), &Preferences::default(), &mut rng);

        let names: Vec<String> = plan
            .days()
            .take(3)
            .map(|(_, slots)| slots.breakfast.name())
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len(), "seed {seed}: {names:?}");
    }
}

#[test]
fn test_quick_dinner_day_respects_time_limit() {
    let prefs = Preferences {
        quick_dinner_day: Some(Weekday::Wednesday),
        ..Default::default()
    };

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = build_weekly_plan(&pools(), &prefs, &mut rng);
        let dinner = &plan.get(Weekday::Wednesday).unwrap().dinner;
        assert!(dinner.recipe().unwrap().is_quick(40), "seed {seed}");
    }
}

#[test]
fn test_avoid_ingredient_removes_recipes_everywhere() {
    let prefs = Preferences {
        avoid_ingredient: "EGG".to_string(),
        ..Default::default()
    };

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = build_weekly_plan(&pools(), &prefs, &mut rng);

        for (_, slots) in plan.days() {
            for meal in slots.contributing_meals() {
                if let Some(recipe) = meal.recipe() {
                    assert!(!recipe.mentions_ingredient("egg"), "{}", recipe.name);
                }
            }
        }
    }
}

#[test]
fn test_leftovers_double_sunday_dinner() {
    let prefs = Preferences {
        use_leftovers: true,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let plan = build_weekly_plan(&pools(), &prefs, &mut rng);

    let sunday_dinner = plan.get(Weekday::Sunday).unwrap().dinner.clone();
    let sunday_recipe = sunday_dinner.recipe().unwrap();
    assert!(sunday_dinner.is_leftover_source());
    assert_eq!(
        plan.get(Weekday::Monday).unwrap().lunch,
        Lunch::Leftovers {
            label: format!("Leftovers: {}", sunday_recipe.name)
        }
    );

    let without_leftovers = {
        let mut rng = StdRng::seed_from_u64(42);
        build_weekly_plan(&pools(), &Preferences::default(), &mut rng)
    };
    let prices = Default::default();
    let doubled = build_shopping_list(&plan, &prices);
    let single = build_shopping_list(&without_leftovers, &prices);

    // Same seed, same draws: the only differences are the doubled Sunday
    // dinner and Monday's composite lunch no longer being bought.
    let grams_of = |recipe: &smart_week_rs::Recipe, name: &str| -> f64 {
        recipe
            .ingredients
            .iter()
            .filter(|i| i.name == name)
            .filter_map(|i| standardize(i).quantity.value())
            .sum()
    };
    let monday_lunch = without_leftovers.get(Weekday::Monday).unwrap().lunch.meals();

    for ingredient in &sunday_recipe.ingredients {
        let name = ingredient.name.as_str();
        let sunday_share = grams_of(sunday_recipe, name);
        let lunch_share: f64 = monday_lunch
            .iter()
            .filter_map(|m| m.recipe())
            .map(|r| grams_of(r, name))
            .sum();

        let before = single.get(name).unwrap().total_quantity();
        let after = doubled.get(name).unwrap().total_quantity();
        assert!(
            (after - (before + sunday_share - lunch_share)).abs() < 1e-9,
            "{name}: {before} -> {after}"
        );
    }
}

use crate::data::{Dataset, Table};
use crate::models::{ShoppingList, ShoppingListEntry, WeeklyPlan};
use crate::planner::CURRENCY;

/// Format a cost, or the unknown marker.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) => format!("{}{:.2}", CURRENCY, c),
        None => format!("{}?.??", CURRENCY),
    }
}

/// One shopping list line: `Name: 300.0 g (Est. £0.90)`.
pub fn format_shopping_line(name: &str, entry: &ShoppingListEntry) -> String {
    let quantity = if entry.is_complete() {
        format!("{:.1}", entry.total_quantity())
    } else {
        "?".to_string()
    };
    let units = entry.units_seen().collect::<Vec<_>>().join("/");

    format!(
        "{}: {} {} (Est. {})",
        name,
        quantity,
        units,
        format_cost(entry.estimated_cost)
    )
}

/// Plan rows as `[day, breakfast, lunch, dinner]`.
pub fn plan_rows(plan: &WeeklyPlan) -> Vec<[String; 4]> {
    plan.days()
        .map(|(day, slots)| {
            [
                day.to_string(),
                slots.breakfast.name(),
                slots.lunch.describe(),
                slots.dinner.name(),
            ]
        })
        .collect()
}

/// Display the week as a Day / Breakfast / Lunch / Dinner table.
pub fn display_weekly_plan(plan: &WeeklyPlan) {
    let header = [
        "Day".to_string(),
        "Breakfast".to_string(),
        "Lunch".to_string(),
        "Dinner".to_string(),
    ];
    let rows = plan_rows(plan);

    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let print_row = |row: &[String; 4]| {
        println!(
            "{:<w0$} | {:<w1$} | {:<w2$} | {:<w3$}",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3]
        );
    };

    println!();
    println!("=== Weekly Plan ===");
    println!();
    print_row(&header);
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 9));
    for row in &rows {
        print_row(row);
    }
    println!();
}

/// Display the alphabetized shopping list and the weekly total.
pub fn display_shopping_list(list: &ShoppingList) {
    println!("=== Shopping List ===");
    println!();

    if list.is_empty() {
        println!("(nothing to buy)");
    }
    for (name, entry) in list.iter() {
        println!("  {}", format_shopping_line(name, entry));
    }

    println!();
    println!(
        "Estimated Weekly Cost: {}",
        format_cost(Some(list.total_cost()))
    );
    println!();
}

/// Display what the `check` command found.
pub fn display_dataset_report(dataset: &Dataset) {
    println!();
    println!("=== Tables ===");
    println!();
    for table in Table::ALL {
        let marker = if table.is_essential() { " (essential)" } else { "" };
        println!(
            "  {:<20} {:>4} rows{}",
            table.sheet_name(),
            dataset.row_count(table),
            marker
        );
    }

    let unparsed: Vec<String> = dataset
        .pools
        .all_recipes()
        .filter(|(_, r)| r.has_unparsed_fields())
        .map(|(table, r)| format!("{} / {}", table, r.name))
        .collect();
    println!();
    println!("Recipes with unreadable numbers: {}", unparsed.len());
    for line in &unparsed {
        println!("  {}", line);
    }

    let unpriced = dataset.unpriced_ingredients();
    println!();
    println!("Ingredients without a price: {}", unpriced.len());
    for name in &unpriced {
        println!("  {}", name);
    }
    println!();
}

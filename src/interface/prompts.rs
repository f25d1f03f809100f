use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Weekday;
use crate::planner::Preferences;

/// Minimum similarity for an avoid-ingredient suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Prompt for a day, or none.
pub fn prompt_day(prompt: &str) -> Result<Option<Weekday>> {
    let mut options = vec!["None".to_string()];
    options.extend(Weekday::ALL.iter().map(|d| d.to_string()));

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(selection
        .checked_sub(1)
        .and_then(|idx| Weekday::ALL.get(idx).copied()))
}

/// Known ingredient names closest to `input`, best first.
pub fn suggest_ingredients<'a>(input: &str, known: &'a BTreeSet<String>) -> Vec<&'a str> {
    let needle = input.to_lowercase();
    let mut scored: Vec<(&str, f64)> = known
        .iter()
        .map(|name| (name.as_str(), jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(name, _)| name).collect()
}

/// Prompt for an ingredient to avoid, with fuzzy suggestions.
///
/// Text that already matches part of a known ingredient is kept as typed.
pub fn prompt_avoid_ingredient(known: &BTreeSet<String>) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient to avoid (press Enter for none)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(String::new());
        }

        let needle = input.to_lowercase();
        if known.iter().any(|name| name.to_lowercase().contains(&needle)) {
            return Ok(input.to_string());
        }

        let suggestions = suggest_ingredients(input, known);
        let Some(best) = suggestions.first() else {
            println!("No recipe uses '{}'; nothing will be filtered.", input);
            return Ok(input.to_string());
        };

        let accept = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", best))
            .default(true)
            .interact()?;

        if accept {
            return Ok(best.to_string());
        }
    }
}

/// Prompt for a yes/no answer.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all planning preferences.
pub fn collect_preferences(known_ingredients: &BTreeSet<String>) -> Result<Preferences> {
    let use_leftovers = prompt_yes_no("Use Sunday's dinner as Monday's lunch?", false)?;
    let tiffin_night = prompt_day("Tiffin night (breakfast for dinner)")?;
    let quick_dinner_day = prompt_day("Quick dinner day (40 minutes or less)")?;
    let avoid_ingredient = prompt_avoid_ingredient(known_ingredients)?;

    Ok(Preferences {
        use_leftovers,
        tiffin_night,
        quick_dinner_day,
        avoid_ingredient,
    })
}

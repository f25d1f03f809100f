use std::collections::{BTreeSet, HashMap};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::{Ingredient, Numeric, PriceEntry, Recipe};

/// Separator between tags and between ingredient triples.
const LIST_SEPARATOR: char = '|';

/// Separator inside a `name:quantity:unit` triple.
const TRIPLE_SEPARATOR: char = ':';

fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
}

/// Non-blank cell at `index`.
fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).map(str::trim).filter(|c| !c.is_empty())
}

fn parse_tags(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|tags| {
        tags.split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_ingredient(raw: &str) -> Ingredient {
    let mut parts = raw.split(TRIPLE_SEPARATOR);
    let name = parts.next().unwrap_or_default().trim().to_string();
    let quantity = parts
        .next()
        .map(Numeric::parse_finite)
        .unwrap_or(Numeric::Unparsed);
    let unit = parts.next().unwrap_or_default().trim().to_string();

    Ingredient {
        name,
        quantity,
        unit,
    }
}

fn parse_ingredients(raw: Option<&str>) -> Vec<Ingredient> {
    raw.map(|list| {
        list.split(LIST_SEPARATOR)
            .filter(|segment| !segment.trim().is_empty())
            .map(parse_ingredient)
            .collect()
    })
    .unwrap_or_default()
}

/// Parse a recipe table: `id, name, totalTimeMinutes, tags, ingredients`.
///
/// The header row is discarded and rows with a blank id are skipped.
/// Unparseable numbers become [`Numeric::Unparsed`] rather than errors;
/// only malformed CSV (bad quoting, invalid UTF-8) fails the table.
pub fn parse_recipe_table(text: &str) -> csv::Result<Vec<Recipe>> {
    let mut recipes = Vec::new();

    for record in reader(text).records() {
        let record = record?;

        let Some(id) = cell(&record, 0) else {
            continue;
        };

        recipes.push(Recipe {
            id: Numeric::parse(id),
            name: cell(&record, 1).unwrap_or_default().to_string(),
            total_time_minutes: cell(&record, 2)
                .map(Numeric::parse)
                .unwrap_or(Numeric::Unparsed),
            tags: parse_tags(cell(&record, 3)),
            ingredients: parse_ingredients(cell(&record, 4)),
        });
    }

    Ok(recipes)
}

/// Parse the price table: `name, price, packUnitLabel, brand`.
///
/// Rows with a blank name are skipped; a repeated name keeps the last row.
pub fn parse_price_table(text: &str) -> csv::Result<HashMap<String, PriceEntry>> {
    let mut prices = HashMap::new();

    for record in reader(text).records() {
        let record = record?;

        let Some(name) = cell(&record, 0) else {
            continue;
        };

        let price = cell(&record, 1)
            .map(Numeric::parse_finite)
            .unwrap_or(Numeric::Unparsed);
        let label = cell(&record, 2).map(str::to_string);
        let brand = cell(&record, 3).map(str::to_string);

        prices.insert(name.to_string(), PriceEntry::new(name, price, label, brand));
    }

    Ok(prices)
}

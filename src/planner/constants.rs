use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Weekday;

/// Tag marking a recipe as containing egg.
pub const EGG_TAG: &str = "Contains-Egg";

/// Longest total time (minutes) allowed on the quick-dinner day.
pub const QUICK_DINNER_MAX_MINUTES: u32 = 40;

/// Days on which no egg dishes and no non-veg lunch sides are served.
pub const NO_EGG_DAYS: [Weekday; 3] = [Weekday::Tuesday, Weekday::Friday, Weekday::Saturday];

/// Multiplier for a dinner cooked twice over to cover the next lunch.
pub const LEFTOVER_MULTIPLIER: f64 = 2.0;

/// Currency symbol used when rendering costs.
pub const CURRENCY: &str = "£";

/// Units that are already atomic or already standardized.
pub const PASS_THROUGH_UNITS: [&str; 8] =
    ["piece", "clove", "bunch", "inch", "slice", "shallot", "g", "ml"];

/// Unit that volumetric measures convert into.
pub const GRAMS: &str = "g";

/// Gram equivalents for one volumetric measure.
#[derive(Debug)]
pub struct VolumeConversion {
    pub default_grams: f64,
    pub overrides: HashMap<&'static str, f64>,
}

impl VolumeConversion {
    fn new(default_grams: f64, overrides: &[(&'static str, f64)]) -> Self {
        Self {
            default_grams,
            overrides: overrides.iter().copied().collect(),
        }
    }

    /// Grams per measure for this ingredient, falling back to the default.
    pub fn grams_for(&self, ingredient: &str) -> f64 {
        self.overrides
            .get(ingredient)
            .copied()
            .unwrap_or(self.default_grams)
    }
}

/// Map from volumetric unit to its gram conversion.
pub static VOLUME_CONVERSIONS: LazyLock<HashMap<&'static str, VolumeConversion>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert(
            "cup",
            VolumeConversion::new(
                200.0,
                &[
                    ("Atta Flour", 120.0),
                    ("Ragi Flour", 140.0),
                    ("Idli Rice", 200.0),
                    ("Toor Dal", 200.0),
                    ("Moong Dal", 200.0),
                    ("Chana Dal", 200.0),
                    ("Semolina", 150.0),
                    ("Millet", 180.0),
                    ("Dosa Batter", 240.0),
                    ("Grated Coconut", 80.0),
                    ("Mixed Veggies", 150.0),
                    ("Yogurt", 240.0),
                ],
            ),
        );
        m.insert("tbsp", VolumeConversion::new(15.0, &[]));
        m.insert("tsp", VolumeConversion::new(5.0, &[]));
        m
    });

/// Whether a day restricts egg dishes.
pub fn is_no_egg_day(day: Weekday) -> bool {
    NO_EGG_DAYS.contains(&day)
}

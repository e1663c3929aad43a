use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Catalog identifier for a meal, e.g. `"52772"`.
pub type MealId = String;

/// Number of positional ingredient/measure slots in a catalog record.
pub const INGREDIENT_SLOTS: usize = 20;

/// A recipe record from the remote catalog.
///
/// The category filter endpoint returns partial records (id, name and
/// thumbnail only), so everything beyond id and name is optional. Records
/// are immutable once fetched and held only in transient view state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: MealId,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// Remaining wire fields, notably the positional
    /// `strIngredient{n}` / `strMeasure{n}` pairs.
    #[serde(flatten)]
    slots: BTreeMap<String, Option<String>>,
}

impl Meal {
    pub fn new(id: impl Into<MealId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Ingredient/measure pairs in slot order.
    ///
    /// Blank slots are skipped without ending the scan; the catalog leaves
    /// gaps between filled slots.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut out = Vec::new();
        for slot in 1..=INGREDIENT_SLOTS {
            let name = match self.slot_value(&format!("strIngredient{slot}")) {
                Some(name) => name,
                None => continue,
            };
            out.push(Ingredient {
                name,
                measure: self.slot_value(&format!("strMeasure{slot}")),
            });
        }
        out
    }

    fn slot_value(&self, key: &str) -> Option<String> {
        self.slots
            .get(key)
            .and_then(|value| value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }
}

/// One ingredient line of a meal; the measure is free text and may be
/// absent even when the ingredient is filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

/// Fixed set of category filters. The catalog exposes more, but the
/// browsing surface offers this short list and does not fetch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Beef,
    Chicken,
    Dessert,
    Pasta,
    Seafood,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Beef,
        Category::Chicken,
        Category::Dessert,
        Category::Pasta,
        Category::Seafood,
    ];

    /// The category name as the catalog spells it.
    pub fn name(self) -> &'static str {
        match self {
            Category::Beef => "Beef",
            Category::Chicken => "Chicken",
            Category::Dessert => "Dessert",
            Category::Pasta => "Pasta",
            Category::Seafood => "Seafood",
        }
    }

    /// Case-insensitive lookup of a category by name.
    pub fn parse(input: &str) -> Option<Category> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

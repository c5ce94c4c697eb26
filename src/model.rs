//! Kitchen data shown by the UI
//!
//! Backend recipes only carry a title, a score and ingredient/step lists.
//! Everything else a card displays (cook time, servings, difficulty, artwork)
//! is filled in here with placeholders.

use serde_json::Value;
use uuid::Uuid;

use crate::backend::types::BackendRecipe;

/// Single generic artwork used for every recipe card
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=1200&q=80";

const UNTITLED: &str = "Untitled Recipe";
const UNKNOWN: &str = "—";
const DEFAULT_SERVINGS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Detection confidence in `0..=1`; manual entries are `1.0`
    pub confidence: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn manual(name: impl Into<String>) -> Self {
        Self::new(name, 1.0)
    }

    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    pub fn is_confident(&self) -> bool {
        self.confidence > 0.8
    }

    pub fn icon(&self) -> IngredientIcon {
        IngredientIcon::for_name(&self.name)
    }
}

/// Ingredient names compare case-insensitively
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Collapse case-insensitive duplicates, keeping first position and highest confidence
pub fn dedupe_ingredients(list: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut out: Vec<Ingredient> = Vec::with_capacity(list.len());
    for ingredient in list {
        let name = ingredient.name.trim();
        if name.is_empty() {
            continue;
        }
        match out.iter_mut().find(|i| same_name(&i.name, name)) {
            Some(existing) => existing.confidence = existing.confidence.max(ingredient.confidence),
            None => out.push(Ingredient::new(name, ingredient.confidence)),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientIcon {
    Apple,
    Carrot,
    Meat,
    Egg,
    Fish,
    Dairy,
    Grain,
    Leaf,
    Droplet,
    Flame,
}

/// Keyword table, checked in order; first substring hit wins
const ICON_KEYWORDS: &[(&str, IngredientIcon)] = &[
    ("tomato", IngredientIcon::Apple),
    ("apple", IngredientIcon::Apple),
    ("carrot", IngredientIcon::Carrot),
    ("potato", IngredientIcon::Carrot),
    ("onion", IngredientIcon::Carrot),
    ("beef", IngredientIcon::Meat),
    ("chicken", IngredientIcon::Meat),
    ("meat", IngredientIcon::Meat),
    ("egg", IngredientIcon::Egg),
    ("fish", IngredientIcon::Fish),
    ("salmon", IngredientIcon::Fish),
    ("milk", IngredientIcon::Dairy),
    ("cheese", IngredientIcon::Dairy),
    ("butter", IngredientIcon::Dairy),
    ("bread", IngredientIcon::Grain),
    ("flour", IngredientIcon::Grain),
    ("pasta", IngredientIcon::Grain),
    ("lettuce", IngredientIcon::Leaf),
    ("spinach", IngredientIcon::Leaf),
    ("basil", IngredientIcon::Leaf),
    ("oil", IngredientIcon::Droplet),
    ("water", IngredientIcon::Droplet),
    ("garlic", IngredientIcon::Flame),
];

impl IngredientIcon {
    pub fn for_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        ICON_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(*keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(IngredientIcon::Apple)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            IngredientIcon::Apple => "🍎",
            IngredientIcon::Carrot => "🥕",
            IngredientIcon::Meat => "🥩",
            IngredientIcon::Egg => "🥚",
            IngredientIcon::Fish => "🐟",
            IngredientIcon::Dairy => "🥛",
            IngredientIcon::Grain => "🌾",
            IngredientIcon::Leaf => "🌿",
            IngredientIcon::Droplet => "💧",
            IngredientIcon::Flame => "🔥",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
    pub owned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStep {
    pub number: u32,
    pub instruction: String,
}

/// Recipe in the shape the cards and the detail modal render
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub match_score: f64,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: String,
    pub image_url: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<RecipeStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl Recipe {
    pub fn match_tier(&self) -> MatchTier {
        if self.match_score >= 80.0 {
            MatchTier::High
        } else if self.match_score >= 60.0 {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }

    /// Score as shown on badges: integers stay bare, fractions keep one decimal
    pub fn match_label(&self) -> String {
        if self.match_score.fract() == 0.0 {
            format!("{:.0}% Match", self.match_score)
        } else {
            format!("{:.1}% Match", self.match_score)
        }
    }

    pub fn owned_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.owned).count()
    }
}

impl From<BackendRecipe> for Recipe {
    fn from(r: BackendRecipe) -> Self {
        let id = match r.id {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let name = r
            .title
            .filter(|t| !t.trim().is_empty())
            .or(r.name.filter(|n| !n.trim().is_empty()))
            .unwrap_or_else(|| UNTITLED.to_string());

        let ingredients = r
            .used
            .unwrap_or_default()
            .into_iter()
            .map(|name| (name, true))
            .chain(r.missing.unwrap_or_default().into_iter().map(|name| (name, false)))
            .map(|(name, owned)| RecipeIngredient {
                name,
                amount: String::new(),
                owned,
            })
            .collect();

        let steps = r
            .steps
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(idx, instruction)| RecipeStep {
                number: idx as u32 + 1,
                instruction,
            })
            .collect();

        Self {
            id,
            name,
            match_score: r.match_score.filter(|s| s.is_finite()).unwrap_or(0.0),
            cook_time: UNKNOWN.to_string(),
            servings: DEFAULT_SERVINGS,
            difficulty: UNKNOWN.to_string(),
            image_url: FALLBACK_IMAGE.to_string(),
            ingredients,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend(used: &[&str], missing: &[&str]) -> BackendRecipe {
        BackendRecipe {
            id: Some(json!("r-1")),
            title: Some("Omelette".to_string()),
            name: None,
            match_score: Some(50.0),
            used: Some(used.iter().map(|s| s.to_string()).collect()),
            missing: Some(missing.iter().map(|s| s.to_string()).collect()),
            steps: Some(vec!["Whisk".to_string(), "Fry".to_string()]),
        }
    }

    #[test]
    fn test_used_and_missing_become_owned_flags() {
        let recipe = Recipe::from(backend(&["egg"], &["milk"]));

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name, "egg");
        assert!(recipe.ingredients[0].owned);
        assert_eq!(recipe.ingredients[1].name, "milk");
        assert!(!recipe.ingredients[1].owned);
        assert_eq!(recipe.owned_count(), 1);
    }

    #[test]
    fn test_title_preferred_over_name() {
        let both = BackendRecipe {
            title: Some("Carbonara".to_string()),
            name: Some("Pasta Carbonara".to_string()),
            ..BackendRecipe::default()
        };
        assert_eq!(Recipe::from(both).name, "Carbonara");

        let name_only = BackendRecipe {
            title: Some("  ".to_string()),
            name: Some("Shakshuka".to_string()),
            ..BackendRecipe::default()
        };
        assert_eq!(Recipe::from(name_only).name, "Shakshuka");
    }

    #[test]
    fn test_steps_numbered_from_one() {
        let recipe = Recipe::from(backend(&[], &[]));
        let numbers: Vec<u32> = recipe.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(recipe.steps[1].instruction, "Fry");
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let recipe = Recipe::from(BackendRecipe::default());

        assert_eq!(recipe.name, "Untitled Recipe");
        assert_eq!(recipe.match_score, 0.0);
        assert!(Uuid::parse_str(&recipe.id).is_ok());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert_eq!(recipe.cook_time, "—");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.image_url, FALLBACK_IMAGE);
    }

    #[test]
    fn test_numeric_id_kept() {
        let recipe = Recipe::from(BackendRecipe {
            id: Some(json!(17)),
            ..BackendRecipe::default()
        });
        assert_eq!(recipe.id, "17");
    }

    #[test]
    fn test_match_tiers_and_labels() {
        let mut recipe = Recipe::from(backend(&[], &[]));
        recipe.match_score = 80.0;
        assert_eq!(recipe.match_tier(), MatchTier::High);
        assert_eq!(recipe.match_label(), "80% Match");
        recipe.match_score = 72.5;
        assert_eq!(recipe.match_tier(), MatchTier::Medium);
        assert_eq!(recipe.match_label(), "72.5% Match");
        recipe.match_score = 59.9;
        assert_eq!(recipe.match_tier(), MatchTier::Low);
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(IngredientIcon::for_name("Cherry Tomatoes"), IngredientIcon::Apple);
        assert_eq!(IngredientIcon::for_name("Smoked Salmon"), IngredientIcon::Fish);
        assert_eq!(IngredientIcon::for_name("olive oil"), IngredientIcon::Droplet);
        assert_eq!(IngredientIcon::for_name("broccoli"), IngredientIcon::Apple);
    }

    #[test]
    fn test_dedupe_keeps_best_confidence() {
        let list = vec![
            Ingredient::new("Carrot", 0.4),
            Ingredient::new("banana", 0.7),
            Ingredient::new("carrot", 0.9),
            Ingredient::new("  ", 0.9),
        ];
        let deduped = dedupe_ingredients(list);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "Carrot");
        assert_eq!(deduped[0].confidence, 0.9);
    }

    #[test]
    fn test_confidence_display() {
        let ingredient = Ingredient::new("egg", 0.856);
        assert_eq!(ingredient.confidence_percent(), 86);
        assert!(ingredient.is_confident());
        assert!(!Ingredient::new("egg", 0.8).is_confident());
    }
}

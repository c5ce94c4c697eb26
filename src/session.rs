//! Kitchen session state
//!
//! Holds everything the window shows and applies every user action and backend
//! answer to it. Nothing in here performs I/O: operations that need fresh
//! recipes hand back a [`RecipeQuery`] and the app runs it, then feeds the
//! outcome into [`Session::recipes_loaded`].

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::backend::types::BackendRecipe;
use crate::model::{dedupe_ingredients, same_name, Ingredient, Recipe};
use crate::toast::{Toast, ToastKind};

/// Why recipes are being fetched; decides how the answer is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPurpose {
    Scan,
    Add { name: String },
    Remove,
    Chaos,
}

/// A `/recipes` call the app should perform on behalf of the session
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub id: u64,
    pub purpose: QueryPurpose,
    pub ingredients: Vec<String>,
}

#[derive(Debug)]
pub struct Session {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    selected: Option<Recipe>,
    checked_steps: BTreeSet<u32>,
    /// Recipe the step checklist belongs to
    checklist_recipe: Option<String>,
    scanning: bool,
    photo: Option<PathBuf>,
    toast: Option<Toast>,
    /// Draft text while the add-ingredient modal is open
    add_form: Option<String>,
    toast_duration: Duration,
    next_query_id: u64,
    pending_query: Option<u64>,
}

impl Session {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            ingredients: Vec::new(),
            recipes: Vec::new(),
            selected: None,
            checked_steps: BTreeSet::new(),
            checklist_recipe: None,
            scanning: false,
            photo: None,
            toast: None,
            add_form: None,
            toast_duration,
            next_query_id: 0,
            pending_query: None,
        }
    }

    // ========================================================================
    // Read access for views
    // ========================================================================

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn is_step_checked(&self, number: u32) -> bool {
        self.checked_steps.contains(&number)
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn photo(&self) -> Option<&PathBuf> {
        self.photo.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref().filter(|t| t.visible)
    }

    pub fn add_form(&self) -> Option<&str> {
        self.add_form.as_deref()
    }

    pub fn has_results(&self) -> bool {
        !self.ingredients.is_empty() || !self.recipes.is_empty()
    }

    // ========================================================================
    // Scan flow
    // ========================================================================

    /// Start processing a new photo. Returns `false` while a scan is running.
    pub fn begin_scan(&mut self, photo: PathBuf) -> bool {
        if self.scanning {
            return false;
        }
        self.scanning = true;
        self.selected = None;
        self.checked_steps.clear();
        self.checklist_recipe = None;
        self.ingredients.clear();
        self.recipes.clear();
        self.pending_query = None;
        self.photo = Some(photo);
        true
    }

    pub fn detection_finished(
        &mut self,
        result: Result<Vec<Ingredient>, String>,
        now: Instant,
    ) -> Option<RecipeQuery> {
        let detected = match result {
            Ok(detected) => detected,
            Err(message) => {
                tracing::warn!("Detection failed: {}", message);
                self.scanning = false;
                self.notify(message, ToastKind::Error, now);
                return None;
            }
        };

        self.ingredients = dedupe_ingredients(detected);
        if self.ingredients.is_empty() {
            self.scanning = false;
            self.notify(
                "No ingredients detected. Try another photo or add them manually.",
                ToastKind::Info,
                now,
            );
            return None;
        }

        Some(self.query(QueryPurpose::Scan))
    }

    // ========================================================================
    // Manual edits
    // ========================================================================

    pub fn add_ingredient(&mut self, name: &str, now: Instant) -> Option<RecipeQuery> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if self.ingredients.iter().any(|i| same_name(&i.name, name)) {
            self.notify(format!("{name} is already in the list!"), ToastKind::Info, now);
            return None;
        }

        self.ingredients.push(Ingredient::manual(name));
        Some(self.query(QueryPurpose::Add {
            name: name.to_string(),
        }))
    }

    pub fn remove_ingredient(&mut self, name: &str) -> Option<RecipeQuery> {
        let before = self.ingredients.len();
        self.ingredients.retain(|i| i.name != name);
        if self.ingredients.len() == before {
            return None;
        }

        if self.ingredients.is_empty() {
            self.recipes.clear();
            self.selected = None;
            // its answer is now stale and will never clear scanning
            if self.pending_query.take().is_some() {
                self.scanning = false;
            }
            return None;
        }

        Some(self.query(QueryPurpose::Remove))
    }

    pub fn open_add_form(&mut self) {
        self.add_form = Some(String::new());
    }

    pub fn close_add_form(&mut self) {
        self.add_form = None;
    }

    pub fn edit_add_form(&mut self, value: String) {
        if self.add_form.is_some() {
            self.add_form = Some(value);
        }
    }

    /// Submit the modal: blank input keeps it open, anything else closes it
    /// and goes through [`Session::add_ingredient`]
    pub fn submit_add_form(&mut self, now: Instant) -> Option<RecipeQuery> {
        let value = self.add_form.as_deref()?.trim().to_string();
        if value.is_empty() {
            return None;
        }
        self.add_form = None;
        self.add_ingredient(&value, now)
    }

    // ========================================================================
    // Chaos mode
    // ========================================================================

    /// Ask for recipes built from whatever is on hand (possibly nothing)
    pub fn begin_chaos(&mut self) -> Option<RecipeQuery> {
        if self.scanning {
            return None;
        }
        self.scanning = true;
        Some(self.query(QueryPurpose::Chaos))
    }

    // ========================================================================
    // Recipe answers
    // ========================================================================

    pub fn recipes_loaded<R: Rng + ?Sized>(
        &mut self,
        query: &RecipeQuery,
        result: Result<Vec<BackendRecipe>, String>,
        rng: &mut R,
        now: Instant,
    ) {
        if self.pending_query != Some(query.id) {
            tracing::debug!("Ignoring stale recipe answer for query {}", query.id);
            return;
        }
        self.pending_query = None;
        self.scanning = false;

        let matched = match result {
            Ok(matched) => matched,
            Err(message) => {
                tracing::warn!("Recipe query {:?} failed: {}", query.purpose, message);
                let message = match &query.purpose {
                    QueryPurpose::Scan => message,
                    QueryPurpose::Add { .. } | QueryPurpose::Remove => {
                        format!("Failed to update recipes: {message}")
                    }
                    QueryPurpose::Chaos => format!("Chaos Mode failed: {message}"),
                };
                self.notify(message, ToastKind::Error, now);
                return;
            }
        };

        match &query.purpose {
            QueryPurpose::Scan => {
                self.replace_recipes(matched);
                if self.recipes.is_empty() {
                    self.notify(
                        "No matching recipes found. Try adding ingredients manually.",
                        ToastKind::Info,
                        now,
                    );
                }
            }
            QueryPurpose::Add { name } => {
                self.replace_recipes(matched);
                self.notify(format!("Added {name}!"), ToastKind::Success, now);
            }
            QueryPurpose::Remove => self.replace_recipes(matched),
            QueryPurpose::Chaos => {
                let Some(pick) = matched.choose(rng).cloned() else {
                    self.notify("Chaos Mode found nothing. Try scanning first.", ToastKind::Info, now);
                    return;
                };
                let pick = Recipe::from(pick);
                tracing::info!("Chaos Mode picked {}", pick.name);
                self.recipes = vec![pick.clone()];
                self.open_recipe(pick);
                self.notify("Chaos Mode activated! Bon appétit 😈", ToastKind::Success, now);
            }
        }
    }

    // ========================================================================
    // Recipe modal
    // ========================================================================

    pub fn select_recipe(&mut self, id: &str) {
        if let Some(recipe) = self.recipes.iter().find(|r| r.id == id).cloned() {
            self.open_recipe(recipe);
        }
    }

    pub fn close_recipe(&mut self) {
        self.selected = None;
    }

    pub fn toggle_step(&mut self, number: u32) {
        if !self.checked_steps.remove(&number) {
            self.checked_steps.insert(number);
        }
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    pub fn close_toast(&mut self) {
        if let Some(toast) = self.toast.as_mut() {
            toast.hide();
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = self.toast.as_mut() {
            if toast.visible && toast.is_expired(now) {
                toast.hide();
            }
        }
    }

    /// Raise a toast from outside the session (e.g. app-level failures)
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toast = Some(Toast::new(message, kind, self.toast_duration, now));
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn query(&mut self, purpose: QueryPurpose) -> RecipeQuery {
        self.next_query_id += 1;
        self.pending_query = Some(self.next_query_id);
        RecipeQuery {
            id: self.next_query_id,
            purpose,
            ingredients: self.ingredients.iter().map(|i| i.name.clone()).collect(),
        }
    }

    fn replace_recipes(&mut self, matched: Vec<BackendRecipe>) {
        self.recipes = matched.into_iter().map(Recipe::from).collect();
        if let Some(selected) = self.selected.take() {
            self.selected = self.recipes.iter().find(|r| r.id == selected.id).cloned();
        }
    }

    fn open_recipe(&mut self, recipe: Recipe) {
        if self.checklist_recipe.as_ref() != Some(&recipe.id) {
            self.checked_steps.clear();
            self.checklist_recipe = Some(recipe.id.clone());
        }
        self.selected = Some(recipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn session() -> Session {
        Session::new(Duration::from_millis(3000))
    }

    fn backend(id: &str, used: &[&str], missing: &[&str]) -> BackendRecipe {
        BackendRecipe {
            id: Some(json!(id)),
            title: Some(format!("Recipe {id}")),
            name: None,
            match_score: Some(50.0),
            used: Some(used.iter().map(|s| s.to_string()).collect()),
            missing: Some(missing.iter().map(|s| s.to_string()).collect()),
            steps: Some(vec!["Chop".to_string(), "Cook".to_string()]),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Session after a successful scan of `names` with `recipes` matched
    fn scanned(names: &[&str], recipes: Vec<BackendRecipe>) -> Session {
        let now = Instant::now();
        let mut s = session();
        assert!(s.begin_scan(PathBuf::from("fridge.jpg")));
        let detected = names.iter().map(|n| Ingredient::new(*n, 0.9)).collect();
        let query = s.detection_finished(Ok(detected), now).unwrap();
        s.recipes_loaded(&query, Ok(recipes), &mut rng(), now);
        s
    }

    #[test]
    fn test_scan_flow_fills_ingredients_and_recipes() {
        let now = Instant::now();
        let mut s = session();
        assert!(s.begin_scan(PathBuf::from("fridge.jpg")));
        assert!(s.is_scanning());
        assert!(!s.begin_scan(PathBuf::from("again.jpg")));

        let query = s
            .detection_finished(Ok(vec![Ingredient::new("egg", 0.9), Ingredient::new("Egg", 0.5)]), now)
            .unwrap();
        assert_eq!(query.purpose, QueryPurpose::Scan);
        assert_eq!(query.ingredients, vec!["egg".to_string()]);
        assert!(s.is_scanning());

        s.recipes_loaded(&query, Ok(vec![backend("a", &["egg"], &["milk"])]), &mut rng(), now);
        assert!(!s.is_scanning());
        assert_eq!(s.recipes().len(), 1);
        assert!(s.toast().is_none());
    }

    #[test]
    fn test_scan_with_no_recipes_notifies() {
        let s = scanned(&["egg"], vec![]);
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert!(toast.message.starts_with("No matching recipes found"));
    }

    #[test]
    fn test_detection_error_surfaces_message() {
        let mut s = session();
        s.begin_scan(PathBuf::from("blurry.jpg"));
        let query = s.detection_finished(Err("bad image".to_string()), Instant::now());

        assert!(query.is_none());
        assert!(!s.is_scanning());
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "bad image");
    }

    #[test]
    fn test_empty_detection_skips_recipe_call() {
        let mut s = session();
        s.begin_scan(PathBuf::from("empty.jpg"));
        let query = s.detection_finished(Ok(vec![]), Instant::now());

        assert!(query.is_none());
        assert!(!s.is_scanning());
        assert!(s.toast().unwrap().message.starts_with("No ingredients detected"));
    }

    #[test]
    fn test_duplicate_add_is_noop_with_notice() {
        let mut s = scanned(&["Egg"], vec![backend("a", &["egg"], &[])]);
        let recipes_before = s.recipes().to_vec();

        let query = s.add_ingredient("egg", Instant::now());

        assert!(query.is_none());
        assert_eq!(s.ingredients().len(), 1);
        assert_eq!(s.recipes(), recipes_before.as_slice());
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, "egg is already in the list!");
    }

    #[test]
    fn test_add_refetches_and_replaces() {
        let now = Instant::now();
        let mut s = scanned(&["egg"], vec![backend("a", &["egg"], &["milk"])]);

        let query = s.add_ingredient("  milk ", now).unwrap();
        assert_eq!(query.ingredients, vec!["egg".to_string(), "milk".to_string()]);
        assert_eq!(s.ingredients()[1].confidence, 1.0);

        s.recipes_loaded(&query, Ok(vec![backend("b", &["egg", "milk"], &[])]), &mut rng(), now);
        assert_eq!(s.recipes().len(), 1);
        assert_eq!(s.recipes()[0].id, "b");
        assert_eq!(s.toast().unwrap().message, "Added milk!");
    }

    #[test]
    fn test_remove_last_clears_without_query() {
        let mut s = scanned(&["egg"], vec![backend("a", &["egg"], &[])]);
        s.select_recipe("a");

        let query = s.remove_ingredient("egg");

        assert!(query.is_none());
        assert!(s.ingredients().is_empty());
        assert!(s.recipes().is_empty());
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_remove_with_remaining_requeries() {
        let mut s = scanned(&["egg", "milk"], vec![backend("a", &["egg"], &[])]);
        let query = s.remove_ingredient("milk").unwrap();
        assert_eq!(query.purpose, QueryPurpose::Remove);
        assert_eq!(query.ingredients, vec!["egg".to_string()]);
        assert!(s.remove_ingredient("saffron").is_none());
    }

    #[test]
    fn test_add_failure_keeps_previous_recipes() {
        let now = Instant::now();
        let mut s = scanned(&["egg"], vec![backend("a", &["egg"], &[])]);
        let query = s.add_ingredient("milk", now).unwrap();

        s.recipes_loaded(&query, Err("Recipe matching failed".to_string()), &mut rng(), now);

        assert_eq!(s.recipes().len(), 1);
        assert_eq!(s.toast().unwrap().kind, ToastKind::Error);
        assert_eq!(s.toast().unwrap().message, "Failed to update recipes: Recipe matching failed");
    }

    #[test]
    fn test_remove_last_during_chaos_switches_scanning_off() {
        let now = Instant::now();
        let mut s = session();
        s.add_ingredient("egg", now);
        let chaos = s.begin_chaos().unwrap();
        assert!(s.is_scanning());

        assert!(s.remove_ingredient("egg").is_none());
        s.recipes_loaded(&chaos, Ok(vec![]), &mut rng(), now);

        assert!(!s.is_scanning());
        assert!(s.begin_chaos().is_some());
    }

    #[test]
    fn test_scan_recipe_failure_surfaces_raw_message() {
        let now = Instant::now();
        let mut s = session();
        s.begin_scan(PathBuf::from("fridge.jpg"));
        let query = s
            .detection_finished(Ok(vec![Ingredient::new("egg", 0.9)]), now)
            .unwrap();

        s.recipes_loaded(&query, Err("Recipe matching failed".to_string()), &mut rng(), now);

        assert!(!s.is_scanning());
        assert!(s.recipes().is_empty());
        assert_eq!(s.ingredients().len(), 1);
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Recipe matching failed");
    }

    #[test]
    fn test_remove_failure_keeps_previous_recipes() {
        let now = Instant::now();
        let mut s = scanned(&["egg", "milk"], vec![backend("a", &["egg", "milk"], &[])]);
        let query = s.remove_ingredient("milk").unwrap();

        s.recipes_loaded(&query, Err("backend down".to_string()), &mut rng(), now);

        assert_eq!(s.recipes().len(), 1);
        assert_eq!(s.recipes()[0].id, "a");
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Failed to update recipes: backend down");
    }

    #[test]
    fn test_chaos_failure_keeps_recipes_and_stops_scanning() {
        let now = Instant::now();
        let mut s = scanned(&["egg"], vec![backend("a", &["egg"], &[]), backend("b", &[], &["egg"])]);
        let before = s.recipes().to_vec();
        let query = s.begin_chaos().unwrap();

        s.recipes_loaded(&query, Err("Recipe matching failed".to_string()), &mut rng(), now);

        assert!(!s.is_scanning());
        assert_eq!(s.recipes(), before.as_slice());
        assert!(s.selected().is_none());
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Chaos Mode failed: Recipe matching failed");
    }

    #[test]
    fn test_refresh_swaps_in_updated_selected_recipe() {
        let now = Instant::now();
        let mut s = scanned(&["egg"], vec![backend("a", &["egg"], &["milk"])]);
        s.select_recipe("a");

        let query = s.add_ingredient("milk", now).unwrap();
        s.recipes_loaded(&query, Ok(vec![backend("a", &["egg", "milk"], &[])]), &mut rng(), now);

        let selected = s.selected().unwrap();
        assert_eq!(selected.id, "a");
        assert_eq!(selected.owned_count(), 2);
        assert!(selected.ingredients.iter().all(|i| i.owned));
    }

    #[test]
    fn test_stale_answer_ignored() {
        let now = Instant::now();
        let mut s = scanned(&["egg", "milk", "flour"], vec![]);
        let first = s.remove_ingredient("flour").unwrap();
        let second = s.remove_ingredient("milk").unwrap();

        s.recipes_loaded(&second, Ok(vec![backend("new", &["egg"], &[])]), &mut rng(), now);
        s.recipes_loaded(&first, Ok(vec![backend("old", &["egg", "milk"], &[])]), &mut rng(), now);

        assert_eq!(s.recipes().len(), 1);
        assert_eq!(s.recipes()[0].id, "new");
    }

    #[test]
    fn test_chaos_with_nothing_found_changes_nothing() {
        let now = Instant::now();
        let mut s = session();

        let query = s.begin_chaos().unwrap();
        assert!(query.ingredients.is_empty());
        s.recipes_loaded(&query, Ok(vec![]), &mut rng(), now);

        assert!(!s.is_scanning());
        assert!(s.recipes().is_empty());
        assert!(s.ingredients().is_empty());
        assert!(s.selected().is_none());
        let toast = s.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, "Chaos Mode found nothing. Try scanning first.");
    }

    #[test]
    fn test_chaos_picks_one_and_opens_it() {
        let now = Instant::now();
        let mut s = scanned(&["egg"], vec![]);
        let query = s.begin_chaos().unwrap();
        assert_eq!(query.ingredients, vec!["egg".to_string()]);

        let matched = vec![backend("a", &[], &[]), backend("b", &[], &[]), backend("c", &[], &[])];
        s.recipes_loaded(&query, Ok(matched), &mut rng(), now);

        assert_eq!(s.recipes().len(), 1);
        let picked = &s.recipes()[0];
        assert!(["a", "b", "c"].contains(&picked.id.as_str()));
        assert_eq!(s.selected().map(|r| r.id.as_str()), Some(picked.id.as_str()));
        assert_eq!(s.toast().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_add_form_submit() {
        let now = Instant::now();
        let mut s = scanned(&["egg"], vec![]);

        s.open_add_form();
        s.edit_add_form("   ".to_string());
        assert!(s.submit_add_form(now).is_none());
        assert!(s.add_form().is_some());

        s.edit_add_form(" basil ".to_string());
        let query = s.submit_add_form(now).unwrap();
        assert!(s.add_form().is_none());
        assert_eq!(query.purpose, QueryPurpose::Add { name: "basil".to_string() });
    }

    #[test]
    fn test_step_checklist_resets_per_recipe() {
        let mut s = scanned(&["egg"], vec![backend("a", &[], &[]), backend("b", &[], &[])]);

        s.select_recipe("a");
        s.toggle_step(1);
        s.toggle_step(2);
        s.toggle_step(2);
        assert!(s.is_step_checked(1));
        assert!(!s.is_step_checked(2));

        s.close_recipe();
        s.select_recipe("a");
        assert!(s.is_step_checked(1));

        s.select_recipe("b");
        assert!(!s.is_step_checked(1));
    }

    #[test]
    fn test_toast_auto_dismiss() {
        let now = Instant::now();
        let mut s = session();
        s.notify("hello", ToastKind::Info, now);

        s.tick(now + Duration::from_millis(2000));
        assert!(s.toast().is_some());
        s.tick(now + Duration::from_millis(3000));
        assert!(s.toast().is_none());
    }
}

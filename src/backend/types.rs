//! Wire types for the detection / recipe backend
//!
//! Everything optional here is optional on purpose: the backend is a separate
//! service and the client keeps rendering when fields go missing or turn null.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /detect` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub ingredients: Option<Vec<DetectedIngredient>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectedIngredient {
    pub name: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// `POST /recipes` request body
#[derive(Debug, Clone, Serialize)]
pub struct RecipesRequest<'a> {
    pub ingredients: &'a [String],
}

/// `POST /recipes` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipesResponse {
    #[serde(default)]
    pub recipes: Option<Vec<BackendRecipe>>,
}

/// A scored recipe as the backend sends it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRecipe {
    /// String in practice, but some datasets use numeric ids
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    /// Older datasets send `name` instead of (or next to) `title`
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub used: Option<Vec<String>>,
    #[serde(default)]
    pub missing: Option<Vec<String>>,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
}

/// `GET /` response
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub message: String,
}

/// FastAPI-style error body; `detail` is a string for `HTTPException` and an
/// array for validation failures
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn detail_message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_tolerates_nulls_and_aliases() {
        let recipe: BackendRecipe = serde_json::from_value(json!({
            "id": 42,
            "name": "Shakshuka",
            "matchScore": 66.7,
            "used": ["egg", "tomato"],
            "missing": null
        }))
        .unwrap();

        assert_eq!(recipe.id, Some(json!(42)));
        assert_eq!(recipe.title, None);
        assert_eq!(recipe.name.as_deref(), Some("Shakshuka"));
        assert_eq!(recipe.match_score, Some(66.7));
        assert_eq!(recipe.missing, None);
        assert_eq!(recipe.steps, None);
    }

    #[test]
    fn test_recipe_with_both_title_and_name_decodes() {
        let body: RecipesResponse = serde_json::from_str(
            r#"{"recipes":[{"id":"1","title":"Carbonara","name":"Pasta Carbonara"}]}"#,
        )
        .unwrap();

        let recipes = body.recipes.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title.as_deref(), Some("Carbonara"));
        assert_eq!(recipes[0].name.as_deref(), Some("Pasta Carbonara"));
    }

    #[test]
    fn test_error_body_only_string_detail_counts() {
        let body: ErrorBody = serde_json::from_value(json!({"detail": "bad image"})).unwrap();
        assert_eq!(body.detail_message().as_deref(), Some("bad image"));

        let body: ErrorBody =
            serde_json::from_value(json!({"detail": [{"loc": ["body"], "msg": "field required"}]}))
                .unwrap();
        assert_eq!(body.detail_message(), None);
    }
}

//! HTTP client for the detection / recipe backend

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::error::{ApiError, Operation};
use super::types::{
    BackendRecipe, DetectResponse, ErrorBody, RecipesRequest, RecipesResponse, StatusResponse,
};
use crate::config::Config;
use crate::model::Ingredient;

/// A photo ready to be posted as the `file` form field
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo.jpg".to_string());
        Ok(Self { file_name, bytes })
    }

    fn mime(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "bmp" => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

/// Client for communicating with the FastAPI backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the backend answers on its root route
    pub async fn status(&self) -> Result<String, ApiError> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status: StatusResponse = decode(check(response, Operation::Status).await?).await?;
        Ok(status.message)
    }

    /// Upload a photo and get back the ingredients the model saw
    pub async fn detect_ingredients(&self, upload: ImageUpload) -> Result<Vec<Ingredient>, ApiError> {
        let url = format!("{}/detect", self.base_url);
        tracing::info!("Detecting ingredients in {} ({} bytes)", upload.file_name, upload.bytes.len());

        let mime = upload.mime();
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let body: DetectResponse = decode(check(response, Operation::Detect).await?).await?;

        let ingredients: Vec<Ingredient> = body
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|d| Ingredient::new(d.name, d.confidence.unwrap_or(0.0)))
            .collect();
        tracing::info!("Backend detected {} ingredients", ingredients.len());
        Ok(ingredients)
    }

    /// Ask the backend for recipes matching the given ingredient names
    pub async fn fetch_recipes(&self, ingredients: &[String]) -> Result<Vec<BackendRecipe>, ApiError> {
        let url = format!("{}/recipes", self.base_url);
        tracing::debug!("Matching recipes for {:?}", ingredients);

        let response = self
            .client
            .post(&url)
            .json(&RecipesRequest { ingredients })
            .send()
            .await?;
        let body: RecipesResponse = decode(check(response, Operation::Recipes).await?).await?;

        let recipes = body.recipes.unwrap_or_default();
        tracing::info!("Backend matched {} recipes", recipes.len());
        Ok(recipes)
    }

    /// Download raw bytes from an absolute URL (recipe artwork)
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let bytes = check(response, Operation::Image).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Turn a non-2xx response into `ApiError::Status`, reading `detail` if the
/// body carries one
async fn check(response: Response, operation: Operation) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.bytes().await {
        Ok(raw) => serde_json::from_slice::<ErrorBody>(&raw)
            .ok()
            .and_then(|body| body.detail_message()),
        Err(_) => None,
    };
    tracing::warn!("Backend {:?} call failed with {}: {:?}", operation, status, detail);

    Err(ApiError::Status {
        operation,
        status: status.as_u16(),
        detail,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let raw = response.bytes().await?;
    serde_json::from_slice(&raw).map_err(|e| ApiError::Decode(e.to_string()))
}

//! HTTP access to the storefront API for the frontend

use gloo_net::http::Request;
use nepwears_core::{CollectionItem, CollectionsProvider, CoreError, StorefrontProfile};

/// API base URL constant
#[cfg(debug_assertions)]
const API_BASE_URL: &str = "http://localhost:3000";
#[cfg(not(debug_assertions))]
const API_BASE_URL: &str = "";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Fetch brand, tagline and navigation settings
pub async fn fetch_storefront() -> Result<StorefrontProfile, String> {
    let url = endpoint(API_BASE_URL, "/api/storefront");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch storefront profile: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<StorefrontProfile>()
        .await
        .map_err(|e| format!("Failed to parse JSON: {}", e))
}

/// Collections fetched from `GET {base}/api/collections`
#[derive(Debug, Clone)]
pub struct ApiCollections {
    base_url: String,
}

impl ApiCollections {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self) -> String {
        endpoint(&self.base_url, "/api/collections")
    }
}

impl Default for ApiCollections {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl CollectionsProvider for ApiCollections {
    async fn fetch_collections(&self) -> Result<Vec<CollectionItem>, CoreError> {
        let response = Request::get(&self.url())
            .send()
            .await
            .map_err(|e| CoreError::fetch(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(CoreError::fetch(format!("HTTP error: {}", response.status())));
        }

        response
            .json::<Vec<CollectionItem>>()
            .await
            .map_err(|e| CoreError::fetch(format!("Parse error: {}", e)))
    }
}

//! Storefront configuration
//!
//! Stored as JSON. `load` validates strictly; `load_or_default` falls back to
//! defaults on any I/O or parse error.

use crate::collections::{default_collections, CollectionItem, DEFAULT_COLLECTION_MENU_LIMIT};
use crate::error::CoreError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// What a failed collections fetch does to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFailurePolicy {
    /// Keep the list empty and mark it ready; log a warning
    #[default]
    Degrade,
    /// Expose the failure through `CollectionsStatus::Failed`
    Surface,
}

/// Navigation bar behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Collections listed per menu, at most `DEFAULT_COLLECTION_MENU_LIMIT`
    pub collection_menu_limit: usize,

    pub fetch_failure: FetchFailurePolicy,

    /// Collapse any open dropdown whenever the mobile menu closes
    pub reset_dropdown_on_menu_close: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            collection_menu_limit: DEFAULT_COLLECTION_MENU_LIMIT,
            fetch_failure: FetchFailurePolicy::Degrade,
            reset_dropdown_on_menu_close: false,
        }
    }
}

/// Top-level storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub brand: String,
    pub tagline: String,
    pub nav: NavConfig,
    /// Collections served by `/api/collections`
    pub collections: Vec<CollectionItem>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand: "NepWears".to_string(),
            tagline: "Your fashion destination".to_string(),
            nav: NavConfig::default(),
            collections: default_collections(),
        }
    }
}

/// Part of the configuration the frontend needs, served by `/api/storefront`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontProfile {
    pub brand: String,
    pub tagline: String,
    pub nav: NavConfig,
}

impl Default for StorefrontProfile {
    fn default() -> Self {
        StorefrontConfig::default().profile()
    }
}

impl StorefrontConfig {
    pub fn profile(&self) -> StorefrontProfile {
        StorefrontProfile {
            brand: self.brand.clone(),
            tagline: self.tagline.clone(),
            nav: self.nav.clone(),
        }
    }

    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|source| CoreError::ConfigParse {
                path: path.to_path_buf(),
                message: source.to_string(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Like `load`, but returns defaults when the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.brand.trim().is_empty() {
            return Err(CoreError::invalid_config("brand must not be empty"));
        }
        if !(1..=DEFAULT_COLLECTION_MENU_LIMIT).contains(&self.nav.collection_menu_limit) {
            return Err(CoreError::invalid_config(format!(
                "nav.collection_menu_limit must be between 1 and {}, got {}",
                DEFAULT_COLLECTION_MENU_LIMIT, self.nav.collection_menu_limit
            )));
        }

        let mut seen = HashSet::new();
        for item in &self.collections {
            if item.slug.is_empty() || item.slug.contains('/') {
                return Err(CoreError::invalid_config(format!(
                    "collection '{}' has an invalid slug '{}'",
                    item.name, item.slug
                )));
            }
            if !seen.insert(item.slug.as_str()) {
                return Err(CoreError::invalid_config(format!(
                    "duplicate collection slug '{}'",
                    item.slug
                )));
            }
        }
        Ok(())
    }
}

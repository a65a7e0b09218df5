//! Collections shown in the "Shop By Collection" menus
//!
//! The list comes from an external provider once per controller lifetime.
//! Display order is fetch order.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Number of collections any menu lists by default
pub const DEFAULT_COLLECTION_MENU_LIMIT: usize = 4;

/// A named shopping category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Display label
    pub name: String,
    /// Unique identifier, also the route key
    pub slug: String,
}

impl CollectionItem {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// State of the one-shot collections fetch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CollectionsStatus {
    /// Fetch issued (or not yet issued), nothing received
    #[default]
    Pending,
    /// Provider resolved, or failed under the degrade policy
    Ready,
    /// Provider failed under the surface policy
    Failed { message: String },
}

impl CollectionsStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, CollectionsStatus::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CollectionsStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Source of the collections list
///
/// Implementations are called at most once per controller.
#[allow(async_fn_in_trait)]
pub trait CollectionsProvider {
    async fn fetch_collections(&self) -> Result<Vec<CollectionItem>, CoreError>;
}

/// Provider backed by a fixed list
#[derive(Debug, Clone)]
pub struct StaticCollections {
    items: Vec<CollectionItem>,
}

impl StaticCollections {
    pub fn new(items: Vec<CollectionItem>) -> Self {
        Self { items }
    }
}

impl Default for StaticCollections {
    fn default() -> Self {
        Self::new(default_collections())
    }
}

impl CollectionsProvider for StaticCollections {
    async fn fetch_collections(&self) -> Result<Vec<CollectionItem>, CoreError> {
        Ok(self.items.clone())
    }
}

/// The storefront's launch collections
pub fn default_collections() -> Vec<CollectionItem> {
    vec![
        CollectionItem::new("Embroidered Shirt", "embroidered-shirt"),
        CollectionItem::new("Old Money Polos", "old-money-polos"),
        CollectionItem::new("Classic Half Sleeves", "classic-half-sleeves"),
        CollectionItem::new("Essential Linens", "essential-linens"),
    ]
}

/// First `limit` collections, in provider order
pub fn visible_collections(items: &[CollectionItem], limit: usize) -> &[CollectionItem] {
    &items[..items.len().min(limit)]
}

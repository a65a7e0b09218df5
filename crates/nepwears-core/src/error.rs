//! Error types for nepwears-core
//!
//! Provides the error hierarchy with thiserror. Nothing in the navigation
//! core is fatal: the worst outcome is an empty collections menu.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for NepWears operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Lifecycle Errors
    // ===================
    #[error("Navigation controller cannot {operation} while {stage}")]
    Lifecycle {
        operation: &'static str,
        stage: LifecycleStage,
    },

    // ===================
    // Collections Errors
    // ===================
    #[error("Failed to fetch collections: {message}")]
    CollectionsFetch { message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::CollectionsFetch {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Actionable hint for the user, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::ConfigRead { path, .. } => {
                Some(format!("Check the file exists: ls {}", path.display()))
            }
            CoreError::ConfigParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::CollectionsFetch { .. } => {
                Some("Check that the storefront API is reachable at /api/collections".to_string())
            }
            _ => None,
        }
    }
}

/// Lifecycle of a navigation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    /// Constructed, scroll listener not registered yet
    Created,
    /// Scroll listener registered, fetch issued
    Initialized,
    /// Scroll listener released
    TornDown,
}

impl std::fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LifecycleStage::Created => "not initialized",
            LifecycleStage::Initialized => "already initialized",
            LifecycleStage::TornDown => "torn down",
        };
        f.write_str(label)
    }
}

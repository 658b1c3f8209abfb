//! Configuration module for the trail engine
//!
//! This module provides the configuration structure controlling the home
//! link, the collection override and how collection facets are detected.

use thiserror::Error;

/// Label used for the collection override link
pub const DEFAULT_COLLECTION_LABEL: &str = "Shop the Collection";

/// Facet key fragment marking a collection (product cluster) view
pub const DEFAULT_COLLECTION_MARKER: &str = "productcluster";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// How the collection override reshapes the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStyle {
    /// Replace all links with a single collection link
    #[default]
    Collapse,

    /// Keep one link per item, each relabelled and pointing at the current page
    Relabel,
}

/// Configuration for building trails
#[derive(Debug, Clone)]
pub struct TrailConfig {
    /// Emit the leading home link
    pub include_home: bool,

    /// Label of the home link
    pub home_label: String,

    /// Target of the home link
    pub home_href: String,

    /// Label used when the collection override is active
    pub collection_label: String,

    /// Lowercase fragment searched for in facet keys
    pub collection_marker: String,

    /// Shape of the trail under the collection override
    pub collection_style: CollectionStyle,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            include_home: true,
            home_label: "Home".to_string(),
            home_href: "/".to_string(),
            collection_label: DEFAULT_COLLECTION_LABEL.to_string(),
            collection_marker: DEFAULT_COLLECTION_MARKER.to_string(),
            collection_style: CollectionStyle::default(),
        }
    }
}

impl TrailConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the home link (builder pattern)
    pub fn with_home(mut self, include: bool) -> Self {
        self.include_home = include;
        self
    }

    /// Set home link label and target (builder pattern)
    pub fn with_home_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.home_label = label.into();
        self.home_href = href.into();
        self
    }

    /// Set collection override label (builder pattern)
    pub fn with_collection_label(mut self, label: impl Into<String>) -> Self {
        self.collection_label = label.into();
        self
    }

    /// Set collection facet marker (builder pattern)
    pub fn with_collection_marker(mut self, marker: impl Into<String>) -> Self {
        self.collection_marker = marker.into();
        self
    }

    /// Set collection override style (builder pattern)
    pub fn with_collection_style(mut self, style: CollectionStyle) -> Self {
        self.collection_style = style;
        self
    }

    /// Check the configuration for values that cannot produce a usable trail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collection_label.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "collection label must not be empty".to_string(),
            ));
        }

        // an empty marker would match every facet key
        if self.collection_marker.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "collection marker must not be empty".to_string(),
            ));
        }

        if self.include_home && self.home_href.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "home href must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

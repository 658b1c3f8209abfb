//! Data models for breadcrumb trails
//!
//! This module defines the data structures shared by the resolver, the trail
//! engine and the output formatters: navigation items, the tagged navigation
//! source, the request/context inputs, and the renderable trail.

use serde::{Deserialize, Serialize};

/// A single navigation link before rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Human-readable label, possibly percent-encoded
    pub name: String,

    /// Absolute URL-safe path
    pub href: String,
}

impl NavigationItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Where the navigation list comes from.
///
/// Priority is fixed: an explicit breadcrumb beats a category tree, which
/// beats raw category paths. Only raw categories need derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationSource {
    /// Caller-provided breadcrumb, used verbatim
    ExplicitBreadcrumb(Vec<NavigationItem>),

    /// Precomputed category tree, used verbatim
    CategoryTree(Vec<NavigationItem>),

    /// Slash-delimited category paths such as `/Department/Category`
    RawCategories(Vec<String>),
}

impl NavigationSource {
    /// Pick the active source from the three optional inputs.
    ///
    /// A present but empty list still counts as present.
    pub fn select(
        breadcrumb: Option<Vec<NavigationItem>>,
        category_tree: Option<Vec<NavigationItem>>,
        categories: Vec<String>,
    ) -> Self {
        match (breadcrumb, category_tree) {
            (Some(items), _) => NavigationSource::ExplicitBreadcrumb(items),
            (None, Some(items)) => NavigationSource::CategoryTree(items),
            (None, None) => NavigationSource::RawCategories(categories),
        }
    }

    /// Get the payload-free kind of this source
    pub fn kind(&self) -> SourceKind {
        match self {
            NavigationSource::ExplicitBreadcrumb(_) => SourceKind::ExplicitBreadcrumb,
            NavigationSource::CategoryTree(_) => SourceKind::CategoryTree,
            NavigationSource::RawCategories(_) => SourceKind::RawCategories,
        }
    }
}

/// Discriminant of [`NavigationSource`], reported on the built trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    ExplicitBreadcrumb,
    CategoryTree,
    RawCategories,
}

impl SourceKind {
    /// Get human-readable label for the source
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::ExplicitBreadcrumb => "breadcrumb",
            SourceKind::CategoryTree => "category tree",
            SourceKind::RawCategories => "categories",
        }
    }
}

/// A facet currently selected on the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFacet {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SelectedFacet {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Breadcrumb inputs supplied by the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbRequest {
    /// Trailing free-text label, rendered without a link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    /// Raw category paths, e.g. `["/Department", "/Department/Category"]`
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_tree: Option<Vec<NavigationItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<Vec<NavigationItem>>,

    /// Render on mobile devices too
    #[serde(default)]
    pub show_on_mobile: bool,
}

impl BreadcrumbRequest {
    /// Create a request from raw category paths
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the trailing term (builder pattern)
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Set the category tree (builder pattern)
    pub fn with_category_tree(mut self, items: Vec<NavigationItem>) -> Self {
        self.category_tree = Some(items);
        self
    }

    /// Set the explicit breadcrumb (builder pattern)
    pub fn with_breadcrumb(mut self, items: Vec<NavigationItem>) -> Self {
        self.breadcrumb = Some(items);
        self
    }

    /// Set mobile visibility (builder pattern)
    pub fn with_show_on_mobile(mut self, show: bool) -> Self {
        self.show_on_mobile = show;
        self
    }

    /// Select the active navigation source for this request
    pub fn source(&self) -> NavigationSource {
        NavigationSource::select(
            self.breadcrumb.clone(),
            self.category_tree.clone(),
            self.categories.clone(),
        )
    }
}

/// Runtime state the trail depends on, passed in explicitly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    #[serde(default)]
    pub is_mobile: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_facets: Option<Vec<SelectedFacet>>,

    /// Path of the page being rendered
    #[serde(default = "default_current_path")]
    pub current_path: String,
}

fn default_current_path() -> String {
    "/".to_string()
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            is_mobile: false,
            selected_facets: None,
            current_path: default_current_path(),
        }
    }
}

impl RenderContext {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            ..Default::default()
        }
    }

    /// Set mobile flag (builder pattern)
    pub fn with_mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }

    /// Set selected facets (builder pattern)
    pub fn with_facets(mut self, facets: Vec<SelectedFacet>) -> Self {
        self.selected_facets = Some(facets);
        self
    }
}

/// On-disk input: a request with its render context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailDocument {
    #[serde(flatten)]
    pub request: BreadcrumbRequest,

    #[serde(default)]
    pub context: RenderContext,
}

/// One renderable element of a trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrailEntry {
    /// Leading link to the home page
    Home { label: String, href: String },

    /// Navigation link, `position` starts at 1
    Link {
        position: usize,
        label: String,
        href: String,
    },

    /// Trailing free-text term without a link
    Term { label: String },
}

impl TrailEntry {
    pub fn label(&self) -> &str {
        match self {
            TrailEntry::Home { label, .. }
            | TrailEntry::Link { label, .. }
            | TrailEntry::Term { label } => label,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            TrailEntry::Home { href, .. } | TrailEntry::Link { href, .. } => Some(href.as_str()),
            TrailEntry::Term { .. } => None,
        }
    }
}

/// A resolved breadcrumb trail ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    /// Which input the links were taken from
    pub source: SourceKind,

    /// Whether the collection override was applied
    pub collection: bool,

    /// Entries in display order
    pub entries: Vec<TrailEntry>,
}

impl Trail {
    /// Navigation links only (no home link, no term)
    pub fn links(&self) -> impl Iterator<Item = &TrailEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, TrailEntry::Link { .. }))
    }

    /// Get the trailing term, if any
    pub fn term(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            TrailEntry::Term { label } => Some(label.as_str()),
            _ => None,
        })
    }

    /// Get the formatted path string
    pub fn path(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

//! navtrail_core - Core library for breadcrumb trails
//!
//! This crate turns hierarchical category paths, or a pre-built navigation
//! list, into an ordered trail of links suitable for rendering as
//! breadcrumbs.
//!
//! # Features
//!
//! - **Slugs**: Unicode labels normalized into lowercase, diacritic-free,
//!   hyphen-delimited URL segments.
//! - **Source Priority**: Explicit breadcrumb, then category tree, then raw
//!   category paths, modelled as a tagged [`NavigationSource`].
//! - **Derivation**: Raw category paths ordered shortest first and mapped to
//!   `{ name, href }` items.
//! - **Collection Override**: Product-cluster facet selections collapse the
//!   trail into a single "Shop the Collection" link.
//! - **Multiple Output Formats**: JSON, YAML, ANSI-colored and plain text.
//!
//! # Example
//!
//! ```rust
//! use navtrail_core::{build_trail, format_output, BreadcrumbRequest, OutputFormat, RenderContext};
//!
//! let request = BreadcrumbRequest::from_categories(["/Department", "/Department/Category"]);
//! let trail = build_trail(&request, &RenderContext::default());
//!
//! let summary = format_output(trail.as_ref(), OutputFormat::Summary).unwrap();
//! assert_eq!(summary, "Home / Department / Category");
//! ```

pub mod config;
pub mod engine;
pub mod input;
pub mod models;
pub mod output;
pub mod resolver;
pub mod slug;

// Re-exports for convenience
pub use config::{CollectionStyle, ConfigError, TrailConfig};
pub use engine::{build_trail, is_visible, TrailBuilder};
pub use input::{load_document, parse_document, InputError, InputFormat, RequestParser};
pub use models::{
    BreadcrumbRequest, NavigationItem, NavigationSource, RenderContext, SelectedFacet, SourceKind,
    Trail, TrailDocument, TrailEntry,
};
pub use output::{format_output, FormatError, OutputFormat};
pub use resolver::{categories_to_navigation, decode_name, is_collection, resolve};
pub use slug::slugify;

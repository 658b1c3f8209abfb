//! Trail engine module
//!
//! This module turns a breadcrumb request and its render context into the
//! final renderable trail: it applies the visibility gate, the collection
//! override, the home link and the trailing term.

use crate::config::{CollectionStyle, ConfigError, TrailConfig};
use crate::models::{BreadcrumbRequest, NavigationItem, RenderContext, Trail, TrailEntry};
use crate::resolver::{decode_name, is_collection, resolve};
use tracing::debug;

/// Builds breadcrumb trails according to a [`TrailConfig`]
#[derive(Debug, Clone, Default)]
pub struct TrailBuilder {
    config: TrailConfig,
}

impl TrailBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Build the trail for a request.
    ///
    /// Returns `None` when nothing should be rendered: the resolved list is
    /// empty, or the device is mobile and the request does not opt in.
    pub fn build(&self, request: &BreadcrumbRequest, context: &RenderContext) -> Option<Trail> {
        let source = request.source();
        let items = resolve(&source);

        if !is_visible(&items, request.show_on_mobile, context.is_mobile) {
            debug!(
                items = items.len(),
                is_mobile = context.is_mobile,
                show_on_mobile = request.show_on_mobile,
                "trail suppressed"
            );
            return None;
        }

        let collection = is_collection(
            context.selected_facets.as_deref(),
            &self.config.collection_marker,
        );

        let mut entries = Vec::with_capacity(items.len() + 2);

        if self.config.include_home {
            entries.push(TrailEntry::Home {
                label: self.config.home_label.clone(),
                href: self.config.home_href.clone(),
            });
        }

        if collection {
            debug!(
                current_path = %context.current_path,
                style = ?self.config.collection_style,
                "collection override active"
            );
            entries.extend(self.collection_links(&items, &context.current_path));
        } else {
            entries.extend(navigation_links(&items));
        }

        if let Some(term) = request.term.as_deref().filter(|t| !t.is_empty()) {
            entries.push(TrailEntry::Term {
                label: term.to_string(),
            });
        }

        Some(Trail {
            source: source.kind(),
            collection,
            entries,
        })
    }

    fn collection_links(&self, items: &[NavigationItem], current_path: &str) -> Vec<TrailEntry> {
        let count = match self.config.collection_style {
            CollectionStyle::Collapse => 1,
            CollectionStyle::Relabel => items.len(),
        };

        (1..=count)
            .map(|position| TrailEntry::Link {
                position,
                label: self.config.collection_label.clone(),
                href: current_path.to_string(),
            })
            .collect()
    }
}

fn navigation_links(items: &[NavigationItem]) -> impl Iterator<Item = TrailEntry> + '_ {
    items.iter().enumerate().map(|(i, item)| TrailEntry::Link {
        position: i + 1,
        label: decode_name(&item.name),
        href: item.href.clone(),
    })
}

/// Visibility gate evaluated before anything is rendered
pub fn is_visible(items: &[NavigationItem], show_on_mobile: bool, is_mobile: bool) -> bool {
    !items.is_empty() && (show_on_mobile || !is_mobile)
}

/// Build a trail with the default configuration
pub fn build_trail(request: &BreadcrumbRequest, context: &RenderContext) -> Option<Trail> {
    TrailBuilder::default().build(request, context)
}

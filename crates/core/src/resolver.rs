//! Navigation resolution
//!
//! Resolves the active [`NavigationSource`] into an ordered list of
//! navigation items, deriving links from raw category paths when no
//! pre-built list is available.

use crate::models::{NavigationItem, NavigationSource, SelectedFacet};
use crate::slug::slugify;
use percent_encoding::percent_decode_str;
use tracing::{debug, trace};

/// Suffix appended to top-level (department) category links
const DEPARTMENT_SUFFIX: &str = "/d";

/// Resolve a navigation source into its ordered item list.
///
/// Pre-built lists are returned verbatim; raw categories are derived with
/// [`categories_to_navigation`].
pub fn resolve(source: &NavigationSource) -> Vec<NavigationItem> {
    debug!(source = source.kind().label(), "resolving navigation");

    match source {
        NavigationSource::ExplicitBreadcrumb(items) | NavigationSource::CategoryTree(items) => {
            items.clone()
        }
        NavigationSource::RawCategories(categories) => categories_to_navigation(categories),
    }
}

/// Derive navigation items from slash-delimited category paths.
///
/// Paths are ordered by string length, shortest first, as a stand-in for
/// depth. The sort is stable so equal-length paths keep their input order.
/// Each path yields one item named after its last segment, linking to the
/// slug of the whole path; single-segment paths get the `/d` suffix.
pub fn categories_to_navigation<S: AsRef<str>>(categories: &[S]) -> Vec<NavigationItem> {
    let mut sorted: Vec<&str> = categories.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|category| category.encode_utf16().count());

    sorted.into_iter().map(category_to_item).collect()
}

fn category_to_item(category: &str) -> NavigationItem {
    let stripped = strip_slashes(category);
    let segments: Vec<&str> = stripped.split('/').collect();

    let name = segments.last().copied().unwrap_or_default();
    let suffix = if segments.len() == 1 {
        DEPARTMENT_SUFFIX
    } else {
        ""
    };
    let href = format!("/{}{}", slugify(stripped), suffix);

    trace!(category, name, href = %href, "derived navigation item");

    NavigationItem::new(name, href)
}

/// Strip at most one leading and one trailing `/`
fn strip_slashes(category: &str) -> &str {
    let category = category.strip_prefix('/').unwrap_or(category);
    category.strip_suffix('/').unwrap_or(category)
}

/// Decode a percent-encoded display name.
///
/// Follows `decodeURIComponent`: every `%` must start a two-digit hex escape
/// and the decoded bytes must be UTF-8. Anything else falls back to the raw
/// name; this never fails.
pub fn decode_name(name: &str) -> String {
    match try_decode(name) {
        Some(decoded) => decoded,
        None => {
            debug!(name, "malformed percent-encoding, using raw name");
            name.to_string()
        }
    }
}

fn try_decode(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(name)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Check whether the selected facets put the page in collection mode.
///
/// True when any facet key, lowercased, contains `marker`.
pub fn is_collection(facets: Option<&[SelectedFacet]>, marker: &str) -> bool {
    let marker = marker.to_lowercase();
    facets.is_some_and(|facets| {
        facets
            .iter()
            .any(|facet| facet.key.to_lowercase().contains(&marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COLLECTION_MARKER;

    #[test]
    fn test_department_and_category() {
        let items = categories_to_navigation(&["/Department/Category", "/Department"]);

        assert_eq!(
            items,
            vec![
                NavigationItem::new("Department", "/department/d"),
                NavigationItem::new("Category", "/department/category"),
            ]
        );
    }

    #[test]
    fn test_single_department() {
        let items = categories_to_navigation(&["/Shoes"]);
        assert_eq!(items, vec![NavigationItem::new("Shoes", "/shoes/d")]);
    }

    #[test]
    fn test_nested_path_keeps_inner_slashes() {
        let items = categories_to_navigation(&["/Shoes/Running/"]);
        assert_eq!(items, vec![NavigationItem::new("Running", "/shoes/running")]);
    }

    #[test]
    fn test_slug_applies_to_whole_path() {
        let items = categories_to_navigation(&["/Home Décor/Wall Art/"]);
        assert_eq!(items[0].name, "Wall Art");
        assert_eq!(items[0].href, "/home-decor/wall-art");
    }

    #[test]
    fn test_equal_lengths_keep_input_order() {
        let items = categories_to_navigation(&["/Bbb/Ccc", "/Aaa/Ddd", "/Aaa"]);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Aaa", "Ccc", "Ddd"]);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // utf-16: 7, 6, 5; chars: 7, 4, 5; bytes: 7, 10, 9
        let items = categories_to_navigation(&["/abcdef", "/😀😀x", "/éééé"]);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["éééé", "😀😀x", "abcdef"]);
    }

    #[test]
    fn test_length_is_not_a_tree_sort() {
        // a long department name sorts after a short nested path
        let items = categories_to_navigation(&["/Electronics", "/A/B"]);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "Electronics"]);
    }

    #[test]
    fn test_strips_only_one_slash() {
        let items = categories_to_navigation(&["//Shoes//"]);
        assert_eq!(items[0].name, "");
        assert_eq!(items[0].href, "//shoes/");
    }

    #[test]
    fn test_slash_only_path() {
        let items = categories_to_navigation(&["/"]);
        assert_eq!(items, vec![NavigationItem::new("", "//d")]);
    }

    #[test]
    fn test_name_is_not_slugified() {
        let items = categories_to_navigation(&["/Café%20Noir"]);
        assert_eq!(items[0].name, "Café%20Noir");
        assert_eq!(items[0].href, "/cafe%20noir/d");
    }

    #[test]
    fn test_resolve_returns_prebuilt_lists_verbatim() {
        let crumb = vec![NavigationItem::new("Any Thing", "/Not/Slugified")];
        let source = NavigationSource::ExplicitBreadcrumb(crumb.clone());
        assert_eq!(resolve(&source), crumb);

        let source = NavigationSource::CategoryTree(crumb.clone());
        assert_eq!(resolve(&source), crumb);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let source = NavigationSource::RawCategories(vec!["/A/B".into(), "/A".into()]);
        assert_eq!(resolve(&source), resolve(&source));
    }

    #[test]
    fn test_decode_name() {
        assert_eq!(decode_name("Caf%C3%A9"), "Café");
        assert_eq!(decode_name("Men%27s%20Shoes"), "Men's Shoes");
        assert_eq!(decode_name("Plain"), "Plain");
    }

    #[test]
    fn test_decode_name_malformed_falls_back() {
        assert_eq!(decode_name("%"), "%");
        assert_eq!(decode_name("100%"), "100%");
        assert_eq!(decode_name("%zz"), "%zz");
        assert_eq!(decode_name("50% off %C3%A9"), "50% off %C3%A9");
        // valid escapes, invalid UTF-8
        assert_eq!(decode_name("%FF%FE"), "%FF%FE");
        assert_eq!(decode_name("%C3"), "%C3");
    }

    #[test]
    fn test_is_collection() {
        let facets = vec![SelectedFacet::new("c"), SelectedFacet::new("ProductClusterIds")];
        assert!(is_collection(Some(facets.as_slice()), DEFAULT_COLLECTION_MARKER));

        let facets = vec![SelectedFacet::new("productClusterSearchableIds")];
        assert!(is_collection(Some(facets.as_slice()), DEFAULT_COLLECTION_MARKER));

        let facets = vec![SelectedFacet::new("brand")];
        assert!(!is_collection(Some(facets.as_slice()), DEFAULT_COLLECTION_MARKER));
        assert!(!is_collection(Some(&[][..]), DEFAULT_COLLECTION_MARKER));
        assert!(!is_collection(None, DEFAULT_COLLECTION_MARKER));
    }
}

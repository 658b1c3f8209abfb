//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for breadcrumb trails.

use crate::models::{Trail, TrailEntry};
use colored::Colorize;

/// Format a trail as ANSI colored text
pub fn format_ansi(trail: &Trail) -> String {
    let separator = format!(" {} ", "/".dimmed());

    let mut output = trail
        .entries
        .iter()
        .map(format_entry_ansi)
        .collect::<Vec<_>>()
        .join(&separator);

    if trail.collection {
        output.push_str(&format!("  {}", "(collection)".yellow()));
    }

    output
}

/// Format a single entry, links followed by their dimmed target
fn format_entry_ansi(entry: &TrailEntry) -> String {
    match entry {
        TrailEntry::Home { label, href } => {
            format!("{} {}", label.bright_blue().bold(), href_hint(href))
        }
        TrailEntry::Link { label, href, .. } => {
            format!("{} {}", label.cyan().bold(), href_hint(href))
        }
        TrailEntry::Term { label } => label.white().to_string(),
    }
}

fn href_hint(href: &str) -> String {
    format!("({})", href).dimmed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceKind;

    fn sample(collection: bool) -> Trail {
        Trail {
            source: SourceKind::RawCategories,
            collection,
            entries: vec![
                TrailEntry::Home {
                    label: "Home".to_string(),
                    href: "/".to_string(),
                },
                TrailEntry::Link {
                    position: 1,
                    label: "Shoes".to_string(),
                    href: "/shoes/d".to_string(),
                },
                TrailEntry::Term {
                    label: "boots".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_format_ansi_basic() {
        let output = format_ansi(&sample(false));
        assert!(output.contains("Home"));
        assert!(output.contains("Shoes"));
        assert!(output.contains("/shoes/d"));
        assert!(output.contains("boots"));
        assert!(!output.contains("(collection)"));
    }

    #[test]
    fn test_format_ansi_collection_marker() {
        let output = format_ansi(&sample(true));
        assert!(output.contains("(collection)"));
    }
}

//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI and one-line summary
//! output of breadcrumb trails. A suppressed trail (`None`) renders as `null`
//! in the structured formats and as an empty string otherwise.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::format_ansi;
pub use json::format_json;
pub use yaml::format_yaml;

use crate::models::Trail;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format
    #[default]
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// Plain one-line trail
    Summary,
}

/// Format a trail in the specified format
pub fn format_output(trail: Option<&Trail>, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(trail),
        OutputFormat::Yaml => format_yaml(trail),
        OutputFormat::Ansi => Ok(trail.map(format_ansi).unwrap_or_default()),
        OutputFormat::Summary => Ok(trail.map(format_summary).unwrap_or_default()),
    }
}

/// Format as a plain `Home / Department / Category` line
pub fn format_summary(trail: &Trail) -> String {
    trail.path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_trail;
    use crate::models::{BreadcrumbRequest, RenderContext};

    fn sample() -> Trail {
        let request =
            BreadcrumbRequest::from_categories(["/Shoes", "/Shoes/Running"]).with_term("trail");
        build_trail(&request, &RenderContext::default()).unwrap()
    }

    #[test]
    fn test_format_summary() {
        let output = format_output(Some(&sample()), OutputFormat::Summary).unwrap();
        assert_eq!(output, "Home / Shoes / Running / trail");
    }

    #[test]
    fn test_suppressed_trail() {
        assert_eq!(format_output(None, OutputFormat::Json).unwrap(), "null");
        assert_eq!(format_output(None, OutputFormat::Yaml).unwrap().trim(), "null");
        assert_eq!(format_output(None, OutputFormat::Ansi).unwrap(), "");
        assert_eq!(format_output(None, OutputFormat::Summary).unwrap(), "");
    }
}

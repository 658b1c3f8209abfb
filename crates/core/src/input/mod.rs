//! Input module for breadcrumb request documents
//!
//! This module loads [`TrailDocument`]s from JSON or YAML, picking the
//! parser from the file extension or an explicit format.

mod json;
mod yaml;

pub use json::JsonParser;
pub use yaml::YamlParser;

use crate::models::TrailDocument;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Input errors
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid YAML document: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Cannot determine input format for: {0}")]
    UnknownFormat(String),
}

/// Supported input document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            _ => None,
        }
    }

    /// Determine format from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Trait for document parsers
pub trait RequestParser: Send + Sync {
    /// Get the format this parser handles
    fn format(&self) -> InputFormat;

    /// Parse a document from source text
    fn parse(&self, source: &str) -> Result<TrailDocument, InputError>;
}

/// Create a parser for the specified format
pub fn create_parser(format: InputFormat) -> Box<dyn RequestParser> {
    match format {
        InputFormat::Json => Box::new(JsonParser),
        InputFormat::Yaml => Box::new(YamlParser),
    }
}

/// Parse a document from source text
pub fn parse_document(source: &str, format: InputFormat) -> Result<TrailDocument, InputError> {
    create_parser(format).parse(source)
}

/// Load a document from disk.
///
/// The format is taken from `format` when given, otherwise from the file
/// extension.
pub fn load_document(
    path: &Path,
    format: Option<InputFormat>,
) -> Result<TrailDocument, InputError> {
    let format = format
        .or_else(|| InputFormat::from_path(path))
        .ok_or_else(|| InputError::UnknownFormat(path.display().to_string()))?;

    debug!(path = %path.display(), ?format, "loading trail document");

    let source = fs::read_to_string(path)?;
    parse_document(&source, format)
}

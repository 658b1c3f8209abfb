//! YAML document parser

use crate::input::{InputError, InputFormat, RequestParser};
use crate::models::TrailDocument;

/// Parses camelCase YAML request documents
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl RequestParser for YamlParser {
    fn format(&self) -> InputFormat {
        InputFormat::Yaml
    }

    fn parse(&self, source: &str) -> Result<TrailDocument, InputError> {
        serde_yaml::from_str(source).map_err(InputError::from)
    }
}

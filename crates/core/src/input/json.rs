//! JSON document parser

use crate::input::{InputError, InputFormat, RequestParser};
use crate::models::TrailDocument;

/// Parses camelCase JSON request documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl RequestParser for JsonParser {
    fn format(&self) -> InputFormat {
        InputFormat::Json
    }

    fn parse(&self, source: &str) -> Result<TrailDocument, InputError> {
        serde_json::from_str(source).map_err(InputError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NavigationItem, SelectedFacet};

    #[test]
    fn test_parse_json() {
        let doc = JsonParser
            .parse(
                r#"{
                    "breadcrumb": [{"name": "Men", "href": "/men"}],
                    "term": "shirts",
                    "context": {
                        "selectedFacets": [{"key": "productClusterIds", "value": "140"}],
                        "currentPath": "/collection"
                    }
                }"#,
            )
            .unwrap();

        assert_eq!(
            doc.request.breadcrumb,
            Some(vec![NavigationItem::new("Men", "/men")])
        );
        assert_eq!(
            doc.context.selected_facets.as_deref().map(|f| f[0].key.as_str()),
            Some("productClusterIds")
        );
        assert_eq!(
            doc.context.selected_facets.unwrap()[0],
            SelectedFacet {
                key: "productClusterIds".to_string(),
                value: Some("140".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = JsonParser.parse("{ not json");
        assert!(matches!(result, Err(InputError::JsonError(_))));

        let result = JsonParser.parse(r#"{"categories": "/Shoes"}"#);
        assert!(result.is_err());
    }
}

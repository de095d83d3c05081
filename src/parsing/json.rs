use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::core::resource::{DepthRange, Resource};
use crate::core::types::{Dimension, Method};
use crate::parsing::ParseError;

/// Dataset version this parser understands
pub const DATA_VERSION: &str = "1.0";

/// Serializable dataset format
#[derive(Debug, Deserialize)]
struct ResourceData {
    #[serde(default)]
    version: Option<String>,
    resources: Vec<ResourceRecord>,
}

/// One resource definition as written in a JSON dataset.
///
/// Unlike table rows, JSON records carry explicit depth bounds and may name
/// an acquisition method other than mining.
#[derive(Debug, Deserialize)]
struct ResourceRecord {
    name: String,
    location: String,
    depth_range: DepthBounds,
    required_tool: String,
    #[serde(default)]
    method: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DepthBounds {
    min: i32,
    max: i32,
}

/// Parse a JSON resource dataset from a file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_json_file(path: &Path) -> Result<Vec<Resource>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_json_text(&content)
}

/// Parse a JSON resource dataset.
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON or missing fields,
/// `ParseError::InvalidDepthRange` if a record's bounds are out of order, or
/// `ParseError::InvalidFormat` if the dataset defines no resources.
pub fn parse_json_text(text: &str) -> Result<Vec<Resource>, ParseError> {
    let data: ResourceData = serde_json::from_str(text)?;

    // Version check (warn but don't fail)
    if let Some(version) = &data.version {
        if version != DATA_VERSION {
            warn!(
                expected = DATA_VERSION,
                found = %version,
                "Dataset version mismatch"
            );
        }
    }

    if data.resources.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No resources defined in dataset".to_string(),
        ));
    }

    let mut resources = Vec::with_capacity(data.resources.len());
    for record in data.resources {
        let bounds = DepthRange::new(record.depth_range.min, record.depth_range.max);
        if !bounds.is_ordered() {
            return Err(ParseError::InvalidDepthRange {
                name: record.name,
                min: bounds.min,
                max: bounds.max,
            });
        }

        let method = record
            .method
            .as_deref()
            .map_or(Method::Mining, Method::parse);

        resources.push(
            Resource::new(
                record.name,
                Dimension::parse(&record.location),
                bounds,
                record.required_tool,
            )
            .with_method(method),
        );
    }

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_text() {
        let json = r#"{
            "version": "1.0",
            "resources": [
                {
                    "name": "Diamond Ore",
                    "location": "Overworld",
                    "depth_range": { "min": 7, "max": 17 },
                    "required_tool": "Iron Pickaxe"
                },
                {
                    "name": "Iron Ingot",
                    "location": "Overworld",
                    "depth_range": { "min": -24, "max": 54 },
                    "required_tool": "Stone Pickaxe",
                    "method": "Smelting"
                }
            ]
        }"#;

        let resources = parse_json_text(json).unwrap();
        assert_eq!(resources.len(), 2);

        assert_eq!(resources[0].name, "Diamond Ore");
        assert_eq!(resources[0].depth_range, DepthRange::new(7, 17));
        assert_eq!(resources[0].method, Method::Mining);

        assert_eq!(resources[1].method, Method::Smelting);
    }

    #[test]
    fn test_parse_json_no_version() {
        let json = r#"{
            "resources": [
                {
                    "name": "Coal Ore",
                    "location": "Overworld",
                    "depth_range": { "min": 91, "max": 101 },
                    "required_tool": "Wooden Pickaxe"
                }
            ]
        }"#;

        let resources = parse_json_text(json).unwrap();
        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn test_parse_json_inverted_bounds() {
        let json = r#"{
            "resources": [
                {
                    "name": "Diamond Ore",
                    "location": "Overworld",
                    "depth_range": { "min": 17, "max": 7 },
                    "required_tool": "Iron Pickaxe"
                }
            ]
        }"#;

        let err = parse_json_text(json).unwrap_err();
        assert!(matches!(err, ParseError::InvalidDepthRange { .. }));
    }

    #[test]
    fn test_parse_json_missing_field() {
        let json = r#"{ "resources": [ { "name": "Diamond Ore" } ] }"#;
        assert!(matches!(
            parse_json_text(json).unwrap_err(),
            ParseError::Json(_)
        ));
    }

    #[test]
    fn test_parse_json_empty_dataset() {
        let json = r#"{ "resources": [] }"#;
        assert!(matches!(
            parse_json_text(json).unwrap_err(),
            ParseError::InvalidFormat(_)
        ));
    }
}

use std::path::Path;

use crate::core::resource::{DepthRange, Resource};
use crate::core::types::Dimension;
use crate::parsing::ParseError;

/// Positions of the required columns within a header row
struct ColumnMap {
    name: usize,
    dimension: usize,
    y_level: usize,
    tool: usize,
}

impl ColumnMap {
    /// Minimum number of fields a data row must have
    fn width(&self) -> usize {
        self.name.max(self.dimension).max(self.y_level).max(self.tool) + 1
    }
}

fn find_column(header: &[String], accepted: &[&str]) -> Option<usize> {
    header.iter().position(|h| accepted.contains(&h.as_str()))
}

fn resolve_columns(fields: &[&str]) -> Result<ColumnMap, ParseError> {
    let header: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();

    let name = find_column(&header, &["ore name", "resource name", "name", "ore", "resource"])
        .ok_or(ParseError::MissingColumn("ore name"))?;
    let dimension = find_column(&header, &["dimension", "location", "biome"])
        .ok_or(ParseError::MissingColumn("dimension"))?;
    let y_level = find_column(&header, &["y level", "y-level", "y"])
        .ok_or(ParseError::MissingColumn("y level"))?;
    let tool = find_column(&header, &["required pickaxe", "required tool", "tool", "pickaxe"])
        .ok_or(ParseError::MissingColumn("required tool"))?;

    Ok(ColumnMap {
        name,
        dimension,
        y_level,
        tool,
    })
}

/// Parse a delimited resource table from a file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_table_file(path: &Path, delimiter: char) -> Result<Vec<Resource>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content, delimiter)
}

/// Parse delimited resource table text.
///
/// The first non-empty, non-comment line is the header. Each data row yields
/// one [`Resource`] in row order, with `depth_range` derived as ±5 around the
/// reported Y level and the method fixed to mining.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if a required column is absent,
/// `ParseError::InvalidYLevel` for a non-integer Y level,
/// or `ParseError::InvalidFormat` for short rows or an empty table. The whole
/// load fails on the first bad row.
pub fn parse_table_text(text: &str, delimiter: char) -> Result<Vec<Resource>, ParseError> {
    let mut columns: Option<ColumnMap> = None;
    let mut resources = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        let Some(cols) = &columns else {
            columns = Some(resolve_columns(&fields)?);
            continue;
        };

        if fields.len() < cols.width() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected at least {}",
                fields.len(),
                cols.width()
            )));
        }

        let y_level: i32 = fields[cols.y_level].parse().map_err(|_| {
            ParseError::InvalidYLevel {
                line: line_num,
                value: fields[cols.y_level].to_string(),
            }
        })?;

        resources.push(Resource::new(
            fields[cols.name],
            Dimension::parse(fields[cols.dimension]),
            DepthRange::around(y_level),
            fields[cols.tool],
        ));
    }

    if columns.is_none() {
        return Err(ParseError::InvalidFormat(
            "No header row found in file".to_string(),
        ));
    }

    if resources.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No resource rows found in file".to_string(),
        ));
    }

    Ok(resources)
}

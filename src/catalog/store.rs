use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::resource::Resource;
use crate::parsing::{json, table, ParseError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Resource file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read resource file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The in-memory resource set with a case-insensitive name index
#[derive(Debug)]
pub struct ResourceCatalog {
    /// All loaded resources, in dataset order
    resources: Vec<Resource>,

    /// Index: lowercased name -> indices of resources with that name.
    /// Names are expected to be unique but duplicates are kept so lookups
    /// can report them as ambiguous.
    name_to_indices: HashMap<String, Vec<usize>>,
}

impl ResourceCatalog {
    /// Build a catalog from already-parsed resources
    #[must_use]
    pub fn from_resources(resources: Vec<Resource>) -> Self {
        let mut name_to_indices: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, resource) in resources.iter().enumerate() {
            name_to_indices
                .entry(resource.name.to_lowercase())
                .or_default()
                .push(index);
        }

        Self {
            resources,
            name_to_indices,
        }
    }

    /// Load the embedded default dataset
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if the embedded data is malformed. The
    /// build script validates the file, so this only fails for builds that
    /// bypassed it.
    pub fn load_embedded() -> Result<Self, LoadError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_DATA: &str = include_str!("../../data/ores.csv");
        Ok(Self::from_resources(table::parse_table_text(
            EMBEDDED_DATA,
            ',',
        )?))
    }

    /// Load a dataset from a file, dispatching on its extension:
    /// `.json` as a JSON dataset, `.tsv` as tab-delimited, anything else as
    /// comma-delimited.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` if the path does not exist, or
    /// `LoadError::Parse` if the content is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let resources = match extension.as_deref() {
            Some("json") => json::parse_json_file(path)?,
            Some("tsv") => table::parse_table_file(path, '\t')?,
            _ => table::parse_table_file(path, ',')?,
        };

        Ok(Self::from_resources(resources))
    }

    /// All resources whose name equals `name` ignoring case
    #[must_use]
    pub fn find_exact(&self, name: &str) -> Vec<&Resource> {
        self.name_to_indices
            .get(&name.to_lowercase())
            .map(|indices| indices.iter().map(|&i| &self.resources[i]).collect())
            .unwrap_or_default()
    }

    /// All loaded resources, in dataset order
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Names of all loaded resources, in dataset order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.name.as_str())
    }

    /// Number of resources in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::DepthRange;
    use crate::core::types::Dimension;

    fn make_resource(name: &str) -> Resource {
        Resource::new(
            name,
            Dimension::Overworld,
            DepthRange::around(0),
            "Stone Pickaxe",
        )
    }

    #[test]
    fn test_load_embedded() {
        let catalog = ResourceCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.find_exact("diamond ore").len(), 1);
    }

    #[test]
    fn test_find_exact_case_insensitive() {
        let catalog = ResourceCatalog::from_resources(vec![make_resource("Diamond Ore")]);

        assert_eq!(catalog.find_exact("diamond ore").len(), 1);
        assert_eq!(catalog.find_exact("DIAMOND ORE").len(), 1);
        assert!(catalog.find_exact("diamond").is_empty());
    }

    #[test]
    fn test_find_exact_duplicates() {
        let catalog = ResourceCatalog::from_resources(vec![
            make_resource("Diamond Ore"),
            make_resource("diamond ore"),
        ]);

        assert_eq!(catalog.find_exact("Diamond Ore").len(), 2);
    }

    #[test]
    fn test_names_preserve_order() {
        let catalog = ResourceCatalog::from_resources(vec![
            make_resource("Coal Ore"),
            make_resource("Iron Ore"),
            make_resource("Diamond Ore"),
        ]);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Coal Ore", "Iron Ore", "Diamond Ore"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ResourceCatalog::load_from_file(Path::new("/no/such/ores.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }
}

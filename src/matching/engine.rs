use crate::catalog::store::ResourceCatalog;
use crate::core::resource::Resource;

/// Fixed reply when a query matches more than one resource
pub const AMBIGUOUS_MESSAGE: &str = "Multiple resources found: Be more specific";

/// Fixed reply when a query matches nothing
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";

/// Configuration for the lookup engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Suffixes removed from both query and candidate names before the
    /// fuzzy substring pass
    pub strip_suffixes: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strip_suffixes: vec![" ore".to_string()],
        }
    }
}

/// Result of resolving a query against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    /// Exactly one resource matched
    Found(&'a Resource),

    /// Several resources matched; candidates in catalog order
    Ambiguous(Vec<&'a Resource>),

    /// Nothing matched
    NotFound,
}

/// The query resolution engine
pub struct LookupEngine<'a> {
    catalog: &'a ResourceCatalog,
    config: MatchingConfig,
}

impl<'a> LookupEngine<'a> {
    /// Create a new lookup engine with default configuration
    pub fn new(catalog: &'a ResourceCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new lookup engine with custom configuration
    pub fn with_config(catalog: &'a ResourceCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Lowercase a name and remove every configured suffix occurrence
    fn normalize(&self, name: &str) -> String {
        let mut normalized = name.to_lowercase();
        for suffix in &self.config.strip_suffixes {
            normalized = normalized.replace(suffix.as_str(), "");
        }
        normalized
    }

    /// Resolve a query to zero, one, or many resources.
    ///
    /// The exact pass short-circuits the fuzzy pass: a query that names a
    /// resource in full (ignoring case) never falls through to substring
    /// matching. Duplicate exact hits are ambiguous, same as duplicate fuzzy
    /// hits.
    pub fn lookup(&self, query: &str) -> LookupOutcome<'a> {
        let exact = self.catalog.find_exact(query);
        match exact.len() {
            1 => return LookupOutcome::Found(exact[0]),
            n if n > 1 => return LookupOutcome::Ambiguous(exact),
            _ => {}
        }

        let needle = self.normalize(query);
        let matches: Vec<&Resource> = self
            .catalog
            .resources()
            .iter()
            .filter(|r| self.normalize(&r.name).contains(&needle))
            .collect();

        match matches.len() {
            0 => LookupOutcome::NotFound,
            1 => LookupOutcome::Found(matches[0]),
            _ => LookupOutcome::Ambiguous(matches),
        }
    }

    /// Render an outcome as the user-facing reply string
    #[must_use]
    pub fn render(outcome: &LookupOutcome<'_>) -> String {
        match outcome {
            LookupOutcome::Found(resource) => resource.describe(),
            LookupOutcome::Ambiguous(_) => AMBIGUOUS_MESSAGE.to_string(),
            LookupOutcome::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Resolve a query and render the reply in one step
    #[must_use]
    pub fn describe(&self, query: &str) -> String {
        Self::render(&self.lookup(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::{DepthRange, Resource};
    use crate::core::types::Dimension;

    fn make_catalog() -> ResourceCatalog {
        ResourceCatalog::from_resources(vec![
            Resource::new(
                "Diamond Ore",
                Dimension::Overworld,
                DepthRange::around(12),
                "Iron Pickaxe",
            ),
            Resource::new(
                "Gold Ore",
                Dimension::Overworld,
                DepthRange::around(-16),
                "Iron Pickaxe",
            ),
            Resource::new(
                "Nether Gold Ore",
                Dimension::Nether,
                DepthRange::around(64),
                "Wooden Pickaxe",
            ),
        ])
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        // "gold ore" is a substring of "Nether Gold Ore" too, but the exact
        // pass resolves it first
        let outcome = engine.lookup("gold ore");
        match outcome {
            LookupOutcome::Found(r) => assert_eq!(r.name, "Gold Ore"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        assert!(matches!(
            engine.lookup("DIAMOND ORE"),
            LookupOutcome::Found(_)
        ));
    }

    #[test]
    fn test_fuzzy_suffix_stripped_match() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        match engine.lookup("diamond") {
            LookupOutcome::Found(r) => assert_eq!(r.name, "Diamond Ore"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_substring_match() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        match engine.lookup("gold") {
            LookupOutcome::Ambiguous(candidates) => {
                let names: Vec<&str> = candidates.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["Gold Ore", "Nether Gold Ore"]);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_duplicates_are_ambiguous() {
        let catalog = ResourceCatalog::from_resources(vec![
            Resource::new(
                "Diamond Ore",
                Dimension::Overworld,
                DepthRange::around(12),
                "Iron Pickaxe",
            ),
            Resource::new(
                "Diamond Ore",
                Dimension::Overworld,
                DepthRange::around(-59),
                "Iron Pickaxe",
            ),
        ]);
        let engine = LookupEngine::new(&catalog);

        assert!(matches!(
            engine.lookup("diamond ore"),
            LookupOutcome::Ambiguous(_)
        ));
    }

    #[test]
    fn test_not_found() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        assert_eq!(engine.lookup("netherite"), LookupOutcome::NotFound);
        assert_eq!(engine.describe("netherite"), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_describe_found() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        assert_eq!(
            engine.describe("diamond"),
            "Diamond Ore can be found in the Overworld between Y-levels 7 and 17. \
             It requires a Iron Pickaxe and can be obtained by Mining."
        );
    }

    #[test]
    fn test_describe_ambiguous() {
        let catalog = make_catalog();
        let engine = LookupEngine::new(&catalog);

        assert_eq!(engine.describe("gold"), AMBIGUOUS_MESSAGE);
    }

    #[test]
    fn test_custom_suffix_list() {
        let catalog = ResourceCatalog::from_resources(vec![Resource::new(
            "Oak Log",
            Dimension::Overworld,
            DepthRange::new(60, 320),
            "Axe",
        )]);
        let config = MatchingConfig {
            strip_suffixes: vec![" log".to_string()],
        };
        let engine = LookupEngine::with_config(&catalog, config);

        assert!(matches!(engine.lookup("oak"), LookupOutcome::Found(_)));
    }
}

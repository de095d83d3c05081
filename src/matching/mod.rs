//! Query resolution against the resource catalog.
//!
//! This module provides the lookup functionality:
//!
//! - [`LookupEngine`]: Main entry point for resolving a free-text query
//! - [`LookupOutcome`]: Zero, one, or many matched resources
//! - [`MatchingConfig`]: Suffixes stripped before fuzzy comparison
//!
//! ## Matching Algorithm
//!
//! Queries are resolved in two passes:
//!
//! 1. **Exact pass**: case-insensitive whole-name comparison via the catalog
//!    index. A single hit wins immediately; duplicate names are reported as
//!    ambiguous rather than silently picking one.
//! 2. **Fuzzy pass**: both the query and every candidate name are lowercased
//!    and have known suffixes (" ore" by default) stripped, then matched by
//!    substring containment. One hit wins; several are ambiguous; none is a
//!    miss.
//!
//! ## Example
//!
//! ```rust
//! use ore_guide::catalog::store::ResourceCatalog;
//! use ore_guide::matching::engine::LookupEngine;
//!
//! let catalog = ResourceCatalog::load_embedded().unwrap();
//! let engine = LookupEngine::new(&catalog);
//!
//! println!("{}", engine.describe("diamond"));
//! ```

pub mod engine;

pub use engine::{LookupEngine, LookupOutcome, MatchingConfig};

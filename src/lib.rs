//! # ore-guide
//!
//! A library for looking up where game resources spawn and what tools they
//! require.
//!
//! Players asking "where do I find diamonds?" rarely type the exact record
//! name. `ore-guide` loads a small tabular dataset of ore records and
//! resolves free-text queries against it: exact name matches win outright,
//! and a fuzzy pass strips the " ore" suffix and falls back to substring
//! matching. When several ores fit, it says so instead of guessing.
//!
//! ## Features
//!
//! - **Exact-then-fuzzy matching**: case-insensitive whole names first,
//!   suffix-stripped substrings second
//! - **Ambiguity detection**: multiple hits produce a fixed "be more
//!   specific" reply, never an arbitrary pick
//! - **Fail-fast loading**: a malformed row fails the whole load with the
//!   offending line, there is no partial dataset
//! - **Embedded dataset**: a default ore table is compiled into the binary
//!   and validated at build time
//! - **Multiple formats**: CSV, TSV, and JSON datasets
//!
//! ## Example
//!
//! ```rust
//! use ore_guide::{LookupEngine, ResourceCatalog};
//!
//! // Load the embedded ore dataset
//! let catalog = ResourceCatalog::load_embedded().unwrap();
//!
//! // Resolve a loose query
//! let engine = LookupEngine::new(&catalog);
//! println!("{}", engine.describe("diamond"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Resource dataset storage and indexing
//! - [`core`]: Core data types for resources, depth ranges, and dimensions
//! - [`matching`]: Lookup engine and ambiguity handling
//! - [`parsing`]: Parsers for CSV/TSV tables and JSON datasets
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::store::{LoadError, ResourceCatalog};
pub use core::resource::{DepthRange, Resource};
pub use core::types::{Dimension, Method};
pub use matching::engine::{LookupEngine, LookupOutcome, MatchingConfig};
pub use parsing::ParseError;

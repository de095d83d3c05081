//! Parsers for loading resource datasets from files.
//!
//! This module provides parsers for:
//!
//! - **Delimited tables (CSV/TSV)**: Header + rows, one ore per row, with the
//!   depth range derived from a single reported Y level
//! - **JSON datasets**: Explicit records with `min`/`max` depth bounds and an
//!   optional acquisition method
//!
//! ## Example
//!
//! ```rust
//! use ore_guide::parsing::table::parse_table_text;
//!
//! let csv = "Ore Name,Dimension,Y Level,Required Pickaxe\n\
//!            Diamond Ore,Overworld,12,Iron Pickaxe\n";
//! let resources = parse_table_text(csv, ',').unwrap();
//! assert_eq!(resources[0].name, "Diamond Ore");
//! ```
//!
//! ## Table Columns
//!
//! Required columns are located by case-insensitive header name. Accepted
//! spellings:
//!
//! | Column | Accepted headers |
//! |--------|------------------|
//! | name   | Ore Name, Resource Name, Name, Ore, Resource |
//! | dimension | Dimension, Location, Biome |
//! | Y level | Y Level, Y-Level, Y |
//! | tool   | Required Pickaxe, Required Tool, Tool, Pickaxe |
//!
//! Parsing fails on the first bad row; there is no partial load.

use thiserror::Error;

pub mod json;
pub mod table;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid Y level on line {line}: '{value}'")]
    InvalidYLevel { line: usize, value: String },

    #[error("Invalid depth range for '{name}': min {min} is above max {max}")]
    InvalidDepthRange { name: String, min: i32, max: i32 },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

//! Core data types for resource lookup.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Resource`]: A game resource with its location, depth range, tool
//!   requirement, and acquisition method
//! - [`DepthRange`]: Inclusive Y-level interval, derived as ±5 around a
//!   reported spawn level
//! - [`Dimension`], [`Method`]: Resource metadata types
//!
//! ## Depth Ranges
//!
//! Table datasets report a single Y level per ore; the loader widens it into
//! an interval:
//!
//! | Reported Y | Depth range |
//! |------------|-------------|
//! | 12         | 7 .. 17     |
//! | -59        | -64 .. -54  |
//!
//! JSON datasets carry explicit `min`/`max` bounds instead, which are
//! validated on load.

pub mod resource;
pub mod types;

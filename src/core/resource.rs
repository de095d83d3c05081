use serde::{Deserialize, Serialize};

use crate::core::types::{Dimension, Method};

/// Spread applied around a reported Y level when deriving a depth range
pub const DEPTH_SPREAD: i32 = 5;

/// Inclusive vertical interval where a resource can be found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min: i32,
    pub max: i32,
}

impl DepthRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Derive a range centered on a reported Y level.
    ///
    /// The result always satisfies `min <= max`.
    #[must_use]
    pub fn around(y_level: i32) -> Self {
        Self {
            min: y_level - DEPTH_SPREAD,
            max: y_level + DEPTH_SPREAD,
        }
    }

    /// Check the `min <= max` invariant, which explicit ranges from data
    /// files may violate.
    #[must_use]
    pub fn is_ordered(self) -> bool {
        self.min <= self.max
    }

    #[must_use]
    pub fn contains(self, y_level: i32) -> bool {
        self.min <= y_level && y_level <= self.max
    }
}

/// A game resource with metadata on where and how to obtain it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name (e.g. "Diamond Ore")
    pub name: String,

    /// Biome or dimension where it spawns
    pub location: Dimension,

    /// Inclusive Y-level interval where it can be found
    pub depth_range: DepthRange,

    /// Minimum tool tier needed (e.g. "Iron Pickaxe")
    pub required_tool: String,

    /// How the resource is obtained
    pub method: Method,
}

impl Resource {
    /// Create a resource obtained by mining, the default for table datasets.
    pub fn new(
        name: impl Into<String>,
        location: Dimension,
        depth_range: DepthRange,
        required_tool: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            depth_range,
            required_tool: required_tool.into(),
            method: Method::Mining,
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Render the user-facing description of where and how to find this
    /// resource.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} can be found in the {} between Y-levels {} and {}. \
             It requires a {} and can be obtained by {}.",
            self.name,
            self.location,
            self.depth_range.min,
            self.depth_range.max,
            self.required_tool,
            self.method,
        )
    }
}

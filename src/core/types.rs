use serde::{Deserialize, Serialize};

/// Biome or dimension where a resource spawns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Overworld,
    Nether,
    TheEnd,
    Other(String),
}

impl Dimension {
    /// Parse a dimension from its data-file spelling.
    ///
    /// Unrecognized names are preserved verbatim as [`Dimension::Other`] so
    /// datasets can name arbitrary biomes ("Mountains", "Deep Dark").
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "overworld" => Self::Overworld,
            "nether" | "the nether" => Self::Nether,
            "end" | "the end" => Self::TheEnd,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overworld => write!(f, "Overworld"),
            Self::Nether => write!(f, "Nether"),
            Self::TheEnd => write!(f, "The End"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Technique used to obtain a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Mining,
    Smelting,
    Other(String),
}

impl Method {
    /// Parse an acquisition method from its data-file spelling.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mining" => Self::Mining,
            "smelting" => Self::Smelting,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mining => write!(f, "Mining"),
            Self::Smelting => write!(f, "Smelting"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse_known() {
        assert_eq!(Dimension::parse("Overworld"), Dimension::Overworld);
        assert_eq!(Dimension::parse("overworld"), Dimension::Overworld);
        assert_eq!(Dimension::parse("NETHER"), Dimension::Nether);
        assert_eq!(Dimension::parse("The End"), Dimension::TheEnd);
    }

    #[test]
    fn test_dimension_parse_other_preserves_text() {
        let dim = Dimension::parse(" Mountains ");
        assert_eq!(dim, Dimension::Other("Mountains".to_string()));
        assert_eq!(dim.to_string(), "Mountains");
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::Overworld.to_string(), "Overworld");
        assert_eq!(Dimension::TheEnd.to_string(), "The End");
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("Mining"), Method::Mining);
        assert_eq!(Method::parse("smelting"), Method::Smelting);
        assert_eq!(
            Method::parse("Fishing"),
            Method::Other("Fishing".to_string())
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Mining.to_string(), "Mining");
        assert_eq!(Method::Other("Fishing".to_string()).to_string(), "Fishing");
    }
}

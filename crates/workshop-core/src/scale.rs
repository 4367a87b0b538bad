//! Dataset-size presets.

use thiserror::Error;

/// Named dataset scale controlling the base row count per problem table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// 100 base rows, for quick smoke runs.
    Tiny,
    /// 10,000 base rows (~50MB). The default.
    #[default]
    Small,
    /// 100,000 base rows (~500MB).
    Medium,
    /// 500,000 base rows (~2.5GB).
    Large,
    /// 1,000,000 base rows (~5GB).
    Xlarge,
}

/// Error for scale tokens that don't name a preset.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown scale token: {0}")]
pub struct UnknownScale(pub String);

impl Scale {
    /// Base row count for this scale.
    pub fn base_rows(&self) -> u64 {
        match self {
            Scale::Tiny => 100,
            Scale::Small => 10_000,
            Scale::Medium => 100_000,
            Scale::Large => 500_000,
            Scale::Xlarge => 1_000_000,
        }
    }

    /// Parse a scale token, falling back to [`Scale::Small`] for unknown
    /// tokens.
    pub fn from_token(token: &str) -> Scale {
        token.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Tiny => "tiny",
            Scale::Small => "small",
            Scale::Medium => "medium",
            Scale::Large => "large",
            Scale::Xlarge => "xlarge",
        }
    }
}

impl std::str::FromStr for Scale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiny" => Ok(Scale::Tiny),
            "small" => Ok(Scale::Small),
            "medium" => Ok(Scale::Medium),
            "large" => Ok(Scale::Large),
            "xlarge" => Ok(Scale::Xlarge),
            other => Err(UnknownScale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rows() {
        assert_eq!(Scale::Tiny.base_rows(), 100);
        assert_eq!(Scale::Small.base_rows(), 10_000);
        assert_eq!(Scale::Medium.base_rows(), 100_000);
        assert_eq!(Scale::Large.base_rows(), 500_000);
        assert_eq!(Scale::Xlarge.base_rows(), 1_000_000);
    }

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("tiny".parse(), Ok(Scale::Tiny));
        assert_eq!("xlarge".parse(), Ok(Scale::Xlarge));
    }

    #[test]
    fn test_unknown_token_falls_back_to_small() {
        assert_eq!(Scale::from_token("gigantic"), Scale::Small);
        assert_eq!(Scale::from_token(""), Scale::Small);
        // Tokens are case-sensitive, like the original CLI choices.
        assert_eq!(Scale::from_token("Tiny"), Scale::Small);
    }
}

//! Rule configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Deepest allowed recursion for three-extension legality checks
pub const MAX_THREE_DEPTH: u8 = 4;

/// Which rule family governs a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Black has forbidden moves and needs exactly five
    #[default]
    Renju,
    /// No forbidden moves, five or more wins for both colors
    Freestyle,
}

/// Rule engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub ruleset: RuleSet,
    /// Levels of legality checking applied to the move that turns a three
    /// into a straight four. 0 treats every such move as legal.
    pub three_depth: u8,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            ruleset: RuleSet::Renju,
            three_depth: 2,
        }
    }
}

impl RuleConfig {
    pub fn freestyle() -> Self {
        Self {
            ruleset: RuleSet::Freestyle,
            ..Self::default()
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.three_depth > MAX_THREE_DEPTH {
            return Err(RuleError::Config(format!(
                "three_depth must be <= {MAX_THREE_DEPTH}, got {}",
                self.three_depth
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_renju() {
        let config = RuleConfig::default();
        assert_eq!(config.ruleset, RuleSet::Renju);
        assert_eq!(config.three_depth, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_depth_validation() {
        let config = RuleConfig {
            three_depth: MAX_THREE_DEPTH + 1,
            ..RuleConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "invalid rule configuration: three_depth must be <= 4, got 5"
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RuleConfig = serde_json::from_str(r#"{"ruleset": "freestyle"}"#).unwrap();
        assert_eq!(config, RuleConfig::freestyle());

        let config: RuleConfig = serde_json::from_str(r#"{"three_depth": 0}"#).unwrap();
        assert_eq!(config.ruleset, RuleSet::Renju);
        assert_eq!(config.three_depth, 0);
    }

    #[test]
    fn test_unknown_ruleset_rejected() {
        assert!(serde_json::from_str::<RuleConfig>(r#"{"ruleset": "caro"}"#).is_err());
    }
}

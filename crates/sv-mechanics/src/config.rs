//! System settings shared by every sheet in a game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::rules::RuleVariant;

/// Game-wide settings. Passed explicitly to everything that reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    /// Which threshold and wound rules apply.
    pub variant: RuleVariant,
    /// Subtracted from every threshold.
    pub threshold_modifier: i32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            variant: RuleVariant::House,
            threshold_modifier: 0,
        }
    }
}

impl SystemSettings {
    /// Set the rule variant.
    pub fn with_variant(mut self, variant: RuleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the global threshold modifier.
    pub fn with_threshold_modifier(mut self, modifier: i32) -> Self {
        self.threshold_modifier = modifier;
        self
    }

    /// Parse settings from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidSettings(e.to_string()))
    }

    /// Read settings from a JSON file.
    pub fn from_path(path: &Path) -> MechResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| MechError::InvalidSettings(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = SystemSettings::default();
        assert_eq!(s.variant, RuleVariant::House);
        assert_eq!(s.threshold_modifier, 0);
    }

    #[test]
    fn builder_methods() {
        let s = SystemSettings::default()
            .with_variant(RuleVariant::Standard)
            .with_threshold_modifier(2);
        assert_eq!(s.variant, RuleVariant::Standard);
        assert_eq!(s.threshold_modifier, 2);
    }

    #[test]
    fn from_json_fills_defaults() {
        let s = SystemSettings::from_json_str(r#"{"threshold_modifier": -1}"#).unwrap();
        assert_eq!(s.variant, RuleVariant::House);
        assert_eq!(s.threshold_modifier, -1);

        let s = SystemSettings::from_json_str(r#"{"variant": "standard"}"#).unwrap();
        assert_eq!(s.variant, RuleVariant::Standard);
    }

    #[test]
    fn extended_is_an_alias_for_house() {
        let s = SystemSettings::from_json_str(r#"{"variant": "extended"}"#).unwrap();
        assert_eq!(s.variant, RuleVariant::House);
    }

    #[test]
    fn bad_json_is_reported() {
        let err = SystemSettings::from_json_str(r#"{"variant": "chaos"}"#).unwrap_err();
        assert!(matches!(err, MechError::InvalidSettings(_)));
    }
}

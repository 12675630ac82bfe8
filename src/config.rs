//! Serializable configuration: which files to rewrite and with which rules.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rules::{RenameRule, RuleSet};

/// A serializable specification for a single rename rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleSpec {
    /// Replace every standalone occurrence of an identifier.
    #[serde(rename = "simple")]
    Simple { name: String, replacement: String },

    /// Same, but skip occurrences immediately followed by a suffix.
    #[serde(rename = "guarded")]
    Guarded {
        name: String,
        replacement: String,
        forbidden_suffix: String,
    },
}

impl RuleSpec {
    /// Compiles this spec into an applicable rule.
    pub fn compile(&self) -> Result<RenameRule> {
        match self {
            RuleSpec::Simple { name, replacement } => RenameRule::simple(name, replacement),
            RuleSpec::Guarded {
                name,
                replacement,
                forbidden_suffix,
            } => RenameRule::guarded(name, replacement, forbidden_suffix),
        }
    }
}

/// Configuration for one rename run.
///
/// Can be loaded from a JSON file:
///
/// ```json
/// {
///   "description": "Rename legacy row properties",
///   "files": ["src/components/FeaturesV1.js"],
///   "rules": [
///     { "type": "simple", "name": "paramDesc", "replacement": "description" },
///     { "type": "guarded", "name": "condition",
///       "replacement": "ifCondition", "forbidden_suffix": "Type" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Human-readable description, printed at the start of a run.
    pub description: String,

    /// Relative paths of the files to rewrite, processed in order.
    pub files: Vec<PathBuf>,

    /// The renames to apply, in order.
    pub rules: Vec<RuleSpec>,
}

impl RenameConfig {
    /// The built-in migration: the legacy property names and the component
    /// files they appear in.
    pub fn default_migration() -> Self {
        let files = [
            "src/components/EnhancedDataTransformUtils.js",
            "src/components/DataTransformUtils.js",
            "src/components/FeaturesV1.js",
            "src/components/FeaturesV1Example.js",
            "src/components/FeaturesV2.js",
            "src/components/FeaturesV2Example.js",
            "src/components/FeaturesV3.js",
            "src/components/FeaturesV3Example.js",
        ];
        let simple = [
            ("isTrueBranch", "branchFlag"),
            ("paramDesc", "description"),
            ("moduleDesc", "userComments"),
            ("standardMH", "standardMh"),
        ];

        let mut rules: Vec<RuleSpec> = simple
            .into_iter()
            .map(|(name, replacement)| RuleSpec::Simple {
                name: name.to_string(),
                replacement: replacement.to_string(),
            })
            .collect();
        rules.push(RuleSpec::Guarded {
            name: "condition".to_string(),
            replacement: "ifCondition".to_string(),
            forbidden_suffix: "Type".to_string(),
        });

        Self {
            description: "Renaming row properties to the target naming convention".to_string(),
            files: files.iter().map(PathBuf::from).collect(),
            rules,
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Compiles and validates the rule set described by this configuration.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let mut set = RuleSet::new();
        for spec in &self.rules {
            set = set.rule(spec.compile()?);
        }
        set.validate()?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_migration_compiles() {
        let config = RenameConfig::default_migration();
        assert_eq!(config.files.len(), 8);
        let rules = config.rule_set().unwrap();
        assert_eq!(rules.len(), 5);
    }

    #[test]
    fn test_rule_spec_json_shape() {
        let spec = RuleSpec::Guarded {
            name: "condition".to_string(),
            replacement: "ifCondition".to_string(),
            forbidden_suffix: "Type".to_string(),
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains(r#""type":"guarded""#));

        let parsed: RuleSpec = serde_json::from_str(&json).unwrap();
        let rule = parsed.compile().unwrap();
        assert_eq!(rule.apply("conditionType condition"), "conditionType ifCondition");
    }

    #[test]
    fn test_config_round_trip() {
        let config = RenameConfig::default_migration();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: RenameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.files, config.files);
        assert_eq!(parsed.rules.len(), config.rules.len());
    }

    #[test]
    fn test_invalid_rule_set_is_rejected() {
        let config = RenameConfig {
            description: "bad".to_string(),
            files: vec![],
            rules: vec![
                RuleSpec::Simple {
                    name: "alpha".to_string(),
                    replacement: "beta".to_string(),
                },
                RuleSpec::Simple {
                    name: "beta".to_string(),
                    replacement: "gamma".to_string(),
                },
            ],
        };
        assert!(config.rule_set().is_err());
    }
}

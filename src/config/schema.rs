// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! [`ConfigFile`] mirrors one `.commit-msg.json` on disk, with every field
//! optional. Files are overlaid onto [`CommitMsgConfig`], whose
//! [`ValidationConfig`] is the read-only policy handed to the validator.

use serde::{Deserialize, Serialize};

use super::default::{DEFAULT_LANG, DEFAULT_LINE_LIMIT, DEFAULT_TYPES};

/// The main configuration structure for commit-msg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMsgConfig {
    /// Locale of the hint texts.
    pub lang: String,

    /// Validation policy.
    pub rules: ValidationConfig,
}

impl Default for CommitMsgConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            rules: ValidationConfig::default(),
        }
    }
}

impl CommitMsgConfig {
    /// Overlay the fields present in `file`, leaving the others untouched.
    pub fn apply(&mut self, file: ConfigFile) {
        if let Some(lang) = file.lang {
            self.lang = lang;
        }
        if let Some(body_required) = file.body_required {
            self.rules.body_required = body_required;
        }
        if let Some(line_limit) = file.line_limit {
            self.rules.line_limit = line_limit;
        }
        if let Some(types) = file.types {
            self.rules.allowed_types = DEFAULT_TYPES.iter().map(|t| t.to_string()).collect();
            for t in types {
                self.rules.allow_type(t);
            }
        }
        if let Some(deny) = file.deny_types {
            self.rules.denied_types.clear();
            for t in deny {
                self.rules.deny_type(t);
            }
        }
        if let Some(scope_required) = file.scope_required {
            self.rules.scope_required = scope_required;
        }
        if let Some(scopes) = file.scopes {
            self.rules.allowed_scopes.clear();
            for s in scopes {
                if !self.rules.allowed_scopes.contains(&s) {
                    self.rules.allowed_scopes.push(s);
                }
            }
        }
    }
}

/// Validation policy for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Maximum line length in bytes (0 = unlimited).
    pub line_limit: usize,

    /// Whether a body is required.
    pub body_required: bool,

    /// Allowed commit types.
    pub allowed_types: Vec<String>,

    /// Types removed from the allowed set.
    pub denied_types: Vec<String>,

    /// Whether a scope is required.
    pub scope_required: bool,

    /// Allowed scopes (empty means all allowed).
    pub allowed_scopes: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            line_limit: DEFAULT_LINE_LIMIT,
            body_required: false,
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            denied_types: Vec::new(),
            scope_required: false,
            allowed_scopes: Vec::new(),
        }
    }
}

impl ValidationConfig {
    /// Add a type to the allowed set.
    pub fn allow_type(&mut self, commit_type: impl Into<String>) {
        let commit_type = commit_type.into();
        if !self.allowed_types.contains(&commit_type) {
            self.allowed_types.push(commit_type);
        }
    }

    /// Remove a type from the effective set.
    pub fn deny_type(&mut self, commit_type: impl Into<String>) {
        let commit_type = commit_type.into();
        if !self.denied_types.contains(&commit_type) {
            self.denied_types.push(commit_type);
        }
    }

    /// Allowed types minus denied types, in configuration order.
    pub fn effective_types(&self) -> Vec<&str> {
        self.allowed_types
            .iter()
            .filter(|t| !self.denied_types.contains(*t))
            .map(String::as_str)
            .collect()
    }

    /// Check whether a type is in the effective set.
    pub fn is_type_allowed(&self, commit_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == commit_type)
            && !self.denied_types.iter().any(|t| t == commit_type)
    }

    /// Check whether a scope is accepted.
    pub fn is_scope_allowed(&self, scope: &str) -> bool {
        self.allowed_scopes.is_empty() || self.allowed_scopes.iter().any(|s| s == scope)
    }

    /// Comma-joined effective types, as shown in hints and the rule text.
    pub fn types_list(&self) -> String {
        self.effective_types().join(", ")
    }

    /// Comma-joined allowed scopes.
    pub fn scopes_list(&self) -> String {
        self.allowed_scopes.join(", ")
    }
}

/// One `.commit-msg.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub lang: Option<String>,
    pub body_required: Option<bool>,
    pub line_limit: Option<usize>,
    pub types: Option<Vec<String>>,
    pub deny_types: Option<Vec<String>>,
    pub scope_required: Option<bool>,
    pub scopes: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CommitMsgConfig::default();
        assert_eq!(config.lang, "en");
        assert_eq!(config.rules.line_limit, 80);
        assert!(!config.rules.body_required);
        assert!(!config.rules.scope_required);
        assert!(config.rules.allowed_scopes.is_empty());
        assert!(config.rules.is_type_allowed("feat"));
        assert!(config.rules.is_type_allowed("Revert"));
        assert!(!config.rules.is_type_allowed("Feat"));
    }

    #[test]
    fn test_denied_types_are_subtracted() {
        let mut rules = ValidationConfig::default();
        rules.deny_type("chore");
        assert!(!rules.is_type_allowed("chore"));
        assert!(!rules.effective_types().contains(&"chore"));
        assert!(!rules.types_list().contains("chore"));
    }

    #[test]
    fn test_scope_membership() {
        let mut rules = ValidationConfig::default();
        assert!(rules.is_scope_allowed("anything"));

        rules.allowed_scopes = vec!["model".to_string(), "view".to_string()];
        assert!(rules.is_scope_allowed("model"));
        assert!(!rules.is_scope_allowed("module"));
        assert_eq!(rules.scopes_list(), "model, view");
    }

    #[test]
    fn test_apply_overlays_present_fields_only() {
        let mut config = CommitMsgConfig::default();
        config.apply(ConfigFile {
            line_limit: Some(72),
            types: Some(vec!["build".to_string(), "feat".to_string()]),
            ..ConfigFile::default()
        });
        config.apply(ConfigFile {
            lang: Some("zh".to_string()),
            body_required: Some(true),
            ..ConfigFile::default()
        });

        assert_eq!(config.lang, "zh");
        assert_eq!(config.rules.line_limit, 72);
        assert!(config.rules.body_required);
        assert!(config.rules.is_type_allowed("build"));
        assert_eq!(
            config.rules.allowed_types.iter().filter(|t| *t == "feat").count(),
            1
        );
    }

    #[test]
    fn test_config_file_camel_case() {
        let file: ConfigFile = serde_json::from_str(
            r#"{"bodyRequired": true, "lineLimit": 0, "denyTypes": ["perf"], "scopeRequired": true, "scopes": ["cli"]}"#,
        )
        .unwrap();
        assert_eq!(file.body_required, Some(true));
        assert_eq!(file.line_limit, Some(0));
        assert_eq!(file.deny_types, Some(vec!["perf".to_string()]));
        assert_eq!(file.scope_required, Some(true));
        assert_eq!(file.scopes, Some(vec!["cli".to_string()]));
        assert!(file.lang.is_none());
    }

    #[test]
    fn test_serialized_config_is_camel_case() {
        let json = serde_json::to_value(CommitMsgConfig::default()).unwrap();
        assert_eq!(json["lang"], "en");
        assert_eq!(json["rules"]["lineLimit"], 80);
        assert_eq!(json["rules"]["bodyRequired"], false);
        assert_eq!(json["rules"]["scopeRequired"], false);
        assert!(json["rules"]["allowedTypes"].is_array());
        assert!(json["rules"]["deniedTypes"].is_array());
        assert!(json["rules"]["allowedScopes"].is_array());
        assert!(json["rules"].get("line_limit").is_none());
    }
}

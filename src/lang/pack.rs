// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Locale packs and template rendering.

use crate::error::{CommitMsgError, LangError, Result};
use crate::state::{OutcomeState, Verdict};
use handlebars::Handlebars;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

lazy_static! {
    static ref POSITIONAL_VERB: Regex = Regex::new(r"%[sdv]").unwrap();
}

/// Hint templates for every state plus the rule description.
///
/// Templates use handlebars placeholders named after the fields of
/// [`Verdict`], e.g. `{{path}}` or `{{length}}`. The rule takes `{{types}}`.
/// Templates without placeholders that contain printf verbs (`%s`, `%d`)
/// are filled positionally instead, so older locale files keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangPack {
    /// Hint template per state, keyed by state name.
    #[serde(default)]
    pub hints: HashMap<String, String>,

    /// Rule description template.
    #[serde(default)]
    pub rule: String,
}

impl LangPack {
    /// Build a pack from a hint function covering every state.
    pub fn from_fn(hint: impl Fn(OutcomeState) -> &'static str, rule: &str) -> Self {
        Self {
            hints: OutcomeState::all()
                .iter()
                .map(|state| (state.as_str().to_string(), hint(*state).to_string()))
                .collect(),
            rule: rule.to_string(),
        }
    }

    /// Load a pack from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading language pack from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            CommitMsgError::Lang(LangError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        let pack: LangPack = serde_json::from_str(&content).map_err(|e| {
            CommitMsgError::Lang(LangError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        for key in pack.hints.keys() {
            if key.parse::<OutcomeState>().is_err() {
                tracing::warn!("Ignoring hint for unknown state '{}' in {:?}", key, path);
            }
        }

        Ok(pack)
    }

    /// Fill hints and rule missing from this pack with those of `fallback`.
    pub fn with_fallback(mut self, fallback: &LangPack) -> Self {
        for (state, hint) in &fallback.hints {
            self.hints
                .entry(state.clone())
                .or_insert_with(|| hint.clone());
        }
        if self.rule.trim().is_empty() {
            self.rule = fallback.rule.clone();
        }
        self
    }

    /// Get the raw hint template of a state.
    pub fn template(&self, state: OutcomeState) -> Option<&str> {
        self.hints.get(state.as_str()).map(String::as_str)
    }

    /// Render the hint of a verdict.
    pub fn hint(&self, verdict: &Verdict) -> Result<String> {
        let state = verdict.state();
        let template = self.template(state).unwrap_or(state.as_str());
        if is_positional(template) {
            return Ok(substitute_positional(template, &verdict.positional_args()));
        }
        render(state.as_str(), template, verdict)
    }

    /// Render the rule description.
    pub fn rule(&self, types: &str) -> Result<String> {
        if is_positional(&self.rule) {
            return Ok(substitute_positional(&self.rule, &[types.to_string()]));
        }
        render(
            "rule",
            &self.rule,
            &serde_json::json!({ "types": types }),
        )
    }
}

fn is_positional(template: &str) -> bool {
    !template.contains("{{") && POSITIONAL_VERB.is_match(template)
}

/// Replace `%s`, `%d` and `%v` with `args` in order; `%%` is a literal `%`.
fn substitute_positional(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s' | 'd' | 'v') => {
                chars.next();
                if let Some(arg) = args.next() {
                    out.push_str(arg);
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

fn render<T: Serialize>(name: &str, template: &str, data: &T) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);

    registry.render_template(template, data).map_err(|e| {
        CommitMsgError::Lang(LangError::RenderFailed {
            template: name.to_string(),
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::builtin;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_line_over_long() {
        let pack = builtin::en();
        let hint = pack
            .hint(&Verdict::LineOverLong {
                length: 91,
                limit: 80,
                line: "a <long> line & more".to_string(),
            })
            .unwrap();
        assert!(hint.contains("91"));
        assert!(hint.contains("exceed 80"));
        // No HTML escaping.
        assert!(hint.contains("a <long> line & more"));
    }

    #[test]
    fn test_render_wrong_type() {
        let hint = builtin::en()
            .hint(&Verdict::WrongType {
                commit_type: "Feat".to_string(),
                types: "feat, fix".to_string(),
            })
            .unwrap();
        assert!(hint.starts_with("Error WrongType: Feat,"));
        assert!(hint.ends_with("feat, fix"));
    }

    #[test]
    fn test_render_rule() {
        let rule = builtin::zh_cn().rule("feat, fix").unwrap();
        assert!(rule.contains("feat, fix"));
        assert!(!rule.contains("{{"));
    }

    #[test]
    fn test_load_from_file_with_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commit-msg.fr.json");
        fs::write(
            &path,
            r#"{"hints": {"BodyMissing": "Erreur BodyMissing: corps vide."}, "rule": ""}"#,
        )
        .unwrap();

        let pack = LangPack::load_from(&path)
            .unwrap()
            .with_fallback(&builtin::en());

        assert_eq!(
            pack.hint(&Verdict::BodyMissing).unwrap(),
            "Erreur BodyMissing: corps vide."
        );
        assert!(pack.hint(&Verdict::EmptyHeader).unwrap().contains("EmptyHeader"));
        assert_eq!(pack.rule, builtin::en().rule);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commit-msg.xx.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(LangPack::load_from(&path).is_err());
    }

    #[test]
    fn test_positional_templates() {
        let mut pack = LangPack::default();
        pack.hints.insert(
            "LineOverLong".to_string(),
            "Error LineOverLong: the length of line is %d, exceed %d:\n%s".to_string(),
        );
        pack.rule = "<type>  must be one of %s, 100%% of the time".to_string();

        let hint = pack
            .hint(&Verdict::LineOverLong {
                length: 91,
                limit: 80,
                line: "{{not a placeholder}}".to_string(),
            })
            .unwrap();
        assert_eq!(
            hint,
            "Error LineOverLong: the length of line is 91, exceed 80:\n{{not a placeholder}}"
        );
        assert_eq!(
            pack.rule("feat, fix").unwrap(),
            "<type>  must be one of feat, fix, 100% of the time"
        );
    }

    #[test]
    fn test_handlebars_template_keeps_percent() {
        let mut pack = LangPack::default();
        pack.hints.insert(
            "FileMissing".to_string(),
            "100% sure {{path}} is gone".to_string(),
        );
        let hint = pack
            .hint(&Verdict::FileMissing {
                path: "msg.txt".to_string(),
            })
            .unwrap();
        assert_eq!(hint, "100% sure msg.txt is gone");
    }
}

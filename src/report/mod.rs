// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering verdicts for the user.

use crate::cli::args::OutputFormat;
use crate::error::{CommitMsgError, Result};
use crate::lang::{builtin, LangPack};
use crate::state::{Category, OutcomeState, Verdict};
use console::style;
use serde::Serialize;

/// A verdict rendered in a given language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Terminal state.
    pub state: OutcomeState,
    /// Stable ordinal of the state.
    pub code: u8,
    /// Process exit code.
    pub exit_code: i32,
    /// Category of the state.
    pub category: Category,
    /// Rendered hint.
    pub hint: String,
    /// Rendered rule description, for format errors only.
    pub rule: Option<String>,
}

impl Report {
    /// Render a verdict with a language pack.
    ///
    /// `types` is the comma-joined effective type list shown in the rule.
    /// A template the pack fails to render is replaced by the built-in
    /// English one; the exit code only depends on the verdict.
    pub fn new(verdict: &Verdict, lang: &LangPack, types: &str) -> Self {
        let state = verdict.state();
        let hint = lang
            .hint(verdict)
            .or_else(|e| fallback(e, || builtin::en().hint(verdict)))
            .unwrap_or_else(|_| state.as_str().to_string());
        let rule = if state.is_format_error() {
            lang.rule(types)
                .or_else(|e| fallback(e, || builtin::en().rule(types)))
                .ok()
        } else {
            None
        };

        Self {
            state,
            code: state.code(),
            exit_code: verdict.exit_code(),
            category: state.category(),
            hint,
            rule,
        }
    }

    /// Print the report.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format to stderr.
    fn print_text(&self) {
        let hint = match self.category {
            Category::Normal => style(&self.hint).for_stderr().green(),
            Category::NonFormatError => style(&self.hint).for_stderr().yellow(),
            Category::FormatError => style(&self.hint).for_stderr().red().bold(),
        };
        eprintln!("{}", hint);

        if let Some(ref rule) = self.rule {
            eprintln!();
            eprintln!("{}", style(rule).for_stderr().dim());
        }
    }

    /// Print in JSON format to stdout.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).unwrap_or_default()
        );
    }

    /// Plain text of the report, as printed without colors.
    pub fn text(&self) -> String {
        match self.rule {
            Some(ref rule) => format!("{}\n\n{}", self.hint, rule),
            None => self.hint.clone(),
        }
    }
}

fn fallback(err: CommitMsgError, render: impl FnOnce() -> Result<String>) -> Result<String> {
    tracing::warn!("{}; using the English template", err);
    render()
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Git commit-msg hook for conventional commit messages.
//!
//! Validates one commit message against the
//! `<type>(<scope>): <subject>` convention and reports exactly one outcome.
//!
//! # Features
//!
//! - **Fail-fast pipeline**: the first violation decides the outcome
//! - **Configurable policy**: line limit, required body/scope, allowed and
//!   denied types, allowed scopes, from `.commit-msg.json` files
//! - **Tooling aware**: merge, revert, fixup and squash commits are exempt
//!   where tools generate them
//! - **Localized hints**: English and Simplified Chinese built in, more via
//!   language files
//!
//! # Example
//!
//! ```
//! use commit_msg::config::ValidationConfig;
//! use commit_msg::rules::validate;
//! use commit_msg::state::{OutcomeState, Verdict};
//!
//! let config = ValidationConfig::default();
//!
//! let verdict = validate("feat(parser): accept scopes\n\nMore details.", &config);
//! assert_eq!(verdict, Verdict::Validated);
//!
//! let verdict = validate("Feat: wrong case", &config);
//! assert_eq!(verdict.state(), OutcomeState::WrongType);
//! assert_eq!(verdict.exit_code(), 8);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod lang;
pub mod message;
pub mod report;
pub mod rules;
pub mod state;

// Re-exports for convenience
pub use config::{CommitMsgConfig, ValidationConfig};
pub use error::{CommitMsgError, Result};
pub use rules::validate;
pub use state::{OutcomeState, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    lazy_static::lazy_static! {
        static ref LONG_VERSION: String = version_string();
    }

    /// Version string shown by `--version`.
    pub fn long_version() -> &'static str {
        LONG_VERSION.as_str()
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}

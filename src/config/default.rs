// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CommitMsgConfig;

/// Name of the configuration file looked up in the home and hooks directories.
pub const CONFIG_FILE_NAME: &str = ".commit-msg.json";

/// Default hint locale.
pub const DEFAULT_LANG: &str = "en";

/// Default maximum line length.
pub const DEFAULT_LINE_LIMIT: usize = 80;

/// Commit types accepted out of the box.
///
/// `Revert` is listed because some tools capitalize it.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "Revert",
];

/// Get the default configuration.
pub fn default_config() -> CommitMsgConfig {
    CommitMsgConfig::default()
}

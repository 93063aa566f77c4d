// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery, loading and merging.

use crate::error::{CommitMsgError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::default::{default_config, CONFIG_FILE_NAME};
use super::schema::{CommitMsgConfig, ConfigFile};

/// Hooks directory relative to a repository root, used outside of libgit2 discovery.
const FALLBACK_HOOKS_DIR: &str = ".git/hooks";

/// Resolve the git hooks directory of the current repository.
///
/// Honors `core.hooksPath`. Outside a repository this falls back to
/// `./.git/hooks` if present and to the working directory otherwise.
pub fn hooks_dir() -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    hooks_dir_from(&current_dir)
}

/// Resolve the hooks directory starting from a specific directory.
pub fn hooks_dir_from(start_dir: &Path) -> PathBuf {
    match git2::Repository::discover(start_dir) {
        Ok(repo) => {
            let configured = repo
                .config()
                .and_then(|cfg| cfg.get_path("core.hooksPath"))
                .ok();

            match configured {
                Some(path) if path.is_absolute() => path,
                Some(path) => repo
                    .workdir()
                    .unwrap_or_else(|| repo.path())
                    .join(path),
                None => repo.path().join("hooks"),
            }
        }
        Err(e) => {
            tracing::debug!("No git repository found from {:?}: {}", start_dir, e.message());
            let fallback = start_dir.join(FALLBACK_HOOKS_DIR);
            if fallback.is_dir() {
                fallback
            } else {
                start_dir.to_path_buf()
            }
        }
    }
}

/// Directories searched for `.commit-msg.json`, lowest priority first.
pub fn config_dirs() -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Some(home) = dirs::home_dir() {
        found.push(home);
    }
    let hooks = hooks_dir();
    if !found.contains(&hooks) {
        found.push(hooks);
    }
    found
}

/// Find the first existing file named `file_name` in the working
/// directory, the hooks directory or the home directory, in that order.
pub fn find_first_existing(file_name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(current_dir) = std::env::current_dir() {
        candidates.push(current_dir);
    }
    candidates.push(hooks_dir());
    if let Some(home) = dirs::home_dir() {
        candidates.push(home);
    }

    candidates
        .into_iter()
        .map(|dir| dir.join(file_name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CommitMsgConfig> {
    Ok(load_config_from_dirs(&config_dirs()))
}

/// Load configuration from the default locations, then overlay an
/// explicitly requested file.
///
/// Unlike the discovered files, the explicit file must exist and parse.
pub fn load_config_with(explicit: Option<&Path>) -> Result<CommitMsgConfig> {
    let mut config = load_config()?;
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CommitMsgError::Config(ConfigError::NotFound {
                path: path.to_path_buf(),
            }));
        }
        config.apply(read_config_file(path)?);
    }
    Ok(config)
}

/// Overlay `.commit-msg.json` from each directory onto the defaults.
///
/// Later directories win per field. Missing files are skipped silently,
/// unreadable or malformed ones with a warning.
pub fn load_config_from_dirs(search_dirs: &[PathBuf]) -> CommitMsgConfig {
    let mut config = default_config();

    for dir in search_dirs {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            continue;
        }

        match read_config_file(&path) {
            Ok(file) => config.apply(file),
            Err(e) => tracing::warn!("Skipping configuration: {}", e),
        }
    }

    config
}

/// Read and parse one configuration file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        CommitMsgError::Config(ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    parse_config(&content).map_err(|e| {
        CommitMsgError::Config(ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
}

/// Parse one configuration file from a JSON string.
pub fn parse_config(content: &str) -> std::result::Result<ConfigFile, serde_json::Error> {
    serde_json::from_str(content)
}

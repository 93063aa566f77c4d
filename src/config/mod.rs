// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-msg.
//!
//! This module handles locating, parsing and overlaying `.commit-msg.json`
//! files from the home and git hooks directories onto the defaults.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    config_dirs, find_first_existing, hooks_dir, load_config, load_config_from_dirs,
    load_config_with, read_config_file,
};
pub use schema::*;

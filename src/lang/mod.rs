// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Localized hint texts.
//!
//! English and Simplified Chinese are built in. Other languages are read
//! from `commit-msg.<lang>.json` files next to the working directory, in the
//! hooks directory or in the home directory.

pub mod builtin;
mod pack;

pub use pack::LangPack;

use crate::config::find_first_existing;
use crate::error::LangError;

/// Select the pack for a language code.
///
/// Unknown languages without a readable pack file fall back to English.
pub fn load_language(lang: &str) -> LangPack {
    match lang {
        "en" => builtin::en(),
        "zh" | "zh-CN" => builtin::zh_cn(),
        other => {
            let file_name = format!("commit-msg.{}.json", other);
            let Some(path) = find_first_existing(&file_name) else {
                let err = LangError::NotFound {
                    lang: other.to_string(),
                };
                tracing::warn!("{}, using English", err);
                return builtin::en();
            };

            match LangPack::load_from(&path) {
                Ok(pack) => pack.with_fallback(&builtin::en()),
                Err(e) => {
                    tracing::warn!("{}, using English", e);
                    builtin::en()
                }
            }
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message validation.
//!
//! This module holds the header grammar and the fail-fast pipeline that
//! turns a message and a [`ValidationConfig`](crate::config::ValidationConfig)
//! into a [`Verdict`](crate::state::Verdict).

mod header;
mod validator;

pub use header::{is_blank, is_revert, ParsedHeader};
pub use validator::{check_body, check_header, check_line_length, check_scope, check_type, validate};

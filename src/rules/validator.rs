// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The validation pipeline.
//!
//! Checks run in a fixed order and the first violation ends the run.
//! Each check returns `Some(verdict)` to terminate or `None` to continue.

use crate::config::ValidationConfig;
use crate::state::Verdict;

use super::header::{is_blank, is_revert, ParsedHeader};

/// Prefix of the messages git generates for merge commits.
const MERGE_PREFIX: &str = "Merge ";

/// Validate a complete commit message.
pub fn validate(message: &str, config: &ValidationConfig) -> Verdict {
    if is_blank(message) {
        return Verdict::EmptyMessage;
    }

    if message.starts_with(MERGE_PREFIX) {
        tracing::debug!("Merge commit detected, skipping checks");
        return Verdict::Merge;
    }

    let (header, body) = match message.split_once('\n') {
        Some((header, body)) => (header, Some(body)),
        None => (message, None),
    };

    if let Some(verdict) = check_header(header, config) {
        return verdict;
    }

    match body {
        Some(body) => check_body(body, config).unwrap_or(Verdict::Validated),
        None if config.body_required => Verdict::BodyMissing,
        None => Verdict::Validated,
    }
}

/// Validate the header line.
pub fn check_header(header: &str, config: &ValidationConfig) -> Option<Verdict> {
    if is_blank(header) {
        return Some(Verdict::EmptyHeader);
    }

    if is_revert(header) {
        tracing::debug!("Revert header detected, skipping header checks");
        return None;
    }

    let Some(parsed) = ParsedHeader::parse(header) else {
        return Some(Verdict::BadHeaderFormat {
            header: header.to_string(),
        });
    };

    if let Some(verdict) = check_type(parsed.commit_type, config) {
        return Some(verdict);
    }

    if let Some(verdict) = check_scope(parsed.scope, config) {
        return Some(verdict);
    }

    if parsed.is_fixup_or_squash {
        return None;
    }
    check_line_length(header, config)
}

/// Check the commit type against the effective type set.
pub fn check_type(commit_type: &str, config: &ValidationConfig) -> Option<Verdict> {
    if config.is_type_allowed(commit_type) {
        None
    } else {
        Some(Verdict::WrongType {
            commit_type: commit_type.to_string(),
            types: config.types_list(),
        })
    }
}

/// Check the scope against the scope policy.
pub fn check_scope(scope: Option<&str>, config: &ValidationConfig) -> Option<Verdict> {
    match scope {
        None if config.scope_required => Some(Verdict::ScopeMissing),
        None => None,
        Some(scope) if config.is_scope_allowed(scope) => None,
        Some(scope) => Some(Verdict::WrongScope {
            scope: scope.to_string(),
            scopes: config.scopes_list(),
        }),
    }
}

/// Validate everything after the first newline of the message.
///
/// A blank body ends the run: `BodyMissing` if a body is required,
/// `Validated` otherwise.
pub fn check_body(body: &str, config: &ValidationConfig) -> Option<Verdict> {
    if is_blank(body) {
        return Some(if config.body_required {
            Verdict::BodyMissing
        } else {
            Verdict::Validated
        });
    }

    let separator = body.split('\n').next().unwrap_or_default();
    if !is_blank(separator) {
        return Some(Verdict::NoBlankLineBeforeBody);
    }

    body.split('\n')
        .find_map(|line| check_line_length(line, config))
}

/// Check one line against the configured limit.
///
/// Length is counted in bytes of the raw line, carriage return included.
pub fn check_line_length(line: &str, config: &ValidationConfig) -> Option<Verdict> {
    if config.line_limit == 0 {
        return None;
    }

    let length = line.len();
    if length > config.line_limit {
        Some(Verdict::LineOverLong {
            length,
            limit: config.line_limit,
            line: line.to_string(),
        })
    } else {
        None
    }
}

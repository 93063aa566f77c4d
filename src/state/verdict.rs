// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! A terminal state together with the values its hint mentions.

use serde::Serialize;

use super::outcome::OutcomeState;

/// The result of one validation run.
///
/// Serializes with a `state` tag; the remaining fields are the
/// placeholders available to the state's hint template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state")]
pub enum Verdict {
    Validated,
    Merge,
    ArgumentMissing,
    FileMissing {
        path: String,
    },
    ReadError {
        path: String,
    },
    EmptyMessage,
    EmptyHeader,
    BadHeaderFormat {
        header: String,
    },
    WrongType {
        #[serde(rename = "type")]
        commit_type: String,
        types: String,
    },
    ScopeMissing,
    WrongScope {
        scope: String,
        scopes: String,
    },
    BodyMissing,
    NoBlankLineBeforeBody,
    LineOverLong {
        length: usize,
        limit: usize,
        line: String,
    },
    UndefinedError,
}

impl Verdict {
    /// Get the terminal state of this verdict.
    pub fn state(&self) -> OutcomeState {
        match self {
            Verdict::Validated => OutcomeState::Validated,
            Verdict::Merge => OutcomeState::Merge,
            Verdict::ArgumentMissing => OutcomeState::ArgumentMissing,
            Verdict::FileMissing { .. } => OutcomeState::FileMissing,
            Verdict::ReadError { .. } => OutcomeState::ReadError,
            Verdict::EmptyMessage => OutcomeState::EmptyMessage,
            Verdict::EmptyHeader => OutcomeState::EmptyHeader,
            Verdict::BadHeaderFormat { .. } => OutcomeState::BadHeaderFormat,
            Verdict::WrongType { .. } => OutcomeState::WrongType,
            Verdict::ScopeMissing => OutcomeState::ScopeMissing,
            Verdict::WrongScope { .. } => OutcomeState::WrongScope,
            Verdict::BodyMissing => OutcomeState::BodyMissing,
            Verdict::NoBlankLineBeforeBody => OutcomeState::NoBlankLineBeforeBody,
            Verdict::LineOverLong { .. } => OutcomeState::LineOverLong,
            Verdict::UndefinedError => OutcomeState::UndefinedError,
        }
    }

    /// Whether the commit may proceed.
    pub fn is_ok(&self) -> bool {
        self.state().is_normal()
    }

    /// Get the process exit code for this verdict.
    pub fn exit_code(&self) -> i32 {
        self.state().exit_code()
    }

    /// Template arguments in positional order, for printf-style hints.
    pub fn positional_args(&self) -> Vec<String> {
        match self {
            Verdict::FileMissing { path } | Verdict::ReadError { path } => vec![path.clone()],
            Verdict::BadHeaderFormat { header } => vec![header.clone()],
            Verdict::WrongType { commit_type, types } => vec![commit_type.clone(), types.clone()],
            Verdict::WrongScope { scope, scopes } => vec![scope.clone(), scopes.clone()],
            Verdict::LineOverLong {
                length,
                limit,
                line,
            } => vec![length.to_string(), limit.to_string(), line.clone()],
            _ => Vec::new(),
        }
    }
}

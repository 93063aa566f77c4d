// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal states of a validation run.

use serde::{Deserialize, Serialize};

/// Broad class of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Not an error; the commit may proceed.
    Normal,
    /// The message could not be obtained.
    NonFormatError,
    /// The message content violates the convention.
    FormatError,
}

/// The closed set of outcomes a validation run can end in.
///
/// The discriminants are the process exit codes of the error band and must
/// never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum OutcomeState {
    Validated = 0,
    Merge = 1,
    ArgumentMissing = 2,
    FileMissing = 3,
    ReadError = 4,
    EmptyMessage = 5,
    EmptyHeader = 6,
    BadHeaderFormat = 7,
    WrongType = 8,
    ScopeMissing = 9,
    WrongScope = 10,
    BodyMissing = 11,
    NoBlankLineBeforeBody = 12,
    LineOverLong = 13,
    UndefinedError = 14,
}

impl OutcomeState {
    /// Get the category of this state.
    pub fn category(&self) -> Category {
        match self {
            OutcomeState::Validated | OutcomeState::Merge => Category::Normal,
            OutcomeState::ArgumentMissing | OutcomeState::FileMissing | OutcomeState::ReadError => {
                Category::NonFormatError
            }
            OutcomeState::EmptyMessage
            | OutcomeState::EmptyHeader
            | OutcomeState::BadHeaderFormat
            | OutcomeState::WrongType
            | OutcomeState::ScopeMissing
            | OutcomeState::WrongScope
            | OutcomeState::BodyMissing
            | OutcomeState::NoBlankLineBeforeBody
            | OutcomeState::LineOverLong
            | OutcomeState::UndefinedError => Category::FormatError,
        }
    }

    /// Whether the commit may proceed.
    pub fn is_normal(&self) -> bool {
        self.category() == Category::Normal
    }

    /// Whether the rule description should be shown alongside the hint.
    pub fn is_format_error(&self) -> bool {
        self.category() == Category::FormatError
    }

    /// The stable ordinal of this state.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// The process exit code: 0 for the normal band, the ordinal otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_normal() {
            0
        } else {
            i32::from(self.code())
        }
    }

    /// Get the state name as used in locale files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeState::Validated => "Validated",
            OutcomeState::Merge => "Merge",
            OutcomeState::ArgumentMissing => "ArgumentMissing",
            OutcomeState::FileMissing => "FileMissing",
            OutcomeState::ReadError => "ReadError",
            OutcomeState::EmptyMessage => "EmptyMessage",
            OutcomeState::EmptyHeader => "EmptyHeader",
            OutcomeState::BadHeaderFormat => "BadHeaderFormat",
            OutcomeState::WrongType => "WrongType",
            OutcomeState::ScopeMissing => "ScopeMissing",
            OutcomeState::WrongScope => "WrongScope",
            OutcomeState::BodyMissing => "BodyMissing",
            OutcomeState::NoBlankLineBeforeBody => "NoBlankLineBeforeBody",
            OutcomeState::LineOverLong => "LineOverLong",
            OutcomeState::UndefinedError => "UndefinedError",
        }
    }

    /// Get all states in ordinal order.
    pub fn all() -> &'static [OutcomeState] {
        &[
            OutcomeState::Validated,
            OutcomeState::Merge,
            OutcomeState::ArgumentMissing,
            OutcomeState::FileMissing,
            OutcomeState::ReadError,
            OutcomeState::EmptyMessage,
            OutcomeState::EmptyHeader,
            OutcomeState::BadHeaderFormat,
            OutcomeState::WrongType,
            OutcomeState::ScopeMissing,
            OutcomeState::WrongScope,
            OutcomeState::BodyMissing,
            OutcomeState::NoBlankLineBeforeBody,
            OutcomeState::LineOverLong,
            OutcomeState::UndefinedError,
        ]
    }
}

impl std::str::FromStr for OutcomeState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutcomeState::all()
            .iter()
            .find(|state| state.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl std::fmt::Display for OutcomeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

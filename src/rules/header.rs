// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Header (first line) grammar.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[fixup! |squash! ]type[(scope)]: subject`
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<marker>fixup! |squash! )?(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[^()\s]+)\))?: (?P<subject>.+)(?:\n|$)"
    )
    .unwrap();

    /// Headers produced by `git revert` and similar tools.
    static ref REVERT_REGEX: Regex = Regex::new(r"^(Revert|revert)(:| ).+").unwrap();
}

/// The components of a conventional header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader<'a> {
    /// Whether the header starts with `fixup! ` or `squash! `.
    pub is_fixup_or_squash: bool,
    /// Commit type.
    pub commit_type: &'a str,
    /// Optional scope, without parentheses.
    pub scope: Option<&'a str>,
    /// Subject line.
    pub subject: &'a str,
}

impl<'a> ParsedHeader<'a> {
    /// Parse a header line.
    ///
    /// Returns `None` when the grammar does not match or the subject is blank.
    pub fn parse(header: &'a str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(header)?;

        let subject = captures.name("subject")?.as_str();
        if is_blank(subject) {
            return None;
        }

        Some(Self {
            is_fixup_or_squash: captures.name("marker").is_some(),
            commit_type: captures.name("type")?.as_str(),
            scope: captures.name("scope").map(|m| m.as_str()),
            subject,
        })
    }
}

/// Whether the header was generated by a revert.
pub fn is_revert(header: &str) -> bool {
    REVERT_REGEX.is_match(header)
}

/// Whether a string has no content except whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        for text in ["", "   ", "  \t ", "\n\r\t"] {
            assert!(is_blank(text), "{:?} should be blank", text);
        }
        assert!(!is_blank("  some words "));
    }

    #[test]
    fn test_parse_full_header() {
        let header = ParsedHeader::parse("feat(core): add new feature").unwrap();
        assert!(!header.is_fixup_or_squash);
        assert_eq!(header.commit_type, "feat");
        assert_eq!(header.scope, Some("core"));
        assert_eq!(header.subject, "add new feature");
    }

    #[test]
    fn test_parse_without_scope() {
        let header = ParsedHeader::parse("fix: something").unwrap();
        assert_eq!(header.commit_type, "fix");
        assert!(header.scope.is_none());
    }

    #[test]
    fn test_parse_fixup_and_squash() {
        let header = ParsedHeader::parse("fixup! feat: add thing").unwrap();
        assert!(header.is_fixup_or_squash);
        assert_eq!(header.commit_type, "feat");

        let header = ParsedHeader::parse("squash! docs(readme): typo").unwrap();
        assert!(header.is_fixup_or_squash);
        assert_eq!(header.scope, Some("readme"));
    }

    #[test]
    fn test_parse_rejects_bad_formats() {
        for header in [
            "something in wrong format",
            "test:header without space after colon",
            "test：Chinese(full width) colon",
            "test: ",
            "test:    ",
            "feat( ): something changes",
            "feat(): something changes",
            "feat(a b): something changes",
            "fixup!feat: missing space",
        ] {
            assert!(ParsedHeader::parse(header).is_none(), "{:?} should not parse", header);
        }
    }

    #[test]
    fn test_type_is_ascii_word() {
        assert!(ParsedHeader::parse("fix_2: ok").is_some());
        assert!(ParsedHeader::parse("修复: ok").is_none());
    }

    #[test]
    fn test_is_revert() {
        assert!(is_revert("Revert \"fix: abc issue\""));
        assert!(is_revert("revert: feat: something"));
        assert!(!is_revert("Revert"));
        assert!(!is_revert("Reverted something"));
        assert!(!is_revert("feat: Revert \"x\""));
    }
}

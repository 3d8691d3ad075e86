//! Operator input parsing.
//!
//! The engine assumes validated input. This module turns operator text into
//! a reference string and a frame count, and recovers from bad text by
//! substituting the documented defaults:
//! - reference string: [`DEFAULT_REFERENCE`](crate::common::config::DEFAULT_REFERENCE)
//! - frame count: [`DEFAULT_FRAMES`]

use tracing::warn;

use crate::common::config::{default_reference, DEFAULT_FRAMES};
use crate::common::{Error, PageId, Result};

/// What to do with a reference string that parses to nothing.
///
/// The console runs an empty string as-is; the visual form swaps in the
/// demo string. A caller picks one and sticks with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReference {
    /// Simulate the empty string: zero faults, empty trace.
    Simulate,
    /// Substitute the default reference string.
    UseDefault,
}

/// A parsed value plus the warning emitted if a default replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Recovered<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn substituted(value: T, warning: String) -> Self {
        warn!("{}", warning);
        Self {
            value,
            warning: Some(warning),
        }
    }
}

/// Parse whitespace-separated page numbers.
///
/// # Errors
/// `Error::InvalidReference` for the first token that is not a
/// non-negative integer fitting a page id.
///
/// # Example
/// ```
/// use pagesim::{input::parse_reference, pages};
///
/// assert_eq!(parse_reference("7 0  1\t2").unwrap(), pages(&[7, 0, 1, 2]));
/// assert!(parse_reference("7 x").is_err());
/// ```
pub fn parse_reference(text: &str) -> Result<Vec<PageId>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map(PageId::new)
                .map_err(|_| Error::InvalidReference {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Parse a frame count: a single integer of at least 1.
///
/// # Errors
/// `Error::InvalidFrameCount` for anything else.
pub fn parse_frames(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(frames) if frames > 0 => Ok(frames),
        _ => Err(Error::InvalidFrameCount(text.trim().to_string())),
    }
}

/// Parse a reference string, falling back to the default on bad input.
pub fn reference_or_default(text: &str, empty: EmptyReference) -> Recovered<Vec<PageId>> {
    match parse_reference(text) {
        Ok(reference) if reference.is_empty() && empty == EmptyReference::UseDefault => {
            Recovered::substituted(
                default_reference(),
                "Reference string empty, using demo default.".to_string(),
            )
        }
        Ok(reference) => Recovered::parsed(reference),
        Err(e) => Recovered::substituted(
            default_reference(),
            format!("{}; using default demo reference.", e),
        ),
    }
}

/// Parse a frame count, falling back to the default on bad input.
pub fn frames_or_default(text: &str) -> Recovered<usize> {
    match parse_frames(text) {
        Ok(frames) => Recovered::parsed(frames),
        Err(e) => Recovered::substituted(
            DEFAULT_FRAMES,
            format!("{}; using frames = {}.", e, DEFAULT_FRAMES),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("1 2 3").unwrap(), pages(&[1, 2, 3]));
        assert_eq!(parse_reference("  ").unwrap(), Vec::<PageId>::new());
    }

    #[test]
    fn test_parse_reference_rejects_bad_tokens() {
        for bad in ["1 a 2", "1 -2", "1.5", "99999999999"] {
            assert!(
                matches!(parse_reference(bad), Err(Error::InvalidReference { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_reference_reports_first_bad_token() {
        match parse_reference("1 x y") {
            Err(Error::InvalidReference { token }) => assert_eq!(token, "x"),
            other => panic!("Expected InvalidReference, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_frames() {
        assert_eq!(parse_frames("4").unwrap(), 4);
        assert_eq!(parse_frames(" 1\n").unwrap(), 1);
        assert!(parse_frames("0").is_err());
        assert!(parse_frames("-3").is_err());
        assert!(parse_frames("three").is_err());
        assert!(parse_frames("").is_err());
    }

    #[test]
    fn test_reference_or_default_recovers() {
        let recovered = reference_or_default("1 two 3", EmptyReference::Simulate);
        assert_eq!(recovered.value, default_reference());
        assert!(recovered.warning.unwrap().contains("two"));
    }

    #[test]
    fn test_empty_reference_choice() {
        let simulated = reference_or_default("", EmptyReference::Simulate);
        assert!(simulated.value.is_empty());
        assert!(simulated.warning.is_none());

        let defaulted = reference_or_default("", EmptyReference::UseDefault);
        assert_eq!(defaulted.value, default_reference());
        assert!(defaulted.warning.is_some());
    }

    #[test]
    fn test_frames_or_default() {
        assert_eq!(frames_or_default("5").value, 5);
        assert!(frames_or_default("5").warning.is_none());

        let recovered = frames_or_default("0");
        assert_eq!(recovered.value, DEFAULT_FRAMES);
        assert!(recovered.warning.is_some());
    }
}

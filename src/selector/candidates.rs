//! Validated User-Agent values and candidate lists.
//!
//! # Responsibilities
//! - Reject values that cannot travel in a header (control chars, line breaks)
//! - Keep the textual and wire forms of each value side by side
//! - Guarantee a non-empty list so picking is infallible

use std::fmt;

use rand::Rng;
use reqwest::header::HeaderValue;

use crate::error::HeaderError;
use crate::selector::select;

/// A single `User-Agent` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    text: String,
    header: HeaderValue,
}

impl UserAgent {
    /// Validate `value` as a header field value.
    ///
    /// Only visible ASCII, spaces and tabs are accepted. The value must not
    /// be blank, nor start or end with a space or tab: receivers strip that
    /// padding, so it would not arrive as sent.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let text = value.into();
        let trimmed = text.trim_matches([' ', '\t']);
        if trimmed.is_empty() || trimmed.len() != text.len() {
            return None;
        }
        let header = HeaderValue::from_str(&text).ok()?;
        // from_str lets obs-text bytes through; to_str does not.
        header.to_str().ok()?;
        Some(Self { text, header })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered, non-empty, immutable list of candidate values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    entries: Vec<UserAgent>,
}

impl CandidateList {
    /// Build a list, rejecting it as a whole if it is empty or if any entry
    /// is not a valid header value.
    pub fn new<I, S>(values: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            let value = value.into();
            match UserAgent::parse(value.clone()) {
                Some(ua) => entries.push(ua),
                None => return Err(HeaderError::InvalidValue { index, value }),
            }
        }
        if entries.is_empty() {
            return Err(HeaderError::Empty);
        }
        Ok(Self { entries })
    }

    /// Pick one entry uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &UserAgent {
        select(&self.entries, rng).expect("candidate list is never empty")
    }

    /// Entry at `position`, wrapping around the end of the list.
    pub fn cycle(&self, position: usize) -> &UserAgent {
        &self.entries[position % self.entries.len()]
    }

    pub fn get(&self, index: usize) -> Option<&UserAgent> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserAgent> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[UserAgent] {
        &self.entries
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|ua| ua.as_str() == value)
    }
}

impl Default for CandidateList {
    /// The built-in browser list.
    fn default() -> Self {
        let entries = crate::defaults::DEFAULT_USER_AGENTS
            .iter()
            .filter_map(|v| UserAgent::parse(*v))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_empty_list() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(CandidateList::new(empty), Err(HeaderError::Empty));
    }

    #[test]
    fn test_rejects_line_breaks_and_control_chars() {
        let err = CandidateList::new(["ok/1.0", "bad\r\nX-Injected: 1"]).unwrap_err();
        assert_eq!(
            err,
            HeaderError::InvalidValue {
                index: 1,
                value: "bad\r\nX-Injected: 1".into()
            }
        );

        assert!(CandidateList::new(["nul\0byte"]).is_err());
        assert!(CandidateList::new(["del\x7f"]).is_err());
    }

    #[test]
    fn test_rejects_blank_and_non_ascii() {
        assert!(CandidateList::new(["   "]).is_err());
        assert!(CandidateList::new([""]).is_err());
        assert!(CandidateList::new(["agent/é"]).is_err());
    }

    #[test]
    fn test_rejects_leading_and_trailing_whitespace() {
        for padded in [" padded/1.0", "padded/1.0 ", "\tpadded/1.0", "padded/1.0\t", " padded/1.0 "] {
            assert_eq!(
                CandidateList::new([padded]),
                Err(HeaderError::InvalidValue {
                    index: 0,
                    value: padded.into()
                })
            );
            assert!(UserAgent::parse(padded).is_none());
        }
    }

    #[test]
    fn test_accepts_tabs_and_spaces() {
        let list = CandidateList::new(["Mozilla/5.0 (X11;\tLinux)"]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().as_str(), "Mozilla/5.0 (X11;\tLinux)");
    }

    #[test]
    fn test_header_value_matches_text() {
        let ua = UserAgent::parse("curl/8.4.0").unwrap();
        assert_eq!(ua.header_value().to_str().unwrap(), ua.as_str());
        assert_eq!(ua.to_string(), "curl/8.4.0");
    }

    #[test]
    fn test_choose_single_element() {
        let list = CandidateList::new(["solo"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(list.choose(&mut rng).as_str(), "solo");
        }
    }

    #[test]
    fn test_default_list_is_populated() {
        let list = CandidateList::default();
        assert_eq!(list.len(), crate::defaults::DEFAULT_USER_AGENTS.len());
        assert!(!list.is_empty());
    }
}

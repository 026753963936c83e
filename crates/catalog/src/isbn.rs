//! ISBN value object.
//!
//! An [`Isbn`] can only be obtained through [`Isbn::parse`] (or the `FromStr` /
//! `TryFrom` / serde paths, which all delegate to it). Once it exists it holds a
//! canonical 10- or 13-character identifier with a valid checksum.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use shelfguard_core::{DomainError, DomainResult, FormatViolation, ValueObject};

/// Check character standing for the value 10 in the last position of an ISBN-10.
const CHECK_TEN: char = 'X';

/// Structural grammar for formatted ISBN input.
///
/// The accepted shapes are an optional `ISBN`, `ISBN-10` or `ISBN-13` label
/// (with optional colon and one space) followed by one of:
/// - 10 contiguous characters,
/// - a 13-character block with at least three digit groups,
/// - 13 contiguous digits starting with `978`/`979`,
/// - a 17-character block with at least four digit groups.
struct Grammar {
    label: Regex,
    shape: Regex,
    plain_10: Regex,
    grouped_13: Regex,
    three_groups: Regex,
    contiguous_13: Regex,
    grouped_17: Regex,
    four_groups: Regex,
}

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(Grammar::compile);

impl Grammar {
    fn compile() -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("ISBN grammar is a valid regex");
        Self {
            label: re(r"^(?:ISBN(?:-1[03])?:? )?"),
            shape: re(r"^(?:97[89][- ]?)?[0-9]{1,5}[- ]?[0-9]+[- ]?[0-9]+[- ]?[0-9X]$"),
            plain_10: re(r"^[0-9X]{10}$"),
            grouped_13: re(r"^[- 0-9X]{13}$"),
            three_groups: re(r"^(?:[0-9]+[- ]){3}"),
            contiguous_13: re(r"^97[89][0-9]{10}$"),
            grouped_17: re(r"^[- 0-9]{17}$"),
            four_groups: re(r"^(?:[0-9]+[- ]){4}"),
        }
    }

    fn matches(&self, raw: &str) -> bool {
        // The label always ends in a space and the body starts with a digit, so
        // there is at most one way to split the input.
        let body = match self.label.find(raw) {
            Some(label) => &raw[label.end()..],
            None => raw,
        };

        let sized = self.plain_10.is_match(body)
            || (self.grouped_13.is_match(body) && self.three_groups.is_match(body))
            || self.contiguous_13.is_match(body)
            || (self.grouped_17.is_match(body) && self.four_groups.is_match(body));

        sized && self.shape.is_match(body)
    }
}

/// Which of the two ISBN forms an [`Isbn`] holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

impl IsbnKind {
    fn from_len(len: usize) -> Option<Self> {
        match len {
            10 => Some(IsbnKind::Isbn10),
            13 => Some(IsbnKind::Isbn13),
            _ => None,
        }
    }

    /// Number of characters in the canonical form.
    pub fn digit_count(self) -> usize {
        match self {
            IsbnKind::Isbn10 => 10,
            IsbnKind::Isbn13 => 13,
        }
    }
}

/// International Standard Book Number, validated and canonicalized.
///
/// The held value is the digit string with labels and separators removed, e.g.
/// `"ISBN-13: 978-0-596-52068-7"` is stored as `"9780596520687"`. A trailing
/// `X` check character of an ISBN-10 is kept.
///
/// ```
/// use shelfguard_catalog::{Isbn, IsbnKind};
///
/// let isbn = Isbn::parse("ISBN-10: 0-596-52068-9").unwrap();
/// assert_eq!(isbn.to_string(), "0596520689");
/// assert_eq!(isbn.kind(), IsbnKind::Isbn10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn {
    value: String,
}

impl ValueObject for Isbn {}

impl Isbn {
    /// Validate and canonicalize raw ISBN input.
    ///
    /// Stages run in order and the first failure is reported:
    /// empty input, digit count, structural pattern, checksum.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let parsed = Self::validate(raw);
        if let Err(err) = &parsed {
            tracing::debug!(
                violation = %err.violation(),
                input_len = raw.len(),
                "rejected ISBN input"
            );
        }
        parsed
    }

    /// Like [`Isbn::parse`], treating absent input as empty.
    pub fn parse_opt(raw: Option<&str>) -> DomainResult<Self> {
        Self::parse(raw.unwrap_or_default())
    }

    /// Whether `raw` would be accepted by [`Isbn::parse`].
    pub fn is_valid(raw: &str) -> bool {
        Self::validate(raw).is_ok()
    }

    /// Reduce formatted input to its canonical digit string.
    ///
    /// Drops the two-character length marker after a leading `ISBN-`, then every
    /// character that is not an ASCII digit. A trailing `X` survives as the last
    /// character. No validation happens here.
    pub fn canonicalize(raw: &str) -> String {
        let payload = match raw.strip_prefix("ISBN-") {
            Some(rest) => {
                let mut rest = rest.chars();
                rest.next();
                rest.next();
                rest.as_str()
            }
            None => raw,
        };

        let mut canonical: String = payload.chars().filter(char::is_ascii_digit).collect();
        if raw.ends_with(CHECK_TEN) {
            canonical.push(CHECK_TEN);
        }
        canonical
    }

    /// The canonical string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> IsbnKind {
        // Length is fixed at construction.
        if self.value.len() == 10 {
            IsbnKind::Isbn10
        } else {
            IsbnKind::Isbn13
        }
    }

    fn validate(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() {
            return Err(DomainError::invalid_format(FormatViolation::EmptyInput));
        }

        let canonical = Self::canonicalize(raw);
        let kind = IsbnKind::from_len(canonical.len())
            .ok_or(DomainError::invalid_format(FormatViolation::WrongDigitCount))?;

        if !GRAMMAR.matches(raw) {
            return Err(DomainError::invalid_format(FormatViolation::PatternMismatch));
        }

        let checksum_ok = match kind {
            IsbnKind::Isbn10 => isbn10_checksum_valid(&canonical),
            IsbnKind::Isbn13 => isbn13_checksum_valid(&canonical),
        };
        if !checksum_ok {
            return Err(DomainError::invalid_format(FormatViolation::ChecksumMismatch));
        }

        Ok(Self { value: canonical })
    }
}

/// Weights 10 down to 1; the sum must be divisible by 11.
fn isbn10_checksum_valid(canonical: &str) -> bool {
    let last = canonical.len().saturating_sub(1);
    canonical
        .chars()
        .enumerate()
        .try_fold(0u32, |sum, (position, c)| {
            let value = match c {
                CHECK_TEN if position == last => 10,
                _ => c.to_digit(10)?,
            };
            Some(sum + value * (10 - position as u32))
        })
        .is_some_and(|sum| sum % 11 == 0)
}

/// Alternating weights 1, 3, 1, 3, ...; the sum must be divisible by 10.
fn isbn13_checksum_valid(canonical: &str) -> bool {
    canonical
        .chars()
        .enumerate()
        .try_fold(0u32, |sum, (position, c)| {
            let weight = if position % 2 == 0 { 1 } else { 3 };
            Some(sum + c.to_digit(10)? * weight)
        })
        .is_some_and(|sum| sum % 10 == 0)
}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl core::str::FromStr for Isbn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Isbn {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.value
    }
}

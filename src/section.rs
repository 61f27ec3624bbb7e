//! Section representation for parsed outline documents.
//!
//! An outline has exactly two levels: numbered sections (`## 1. Title`) and
//! dotted subsections beneath them (`### 1.1 Title`). Only subsections carry
//! body text. Ids are kept as the exact text captured from the heading so that
//! lookups compare what the author wrote, leading zeros included.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Top-level numbered division of the outline.
pub struct Section {
    /// Decimal ordinal captured from the heading, e.g. `"2"`.
    pub id: String,
    /// Heading text following the ordinal.
    pub title: String,
    /// Nested entries in document order.
    pub subsections: Vec<Subsection>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Second-level entry owning the body text up to the next heading.
pub struct Subsection {
    /// Dotted `major.minor` id, e.g. `"2.1"`.
    pub id: String,
    /// Heading text following the dotted id.
    pub title: String,
    /// Body text, trimmed at both ends with internal blank lines kept.
    pub content: String,
    /// Id of the enclosing section.
    pub parent_id: String,
}

impl Subsection {
    /// Body text split into paragraphs on blank-line boundaries.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }

    #[must_use]
    /// Numeric ordering key parsed from the dotted id.
    pub fn ordinal(&self) -> Ordinal<'_> {
        Ordinal::parse(&self.id)
    }
}

#[derive(Clone, Copy, Debug)]
/// Numeric `(major, minor)` view of a dotted id.
///
/// Components are compared as unbounded decimal numbers, so `"2.10"` sorts
/// after `"2.9"` and `"1.01"` ties with `"1.1"`. Non-numeric components sort
/// before every number, mirroring a missing value.
pub struct Ordinal<'a> {
    major: &'a str,
    minor: &'a str,
}

impl<'a> Ordinal<'a> {
    #[must_use]
    /// Split an id at its first dot; a missing minor part compares as absent.
    pub fn parse(id: &'a str) -> Self {
        let id = id.trim();
        let (major, minor) = id.split_once('.').unwrap_or((id, ""));
        Self { major, minor }
    }
}

fn compare_decimal(a: &str, b: &str) -> Ordering {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match (digits(a), digits(b)) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => {
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
    }
}

impl Ord for Ordinal<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_decimal(self.major, other.major)
            .then_with(|| compare_decimal(self.minor, other.minor))
    }
}

impl PartialOrd for Ordinal<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ordinal<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ordinal<'_> {}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;

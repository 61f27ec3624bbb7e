//! Numbered outline format: `## N. Title` sections and `### N.M Title` subsections.
//!
//! Digits are ASCII only and the optional dot after a section number is the
//! only punctuation tolerated. Leading whitespace before the hashes is not a
//! heading, so indented lines fall through to body text.

use crate::formats::Format;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s+([0-9]+)\.?\s+(.+)$").unwrap());

static SUBSECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###\s+([0-9]+\.[0-9]+)\s+(.+)$").unwrap());

/// Heading patterns for the numbered two-level outline convention.
pub struct OutlineFormat;

impl Format for OutlineFormat {
    fn section_heading(&self) -> &Regex {
        &SECTION_HEADING
    }

    fn subsection_heading(&self) -> &Regex {
        &SUBSECTION_HEADING
    }
}

#[cfg(test)]
#[path = "../tests/formats.rs"]
mod tests;

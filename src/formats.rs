//! Format trait and implementations for outline heading conventions.
//!
//! This module defines the `Format` trait which abstracts over the line patterns
//! that open a section or a subsection. The parser only ever asks a format
//! whether a raw line is a heading, so alternative conventions can be swapped
//! in without touching the scanner.

pub mod outline;

use regex::Regex;

/// Line patterns recognised by the outline parser.
///
/// Both patterns must capture the id in group 1 and the title in group 2, and
/// are matched against the whole line as read (no trimming beforehand).
pub trait Format {
    /// Pattern for a top-level section heading.
    fn section_heading(&self) -> &Regex;
    /// Pattern for a dotted subsection heading.
    fn subsection_heading(&self) -> &Regex;
}

/// Id and title captured from a heading line.
pub type Heading<'a> = (&'a str, &'a str);

pub(crate) fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<Heading<'a>> {
    let caps = pattern.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

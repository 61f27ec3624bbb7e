//! Single forward pass over outline text producing the section tree.
//!
//! The scanner holds at most one open section and one open subsection. Each
//! line is tested against the section pattern first, then the subsection
//! pattern, and otherwise treated as body text:
//!
//! ```text
//! ## N. Title    -> seal subsection, seal section, open section
//! ### N.M Title  -> (only under an open section) seal subsection, open subsection
//! anything else  -> append to the open subsection, or drop
//! end of input   -> seal subsection, seal section
//! ```
//!
//! Parsing never fails. The only error surface is reading the source, which
//! [`parse_file`] reports as
//! [`OutlineError::SourceUnavailable`](crate::error::OutlineError::SourceUnavailable).

use crate::error::Result;
use crate::formats::outline::OutlineFormat;
use crate::formats::{capture, Format};
use crate::input::read_outline;
use crate::section::{Section, Subsection};
use std::path::Path;

/// Hooks fired while the scanner walks the outline.
///
/// Every method defaults to doing nothing, so an observer only overrides the
/// events it cares about.
pub trait ParseObserver {
    /// A section heading was recognised on `line_no` (1-indexed).
    fn section_opened(&mut self, _line_no: usize, _section: &Section) {}
    /// A subsection heading was attached to its section.
    fn subsection_opened(&mut self, _line_no: usize, _subsection: &Subsection) {}
    /// A subsection heading appeared before any section and was dropped.
    fn orphan_subsection(&mut self, _line_no: usize, _id: &str) {}
    /// A subsection received its final, trimmed content.
    fn subsection_sealed(&mut self, _subsection: &Subsection) {}
    /// Scanning finished with the given tree.
    fn finished(&mut self, _sections: &[Section]) {}
}

/// Observer that ignores every event.
pub struct Quiet;

impl ParseObserver for Quiet {}

/// Observer that reports scanner events through `tracing`.
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn section_opened(&mut self, line_no: usize, section: &Section) {
        tracing::debug!(line = line_no, id = %section.id, title = %section.title, "section opened");
    }

    fn subsection_opened(&mut self, line_no: usize, subsection: &Subsection) {
        tracing::debug!(
            line = line_no,
            id = %subsection.id,
            parent = %subsection.parent_id,
            "subsection opened"
        );
    }

    fn orphan_subsection(&mut self, line_no: usize, id: &str) {
        tracing::debug!(line = line_no, id, "subsection heading outside any section dropped");
    }

    fn subsection_sealed(&mut self, subsection: &Subsection) {
        tracing::trace!(id = %subsection.id, bytes = subsection.content.len(), "subsection sealed");
    }

    fn finished(&mut self, sections: &[Section]) {
        let ids: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.subsections.iter().map(|sub| sub.id.as_str()))
            .collect();
        tracing::debug!(sections = sections.len(), ?ids, "available subsection ids");
    }
}

/// Parse outline text with the numbered outline convention and no diagnostics.
#[must_use]
pub fn parse(text: &str) -> Vec<Section> {
    parse_with(text, &OutlineFormat, &mut Quiet)
}

/// Read and parse an outline file, reporting scanner events through `tracing`.
///
/// # Errors
///
/// Returns [`OutlineError::SourceUnavailable`](crate::error::OutlineError::SourceUnavailable)
/// if the file cannot be read.
pub fn parse_file(path: &Path) -> Result<Vec<Section>> {
    let text = read_outline(path)?;
    Ok(parse_with(&text, &OutlineFormat, &mut TracingObserver))
}

/// Parse outline text using `format` for heading recognition.
pub fn parse_with<F, O>(text: &str, format: &F, observer: &mut O) -> Vec<Section>
where
    F: Format + ?Sized,
    O: ParseObserver + ?Sized,
{
    let mut scanner = Scanner::new(observer);

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let line_no = idx + 1;

        if let Some((id, title)) = capture(format.section_heading(), line) {
            scanner.open_section(line_no, id, title);
        } else if let Some((id, title)) = capture(format.subsection_heading(), line) {
            scanner.open_subsection(line_no, id, title);
        } else {
            scanner.body_line(line);
        }
    }

    scanner.finish()
}

/// In-progress parse state. `buffer` only ever holds text for the last
/// subsection of `open`, which is already attached with empty content.
struct Scanner<'o, O: ParseObserver + ?Sized> {
    sections: Vec<Section>,
    open: Option<Section>,
    subsection_open: bool,
    buffer: String,
    observer: &'o mut O,
}

impl<'o, O: ParseObserver + ?Sized> Scanner<'o, O> {
    fn new(observer: &'o mut O) -> Self {
        Self {
            sections: Vec::new(),
            open: None,
            subsection_open: false,
            buffer: String::new(),
            observer,
        }
    }

    fn open_section(&mut self, line_no: usize, id: &str, title: &str) {
        self.seal_subsection();
        if let Some(section) = self.open.take() {
            self.sections.push(section);
        }
        let section = Section {
            id: id.to_string(),
            title: title.to_string(),
            subsections: Vec::new(),
        };
        self.observer.section_opened(line_no, &section);
        self.open = Some(section);
    }

    fn open_subsection(&mut self, line_no: usize, id: &str, title: &str) {
        if self.open.is_none() {
            self.observer.orphan_subsection(line_no, id);
            return;
        }
        self.seal_subsection();
        let Some(section) = self.open.as_mut() else {
            return;
        };
        let subsection = Subsection {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            parent_id: section.id.clone(),
        };
        self.observer.subsection_opened(line_no, &subsection);
        section.subsections.push(subsection);
        self.subsection_open = true;
    }

    fn body_line(&mut self, line: &str) {
        if self.subsection_open {
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }
    }

    fn seal_subsection(&mut self) {
        if !self.subsection_open {
            return;
        }
        self.subsection_open = false;
        let content = self.buffer.trim().to_string();
        self.buffer.clear();
        if let Some(subsection) = self
            .open
            .as_mut()
            .and_then(|section| section.subsections.last_mut())
        {
            subsection.content = content;
            self.observer.subsection_sealed(subsection);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.seal_subsection();
        if let Some(section) = self.open.take() {
            self.sections.push(section);
        }
        self.observer.finished(&self.sections);
        self.sections
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;

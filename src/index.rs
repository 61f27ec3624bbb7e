//! Cached, queryable view over a parsed outline.
//!
//! A `DocumentIndex` owns its source and parses it at most once. Each derived
//! view (the flattened subsection list and the numeric reading order) has its
//! own cache slot filled on first use. Concurrent first callers block on a
//! single parse and all observe the same tree; a failed read is not cached, so
//! the next query tries the source again.
//!
//! The tree is immutable once built. [`DocumentIndex::invalidate`] is the only
//! way to pick up edits to the source without building a new index.

use crate::error::{OutlineError, Result};
use crate::formats::outline::OutlineFormat;
use crate::input::OutlineSource;
use crate::parser::{parse_with, TracingObserver};
use crate::section::{Section, Subsection};
use once_cell::sync::OnceCell;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Neighbours of a subsection in reading order.
pub struct Adjacent<'a> {
    /// Entry before the queried one, absent at the start.
    pub previous: Option<&'a Subsection>,
    /// Entry after the queried one, absent at the end.
    pub next: Option<&'a Subsection>,
}

/// Lookup and navigation over a single outline document.
pub struct DocumentIndex {
    source: OutlineSource,
    sections: OnceCell<Vec<Section>>,
    subsections: OnceCell<Vec<Subsection>>,
    reading_order: OnceCell<Vec<Subsection>>,
}

impl DocumentIndex {
    #[must_use]
    /// Create an empty index; nothing is read until the first query.
    pub fn new(source: impl Into<OutlineSource>) -> Self {
        Self {
            source: source.into(),
            sections: OnceCell::new(),
            subsections: OnceCell::new(),
            reading_order: OnceCell::new(),
        }
    }

    #[must_use]
    /// Index over text already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(OutlineSource::Text(text.into()))
    }

    #[must_use]
    /// Where this index reads its outline from.
    pub fn source(&self) -> &OutlineSource {
        &self.source
    }

    /// Full section tree, parsing the source on first call.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::SourceUnavailable`] if the source cannot be read.
    pub fn try_sections(&self) -> Result<&[Section]> {
        self.sections
            .get_or_try_init(|| {
                let text = self.source.read()?;
                tracing::info!(source = %self.source.describe(), "parsing outline");
                Ok::<_, OutlineError>(parse_with(&text, &OutlineFormat, &mut TracingObserver))
            })
            .map(Vec::as_slice)
    }

    #[must_use]
    /// Full section tree, degrading to an empty slice when the source is unreadable.
    pub fn all_sections(&self) -> &[Section] {
        match self.try_sections() {
            Ok(sections) => sections,
            Err(e) => {
                tracing::warn!(error = %e, "serving empty outline");
                &[]
            }
        }
    }

    #[must_use]
    /// Every subsection, section by section, in document order.
    pub fn all_subsections(&self) -> &[Subsection] {
        let sections = match self.try_sections() {
            Ok(sections) => sections,
            Err(e) => {
                tracing::warn!(error = %e, "serving empty subsection list");
                return &[];
            }
        };
        self.subsections.get_or_init(|| {
            sections
                .iter()
                .flat_map(|section| section.subsections.iter().cloned())
                .collect()
        })
    }

    #[must_use]
    /// Every subsection sorted by numeric `(major, minor)` id.
    ///
    /// Ties keep document order. For outlines whose headings already ascend
    /// this is identical to [`all_subsections`](Self::all_subsections).
    pub fn reading_order(&self) -> &[Subsection] {
        let subsections = self.all_subsections();
        if subsections.is_empty() {
            return subsections;
        }
        self.reading_order.get_or_init(|| {
            let mut sorted = subsections.to_vec();
            sorted.sort_by(|a, b| a.ordinal().cmp(&b.ordinal()));
            sorted
        })
    }

    #[must_use]
    /// Section with exactly this id.
    pub fn section_by_id(&self, id: &str) -> Option<&Section> {
        self.all_sections().iter().find(|section| section.id == id)
    }

    #[must_use]
    /// Subsection with this id, retrying with surrounding whitespace ignored.
    pub fn subsection_by_id(&self, id: &str) -> Option<&Subsection> {
        let subsections = self.all_subsections();
        let found = subsections.iter().find(|sub| sub.id == id).or_else(|| {
            tracing::debug!(id, "exact match not found, trying trimmed ids");
            let wanted = id.trim();
            subsections.iter().find(|sub| sub.id.trim() == wanted)
        });
        tracing::debug!(id, found = found.is_some(), "subsection lookup");
        found
    }

    #[must_use]
    /// Previous and next subsections around `id` in reading order.
    ///
    /// `id` resolves like [`subsection_by_id`](Self::subsection_by_id); an
    /// unknown id has neither neighbour.
    pub fn adjacent(&self, id: &str) -> Adjacent<'_> {
        let Some(current) = self.subsection_by_id(id) else {
            return Adjacent::default();
        };
        let order = self.reading_order();
        let Some(pos) = order.iter().position(|sub| sub.id == current.id) else {
            return Adjacent::default();
        };
        Adjacent {
            previous: pos.checked_sub(1).and_then(|i| order.get(i)),
            next: order.get(pos + 1),
        }
    }

    /// Drop every cached view so the next query re-reads the source.
    pub fn invalidate(&mut self) {
        self.sections.take();
        self.subsections.take();
        self.reading_order.take();
    }
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;

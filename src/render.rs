//! Plain-text renderings of the outline for terminal output.
//!
//! The table of contents draws sections and their subsections with box-drawing
//! characters. The page view shows one subsection with a breadcrumb, its
//! paragraphs, and links to its neighbours in reading order.

use crate::index::DocumentIndex;
use crate::section::{Section, Subsection};
use std::fmt::Write;

fn branch(is_last: bool) -> &'static str {
    if is_last {
        "└── "
    } else {
        "├── "
    }
}

/// Subsection rows continue the section's vertical rule unless it was the last section.
fn nested_branch(section_last: bool, is_last: bool) -> String {
    let rule = if section_last { "    " } else { "│   " };
    format!("{rule}{}", branch(is_last))
}

/// Subsection titles are listed without their first colon, e.g. `Benefits:` -> `Benefits`.
fn listing_title(title: &str) -> String {
    title.replacen(':', "", 1)
}

#[must_use]
/// Outline of every section with its subsections.
pub fn table_of_contents(sections: &[Section]) -> String {
    let mut out = String::new();

    for (i, section) in sections.iter().enumerate() {
        let section_last = i + 1 == sections.len();
        let _ = writeln!(
            out,
            "{}{}. {}",
            branch(section_last),
            section.id,
            section.title
        );

        for (j, sub) in section.subsections.iter().enumerate() {
            let sub_last = j + 1 == section.subsections.len();
            let _ = writeln!(
                out,
                "{}{} {}",
                nested_branch(section_last, sub_last),
                sub.id,
                listing_title(&sub.title)
            );
        }
    }

    out
}

fn link(sub: &Subsection) -> String {
    format!("{} {}", sub.id, sub.title)
}

#[must_use]
/// Page for one subsection, or `None` if `id` is unknown.
pub fn subsection_page(index: &DocumentIndex, id: &str) -> Option<String> {
    let sub = index.subsection_by_id(id)?;
    let section_title = index
        .section_by_id(&sub.parent_id)
        .map_or("", |section| section.title.as_str());

    let mut out = String::new();
    let _ = writeln!(out, "Home / Section {}: {}", sub.parent_id, section_title);
    let _ = writeln!(out, "{}", link(sub));
    let _ = writeln!(out, "{}", "=".repeat(link(sub).chars().count()));

    for paragraph in sub.paragraphs() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{paragraph}");
    }

    let adjacent = index.adjacent(&sub.id);
    let previous = adjacent
        .previous
        .map(|p| format!("← {}", link(p)))
        .unwrap_or_default();
    let next = adjacent
        .next
        .map(|n| format!("{} →", link(n)))
        .unwrap_or_default();

    if !previous.is_empty() || !next.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "-".repeat(40));
        if !previous.is_empty() {
            let _ = writeln!(out, "{previous}");
        }
        if !next.is_empty() {
            let _ = writeln!(out, "{next}");
        }
    }

    Some(out)
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;

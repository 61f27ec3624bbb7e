use super::OutlineFormat;
use crate::formats::{capture, Format};

fn section(line: &str) -> Option<(&str, &str)> {
    capture(OutlineFormat.section_heading(), line)
}

fn subsection(line: &str) -> Option<(&str, &str)> {
    capture(OutlineFormat.subsection_heading(), line)
}

#[test]
fn test_section_heading_forms() {
    assert_eq!(
        section("## 1. Introduction to MCP"),
        Some(("1", "Introduction to MCP"))
    );
    assert_eq!(section("## 12 No Dot"), Some(("12", "No Dot")));
    assert_eq!(section("##\t4.\tTabs"), Some(("4", "Tabs")));
}

#[test]
fn test_section_heading_rejects() {
    assert_eq!(section("### 1.1 Sub"), None);
    assert_eq!(section(" ## 1. Indented"), None);
    assert_eq!(section("## Intro"), None);
    assert_eq!(section("##1. Tight"), None);
    assert_eq!(section("## 1."), None);
    assert_eq!(section("## 1.1 Dotted"), None);
}

#[test]
fn test_subsection_heading_forms() {
    assert_eq!(
        subsection("### 1.1 Core Purpose and High-Level Benefits:"),
        Some(("1.1", "Core Purpose and High-Level Benefits:"))
    );
    assert_eq!(subsection("### 10.12 Late"), Some(("10.12", "Late")));
}

#[test]
fn test_subsection_heading_rejects() {
    assert_eq!(subsection("### 1 Missing minor"), None);
    assert_eq!(subsection("### 1. Dot only"), None);
    assert_eq!(subsection("## 1.1 Wrong level"), None);
    assert_eq!(subsection("  ### 1.1 Indented"), None);
    assert_eq!(subsection("#### 1.1 Too deep"), None);
}

#[test]
fn test_non_ascii_digits_are_not_ids() {
    assert_eq!(section("## ١. Arabic-Indic"), None);
}

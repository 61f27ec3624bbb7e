use super::{error_body, run, Command, Failure};
use outliner::{DocumentIndex, OutlineError};

const SAMPLE: &str = "## 1. Introduction
### 1.1 Overview
First paragraph.
### 1.2 Details
Some details.
";

fn not_found_message(command: &Command) -> String {
    let index = DocumentIndex::from_text(SAMPLE);
    match run(&index, command) {
        Err(failure @ Failure::NotFound(_)) => {
            assert_eq!(failure.status(), 2, "Unknown ids exit with 2");
            failure.message()
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_unknown_section_is_not_found() {
    let message = not_found_message(&Command::Section { id: "9".to_string() });
    assert_eq!(message, "Section with ID 9 not found");
}

#[test]
fn test_unknown_subsection_is_not_found() {
    let message = not_found_message(&Command::Subsection {
        id: "9.9".to_string(),
    });
    assert_eq!(message, "Subsection with ID 9.9 not found");
}

#[test]
fn test_adjacent_and_show_report_unknown_ids() {
    assert_eq!(
        not_found_message(&Command::Adjacent {
            id: "1.3".to_string()
        }),
        "Subsection with ID 1.3 not found"
    );
    assert_eq!(
        not_found_message(&Command::Show {
            id: "1.3".to_string()
        }),
        "Subsection with ID 1.3 not found"
    );
}

#[test]
fn test_known_ids_succeed() {
    let index = DocumentIndex::from_text(SAMPLE);

    assert!(run(&index, &Command::Section { id: "1".to_string() }).is_ok());
    assert!(run(&index, &Command::Subsection { id: " 1.2 ".to_string() }).is_ok());
    assert!(run(&index, &Command::Adjacent { id: "1.1".to_string() }).is_ok());
    assert!(run(&index, &Command::Show { id: "1.2".to_string() }).is_ok());
    assert!(run(&index, &Command::Toc).is_ok());
}

#[test]
fn test_missing_source_is_a_fault_for_every_command() {
    let dir = tempfile::tempdir().unwrap();
    let index = DocumentIndex::new(dir.path().join("absent.md"));

    for command in [
        Command::Sections,
        Command::Subsections,
        Command::Toc,
        Command::Subsection {
            id: "1.1".to_string(),
        },
    ] {
        match run(&index, &command) {
            Err(failure @ Failure::Fault(OutlineError::SourceUnavailable { .. })) => {
                assert_eq!(failure.status(), 1, "Unreadable source exits with 1");
                assert!(failure.message().contains("absent.md"));
            }
            other => panic!("Expected SourceUnavailable, got {other:?}"),
        }
    }
}

#[test]
fn test_error_body_envelope() {
    let body: serde_json::Value =
        serde_json::from_str(&error_body("Subsection with ID 9.9 not found")).unwrap();

    assert_eq!(
        body,
        serde_json::json!({ "error": "Subsection with ID 9.9 not found" })
    );
}

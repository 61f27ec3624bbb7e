use super::{Ordinal, Subsection};

fn sub(id: &str, content: &str) -> Subsection {
    Subsection {
        id: id.to_string(),
        title: "t".to_string(),
        content: content.to_string(),
        parent_id: "1".to_string(),
    }
}

#[test]
fn test_ordinal_is_numeric_not_lexicographic() {
    assert!(Ordinal::parse("2.9") < Ordinal::parse("2.10"));
    assert!(Ordinal::parse("2.10") > Ordinal::parse("2.2"));
    assert!(Ordinal::parse("9.99") < Ordinal::parse("10.1"));
    assert!(Ordinal::parse("1.2") < Ordinal::parse("2.1"));
}

#[test]
fn test_ordinal_ignores_leading_zeros_and_whitespace() {
    assert_eq!(Ordinal::parse("1.01"), Ordinal::parse("1.1"));
    assert_eq!(Ordinal::parse(" 3.4 "), Ordinal::parse("3.4"));
}

#[test]
fn test_ordinal_handles_ids_beyond_u64() {
    let huge = "99999999999999999999999.1";
    assert!(Ordinal::parse("1.1") < Ordinal::parse(huge));
}

#[test]
fn test_ordinal_non_numeric_sorts_first() {
    assert!(Ordinal::parse("x.1") < Ordinal::parse("0.1"));
    assert!(Ordinal::parse("3") < Ordinal::parse("3.0"));
}

#[test]
fn test_paragraphs_split_on_blank_lines() {
    let s = sub("1.1", "First paragraph.\n\nSecond\nstill second.\n\n\nThird.");
    let paragraphs: Vec<&str> = s.paragraphs().collect();

    assert_eq!(
        paragraphs,
        vec!["First paragraph.", "Second\nstill second.", "Third."]
    );
}

#[test]
fn test_paragraphs_of_empty_content() {
    assert_eq!(sub("1.1", "").paragraphs().count(), 0);
}

#[test]
fn test_json_uses_camel_case_parent_id() {
    let json = serde_json::to_value(sub("1.1", "body")).unwrap();

    assert_eq!(json["parentId"], "1");
    assert_eq!(json["content"], "body");
    assert!(json.get("parent_id").is_none());
}

//! Structured-text encoding of CURIEs and namespace tables.
//!
//! A CURIE field is written in its safe form `[scheme:reference]`; the empty
//! CURIE is written as `""`. Non-empty values without brackets are rejected.

use serde::{Deserialize, Serialize};

use curie::{Curie, Namespaces};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    id: Curie,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Linked {
    id: Curie,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    parent: Option<Curie>,
    #[serde(default)]
    friends: Vec<Curie>,
}

#[test]
fn encode_safe_form() {
    for (text, json) in [
        ("", r#"{"id":""}"#),
        ("a:", r#"{"id":"[a:]"}"#),
        ("b", r#"{"id":"[b]"}"#),
        ("a:b", r#"{"id":"[a:b]"}"#),
        ("a:b/c", r#"{"id":"[a:b/c]"}"#),
        ("a:b/c/d", r#"{"id":"[a:b/c/d]"}"#),
    ] {
        let record = Record {
            id: Curie::parse(text).unwrap(),
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}

#[test]
fn decode_safe_form() {
    for text in ["", "a:", "b", "a:b", "a:b/c", "a:b/c/d"] {
        let id = Curie::parse(text).unwrap();
        let json = serde_json::to_string(&Record { id: id.clone() }).unwrap();
        let record: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record.id, id);
    }
}

#[test]
fn decode_rejects_bare_curie() {
    let result = serde_json::from_str::<Record>(r#"{"id":"a:b"}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("expected safe form"), "{err}");
}

#[test]
fn decode_rejects_unbalanced_brackets() {
    assert!(serde_json::from_str::<Record>(r#"{"id":"[a:b"}"#).is_err());
    assert!(serde_json::from_str::<Record>(r#"{"id":"a:b]"}"#).is_err());
}

#[test]
fn decode_rejects_non_string() {
    assert!(serde_json::from_str::<Record>(r#"{"id":100}"#).is_err());
}

#[test]
fn linked_data() {
    let parent = Curie::new("a", "b/c");
    let person = Linked {
        id: parent.join(["d"]),
        parent: Some(parent.clone()),
        friends: vec![Curie::new("a", "x"), Curie::EMPTY],
    };

    let json = serde_json::to_string(&person).unwrap();
    assert_eq!(
        json,
        r#"{"id":"[a:b/c/d]","parent":"[a:b/c]","friends":["[a:x]",""]}"#
    );

    let back: Linked = serde_json::from_str(&json).unwrap();
    assert_eq!(back, person);
}

#[test]
fn namespaces_load_from_map() {
    let ns: Namespaces = serde_json::from_str(
        r#"{"wiki":"http://en.wikipedia.org/wiki/","ex":"https://example.com/"}"#,
    )
    .unwrap();

    assert_eq!(ns.len(), 2);
    assert_eq!(ns.lookup("wiki"), Some("http://en.wikipedia.org/wiki/"));
    assert_eq!(
        ns.uri(&Curie::new("ex", "a/b")),
        "https://example.com/a/b"
    );
}

#[test]
fn namespaces_serialize_ordered() {
    let ns = Namespaces::new()
        .with("wiki", "http://en.wikipedia.org/wiki/")
        .with("ex", "https://example.com/");
    assert_eq!(
        serde_json::to_string(&ns).unwrap(),
        r#"{"ex":"https://example.com/","wiki":"http://en.wikipedia.org/wiki/"}"#
    );
}

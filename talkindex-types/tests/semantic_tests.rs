use pretty_assertions::assert_eq;
use proptest::prelude::*;
use talkindex_types::{
    ApiCall, PageId, PropertyKey, PropertyValue, SemanticData, Statement, NS_TOPIC,
};

fn key(k: &str) -> PropertyKey {
    PropertyKey::new(k).unwrap()
}

fn topic_page() -> PageId {
    PageId::new(NS_TOPIC, "Topic:Example/T1").unwrap()
}

// ── PropertyKey ──────────────────────────────────────────────────

#[test]
fn property_key_rejects_blank_and_whitespace() {
    assert!(PropertyKey::new("").is_err());
    assert!(PropertyKey::new("has owner").is_err());
    assert!(PropertyKey::new("_TOPIC_OWNER").is_ok());
}

// ── SemanticData ─────────────────────────────────────────────────

#[test]
fn new_data_has_subject_and_no_statements() {
    let data = SemanticData::new(topic_page());
    assert_eq!(data.subject(), Some(&topic_page()));
    assert!(data.is_empty());
}

#[test]
fn subjectless_data() {
    let data = SemanticData::without_subject();
    assert!(data.subject().is_none());
}

#[test]
fn values_of_filters_by_property() {
    let mut data = SemanticData::new(topic_page());
    data.add(key("A"), PropertyValue::Text("one".into()));
    data.add(key("B"), PropertyValue::Number(2.0));
    data.add(key("A"), PropertyValue::Text("three".into()));

    let a = key("A");
    let values: Vec<_> = data.values_of(&a).cloned().collect();
    assert_eq!(
        values,
        vec![
            PropertyValue::Text("one".into()),
            PropertyValue::Text("three".into())
        ]
    );
}

#[test]
fn property_value_json_shape() {
    let stmt = Statement::new(key("_TOPIC_OWNER"), PropertyValue::Boolean(true));
    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(json["property"], "_TOPIC_OWNER");
    assert_eq!(json["value"]["type"], "boolean");
    assert_eq!(json["value"]["value"], true);
}

proptest! {
    #[test]
    fn appending_never_removes_or_reorders(
        existing in proptest::collection::vec("[a-z]{1,8}", 0..10),
        appended in proptest::collection::vec("[a-z]{1,8}", 0..10),
    ) {
        let mut data = SemanticData::new(topic_page());
        for text in &existing {
            data.add(key("P"), PropertyValue::Text(text.clone()));
        }
        let before = data.statements().to_vec();
        for text in &appended {
            data.add(key("Q"), PropertyValue::Text(text.clone()));
        }
        prop_assert_eq!(&data.statements()[..before.len()], &before[..]);
        prop_assert_eq!(data.len(), existing.len() + appended.len());
    }
}

// ── ApiCall ──────────────────────────────────────────────────────

#[test]
fn api_call_param_trims_and_skips_blank() {
    let call = ApiCall::write("discussion")
        .with_param("page", "  Topic:Example/T1 ")
        .with_param("blank", "   ");

    assert!(call.write_mode);
    assert_eq!(call.param("page"), Some("Topic:Example/T1"));
    assert_eq!(call.param("blank"), None);
    assert_eq!(call.param("missing"), None);
}

#[test]
fn read_call_is_not_write_mode() {
    assert!(!ApiCall::read("discussion").write_mode);
}

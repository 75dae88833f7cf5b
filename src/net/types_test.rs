use super::*;

#[test]
fn training_request_parses_full_payload() {
    let raw = r#"{
        "id": "17",
        "person": "Ada Lovelace",
        "email": "ada@example.org",
        "state": "Pending",
        "group_name": "spring-2026"
    }"#;
    let req: TrainingRequest = serde_json::from_str(raw).expect("parses");
    assert_eq!(req.id, "17");
    assert_eq!(req.person, "Ada Lovelace");
    assert_eq!(req.email, "ada@example.org");
    assert_eq!(req.state, "Pending");
    assert_eq!(req.group_name.as_deref(), Some("spring-2026"));
}

#[test]
fn training_request_defaults_missing_email_and_group() {
    let raw = r#"{"id": "3", "person": "Grace Hopper", "state": "Pending"}"#;
    let req: TrainingRequest = serde_json::from_str(raw).expect("parses");
    assert_eq!(req.email, "");
    assert_eq!(req.group_name, None);
}

#[test]
fn training_request_list_parses() {
    let raw = r#"[
        {"id": "1", "person": "A", "email": "a@example.org", "state": "Pending"},
        {"id": "2", "person": "B", "email": "b@example.org", "state": "Accepted"}
    ]"#;
    let list: Vec<TrainingRequest> = serde_json::from_str(raw).expect("parses");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "1");
    assert_eq!(list[1].state, "Accepted");
}

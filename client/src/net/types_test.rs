use super::*;

// =============================================================
// Helpers
// =============================================================

fn ana() -> UserRecord {
    UserRecord {
        id: "123".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Ruiz".to_owned(),
        email: "ana@x.com".to_owned(),
    }
}

fn directory(users: Vec<UserRecord>) -> UserDirectory {
    UserDirectory { users }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn user_directory_parses_spanish_field_names() {
    let raw = r#"{"usuarios":[{"documento":"123","nombre":"Ana","apellido":"Ruiz","email":"ana@x.com"}]}"#;
    let parsed: UserDirectory = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed, directory(vec![ana()]));
}

#[test]
fn user_directory_rejects_missing_collection() {
    assert!(serde_json::from_str::<UserDirectory>(r#"{"users":[]}"#).is_err());
}

#[test]
fn user_record_rejects_numeric_documento() {
    let raw = r#"{"documento":123,"nombre":"Ana","apellido":"Ruiz","email":"ana@x.com"}"#;
    assert!(serde_json::from_str::<UserRecord>(raw).is_err());
}

#[test]
fn user_record_serializes_wire_names() {
    let value = serde_json::to_value(ana()).unwrap();
    assert_eq!(value["documento"], "123");
    assert_eq!(value["nombre"], "Ana");
    assert_eq!(value["apellido"], "Ruiz");
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_matches_exact_id() {
    let dir = directory(vec![ana()]);
    assert_eq!(dir.find("123").map(UserRecord::full_name).as_deref(), Some("Ana Ruiz"));
}

#[test]
fn find_does_not_trim_or_prefix_match() {
    let dir = directory(vec![ana()]);
    assert!(dir.find("12").is_none());
    assert!(dir.find(" 123").is_none());
    assert!(dir.find("1234").is_none());
}

#[test]
fn find_returns_first_of_duplicates() {
    let mut second = ana();
    second.first_name = "Otra".to_owned();
    let dir = directory(vec![ana(), second]);
    assert_eq!(dir.find("123").unwrap().first_name, "Ana");
}

#[test]
fn duplicate_ids_reports_each_id_once() {
    let mut other = ana();
    other.id = "9".to_owned();
    let dir = directory(vec![ana(), other, ana(), ana()]);
    assert_eq!(dir.duplicate_ids(), vec!["123"]);
}

#[test]
fn duplicate_ids_empty_for_unique_collection() {
    assert!(directory(vec![ana()]).duplicate_ids().is_empty());
}

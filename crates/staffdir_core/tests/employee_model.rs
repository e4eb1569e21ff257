use chrono::NaiveDate;
use staffdir_core::{Address, Employee, Gender, MaritalStatus};
use uuid::Uuid;

#[test]
fn candidate_sets_defaults() {
    let employee = Employee::candidate("Alpha", "alpha@acme.de");

    assert!(employee.id.is_none());
    assert!(!employee.is_persisted());
    assert!(!employee.has_newsletter);
    assert_eq!(employee.birth_date, None);
    assert_eq!(employee.gender, None);
    assert_eq!(employee.marital_status, None);
    assert_eq!(employee.address, None);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::from_u128(0x60);
    let employee = Employee::with_id(id, "Phi", "phi@acme.cn")
        .born_on(NaiveDate::from_ymd_opt(2022, 1, 6).unwrap())
        .with_gender(Gender::Diverse)
        .with_marital_status(MaritalStatus::Widowed)
        .living_at(Address::new("66666", "Freiburg"))
        .subscribed(true);

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["birth_date"], "2022-01-06");
    assert_eq!(json["gender"], "diverse");
    assert_eq!(json["marital_status"], "widowed");
    assert_eq!(json["address"]["postal_code"], "66666");
    assert_eq!(json["has_newsletter"], true);

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn minimal_payload_decodes_into_candidate() {
    let decoded: Employee = serde_json::from_value(serde_json::json!({
        "surname": "Alpha",
        "email": "alpha@acme.de"
    }))
    .unwrap();

    assert_eq!(decoded, Employee::candidate("Alpha", "alpha@acme.de"));
}

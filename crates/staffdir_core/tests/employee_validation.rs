use chrono::NaiveDate;
use staffdir_core::{Address, Employee, EmployeeValidator, Validator, Violation};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn validator() -> EmployeeValidator {
    EmployeeValidator::new().with_today(today())
}

fn fields(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.field.as_str()).collect()
}

#[test]
fn complete_record_has_no_violations() {
    let employee = Employee::candidate("von der Heide", "heide@acme.de")
        .born_on(NaiveDate::from_ymd_opt(1980, 2, 29).unwrap())
        .living_at(Address::new("76133", "Karlsruhe"));

    assert!(validator().validate(&employee).is_empty());
}

#[test]
fn optional_fields_may_be_absent() {
    let employee = Employee::candidate("Alpha", "alpha@acme.de");
    assert!(validator().validate(&employee).is_empty());
}

#[test]
fn every_violated_field_is_reported() {
    let employee = Employee::candidate("alpha", "not-an-email")
        .born_on(today())
        .living_at(Address::new("1234", " "));

    let violations = validator().validate(&employee);
    assert_eq!(
        fields(&violations),
        vec![
            "surname",
            "email",
            "birth_date",
            "address.postal_code",
            "address.city"
        ]
    );
    assert!(violations.iter().all(|v| !v.message.is_empty()));
}

#[test]
fn birth_date_must_be_strictly_in_the_past() {
    let yesterday = today().pred_opt().unwrap();
    let tomorrow = today().succ_opt().unwrap();

    let past = Employee::candidate("Alpha", "a@acme.de").born_on(yesterday);
    let future = Employee::candidate("Alpha", "a@acme.de").born_on(tomorrow);

    assert!(validator().validate(&past).is_empty());
    assert_eq!(fields(&validator().validate(&future)), vec!["birth_date"]);
}

#[test]
fn postal_code_rule_is_configurable() {
    let swiss = EmployeeValidator::with_postal_code_pattern(r"[0-9]{4}")
        .unwrap()
        .with_today(today());
    let bern = Employee::candidate("Alpha", "a@acme.ch").living_at(Address::new("3011", "Bern"));
    let karlsruhe =
        Employee::candidate("Alpha", "a@acme.de").living_at(Address::new("76133", "Karlsruhe"));

    assert!(swiss.validate(&bern).is_empty());
    assert_eq!(
        fields(&swiss.validate(&karlsruhe)),
        vec!["address.postal_code"]
    );
    assert_eq!(
        fields(&validator().validate(&bern)),
        vec!["address.postal_code"]
    );
}

#[test]
fn invalid_postal_code_pattern_is_rejected() {
    assert!(EmployeeValidator::with_postal_code_pattern("[0-9").is_err());
}

#[test]
fn violation_display_names_the_field() {
    let violation = Violation::new("email", "email must be a valid address");
    assert_eq!(violation.to_string(), "email: email must be a valid address");
}

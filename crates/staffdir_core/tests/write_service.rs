use chrono::NaiveDate;
use staffdir_core::{
    Address, Employee, EmployeeStore, EmployeeValidator, EmployeeWriteService, Gender,
    MaritalStatus, NotFoundTarget, PatchOperation, ServiceError, Validator, Violation,
};
use std::collections::HashSet;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use uuid::Uuid;

fn candidate(surname: &str, email: &str) -> Employee {
    Employee::candidate(surname, email)
        .born_on(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap())
        .with_gender(Gender::Female)
        .with_marital_status(MaritalStatus::Single)
        .living_at(Address::new("76133", "Karlsruhe"))
}

fn writer_for(store: &EmployeeStore) -> EmployeeWriteService {
    EmployeeWriteService::new(store.clone(), Arc::new(EmployeeValidator::new()))
}

/// Store holding `a@x.com` under id 1 and `b@x.com` under id 2.
fn two_record_store() -> EmployeeStore {
    let store = EmployeeStore::new();
    store
        .write()
        .load([
            Employee::with_id(Uuid::from_u128(1), "Alpha", "a@x.com"),
            Employee::with_id(Uuid::from_u128(2), "Beta", "b@x.com"),
        ])
        .unwrap();
    store
}

#[test]
fn create_stores_candidate_with_generated_id() {
    let store = EmployeeStore::new();
    let writer = writer_for(&store);

    let created = writer.create(candidate("Neuernachname", "email@test.de")).unwrap();

    let id = created.id.expect("created record carries an id");
    assert_eq!(created.email, "email@test.de");
    assert_eq!(
        created.address.as_ref().map(|a| a.postal_code.as_str()),
        Some("76133")
    );
    assert_eq!(store.find_by_id(id), Some(created));
}

#[test]
fn created_ids_are_unique() {
    let store = EmployeeStore::new();
    let writer = writer_for(&store);

    let ids: HashSet<_> = (0..20)
        .map(|n| {
            writer
                .create(candidate("Alpha", &format!("alpha{n}@acme.de")))
                .unwrap()
                .id
                .unwrap()
        })
        .collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn create_accepts_apostrophe_and_non_ascii_local_parts() {
    let store = EmployeeStore::new();
    let writer = writer_for(&store);

    writer.create(candidate("Obrien", "o'brien@acme.de")).unwrap();
    writer.create(candidate("Mueller", "jürgen@acme.de")).unwrap();

    assert!(store.exists_by_email("o'brien@acme.de"));
    assert!(store.exists_by_email("jürgen@acme.de"));
}

#[test]
fn create_rejects_misplaced_dots_in_local_part() {
    let store = EmployeeStore::new();
    let writer = writer_for(&store);

    for email in ["a..b@acme.de", ".alpha@acme.de", "alpha.@acme.de"] {
        let err = writer.create(candidate("Alpha", email)).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["email"], "{email}");
    }
    assert!(store.is_empty());
}

#[test]
fn create_with_taken_email_fails() {
    let store = two_record_store();
    let writer = writer_for(&store);

    let err = writer.create(candidate("Gamma", "a@x.com")).unwrap_err();

    assert_eq!(err, ServiceError::EmailExists("a@x.com".to_string()));
    assert_eq!(store.len(), 2);
}

#[test]
fn create_reports_all_violations_before_checking_email() {
    let store = two_record_store();
    let writer = writer_for(&store);
    let invalid = Employee::candidate("gamma", "a@x.com").living_at(Address::new("abc", ""));

    let err = writer.create(invalid).unwrap_err();

    let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["surname", "address.postal_code", "address.city"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn create_rejects_future_birth_date() {
    let store = EmployeeStore::new();
    let writer = writer_for(&store);
    let unborn = candidate("Alpha", "alpha@acme.de").born_on(NaiveDate::from_ymd_opt(9999, 1, 1).unwrap());

    let err = writer.create(unborn).unwrap_err();
    assert!(matches!(err, ServiceError::ConstraintViolation(_)));
    assert!(store.is_empty());
}

#[test]
fn update_with_unchanged_email_succeeds() {
    let store = two_record_store();
    let writer = writer_for(&store);
    let id = Uuid::from_u128(1);

    let updated = writer.update(candidate("Neuernachname", "a@x.com"), id).unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(store.find_by_id(id).unwrap().surname, "Neuernachname");
}

#[test]
fn update_to_taken_email_fails_without_changes() {
    let store = two_record_store();
    let writer = writer_for(&store);
    let before = store.find_all();

    let err = writer
        .update(candidate("Alpha", "b@x.com"), Uuid::from_u128(1))
        .unwrap_err();

    assert_eq!(err, ServiceError::EmailExists("b@x.com".to_string()));
    assert_eq!(store.find_all(), before);
}

#[test]
fn update_to_free_email_releases_the_old_one() {
    let store = two_record_store();
    let writer = writer_for(&store);

    writer
        .update(candidate("Alpha", "c@x.com"), Uuid::from_u128(1))
        .unwrap();

    assert!(!store.exists_by_email("a@x.com"));
    let reused = writer.create(candidate("Gamma", "a@x.com")).unwrap();
    assert_ne!(reused.id, Some(Uuid::from_u128(1)));
}

#[test]
fn update_overrides_candidate_id() {
    let store = two_record_store();
    let writer = writer_for(&store);
    let target = Uuid::from_u128(2);
    let mut changed = candidate("Beta", "b@x.com");
    changed.id = Some(Uuid::from_u128(1));

    writer.update(changed, target).unwrap();

    assert_eq!(store.find_by_id(target).unwrap().surname, "Beta");
    assert_eq!(store.find_by_id(Uuid::from_u128(1)).unwrap().email, "a@x.com");
    assert_eq!(store.len(), 2);
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let store = two_record_store();
    let writer = writer_for(&store);
    let missing = Uuid::from_u128(77);

    let err = writer.update(candidate("Alpha", "z@x.com"), missing).unwrap_err();
    assert_eq!(err, ServiceError::NotFound(NotFoundTarget::Id(missing)));
}

#[test]
fn update_validates_before_existence() {
    let store = two_record_store();
    let writer = writer_for(&store);

    let err = writer
        .update(Employee::candidate("alpha", "a@x.com"), Uuid::from_u128(77))
        .unwrap_err();
    assert!(matches!(err, ServiceError::ConstraintViolation(_)));
}

#[test]
fn delete_is_idempotent() {
    let store = two_record_store();
    let writer = writer_for(&store);
    let id = Uuid::from_u128(1);

    writer.delete_by_id(id);
    writer.delete_by_id(id);

    assert!(store.find_by_id(id).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_of_unknown_id_keeps_store_intact() {
    let store = two_record_store();
    let writer = writer_for(&store);

    writer.delete_by_id(Uuid::from_u128(404));
    assert_eq!(store.len(), 2);
}

#[test]
fn concurrent_creates_with_same_email_admit_exactly_one() {
    let store = EmployeeStore::new();
    let writer = writer_for(&store);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| writer.create(candidate("Alpha", "race@acme.de"))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let created = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(created, 1);
    assert!(results.iter().filter_map(|r| r.as_ref().err()).all(
        |err| *err == ServiceError::EmailExists("race@acme.de".to_string())
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn concurrent_updates_cannot_both_claim_a_free_email() {
    let store = two_record_store();
    let writer = writer_for(&store);

    let results: Vec<_> = thread::scope(|scope| {
        let first = scope.spawn(|| writer.update(candidate("Alpha", "free@x.com"), Uuid::from_u128(1)));
        let second = scope.spawn(|| writer.update(candidate("Beta", "free@x.com"), Uuid::from_u128(2)));
        vec![first.join().unwrap(), second.join().unwrap()]
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let owners: Vec<_> = store
        .find_all()
        .into_iter()
        .filter(|e| e.email == "free@x.com")
        .collect();
    assert_eq!(owners.len(), 1);
}

/// Delegates to the default rules and stalls once on a record carrying
/// `surname`, after signalling that the stall began.
struct StallingValidator {
    surname: &'static str,
    started: Mutex<Option<Sender<()>>>,
    inner: EmployeeValidator,
}

impl Validator<Employee> for StallingValidator {
    fn validate(&self, value: &Employee) -> Vec<Violation> {
        if value.surname == self.surname {
            if let Some(started) = self.started.lock().unwrap().take() {
                started.send(()).unwrap();
                thread::sleep(Duration::from_millis(150));
            }
        }
        self.inner.validate(value)
    }
}

#[test]
fn patch_does_not_revert_a_concurrent_update() {
    let store = two_record_store();
    let id = Uuid::from_u128(1);
    let (started_tx, started_rx) = mpsc::channel();
    let writer = EmployeeWriteService::new(
        store.clone(),
        Arc::new(StallingValidator {
            surname: "Patched",
            started: Mutex::new(Some(started_tx)),
            inner: EmployeeValidator::new(),
        }),
    );
    let birth_date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let mut full = store.find_by_id(id).unwrap();
    full.birth_date = Some(birth_date);

    thread::scope(|scope| {
        let patching = scope.spawn(|| writer.patch(id, &[PatchOperation::replace("/surname", "Patched")]));
        started_rx.recv().unwrap();
        writer.update(full.clone(), id).unwrap();
        patching.join().unwrap().unwrap();
    });

    assert_eq!(store.find_by_id(id).unwrap().birth_date, Some(birth_date));
}

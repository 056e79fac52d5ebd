use chrono::NaiveDate;
use people_core::{Entity, Person};

fn person_with_id(id: i64) -> Person {
    let mut person = Person::new(
        "Katherine Johnson",
        NaiveDate::from_ymd_opt(1918, 8, 26).unwrap(),
    );
    person.set_id(id).unwrap();
    person
}

#[test]
fn as_json_uses_expected_wire_fields() {
    let person = person_with_id(3);

    assert_eq!(
        person.as_json(),
        serde_json::json!({
            "name": "Katherine Johnson",
            "date_of_birth": "1918-08-26",
            "id": 3
        })
    );
}

#[test]
fn as_json_writes_null_for_unset_id() {
    let person = Person::new("Unsaved", NaiveDate::from_ymd_opt(2001, 2, 3).unwrap());
    assert_eq!(person.as_json()["id"], serde_json::Value::Null);
}

#[test]
fn from_json_restores_an_equal_person() {
    let person = person_with_id(11);
    let decoded = Person::from_json(person.as_json()).unwrap();
    assert_eq!(decoded, person);
    assert_eq!(decoded.id(), Some(11));
}

#[test]
fn serde_encoding_matches_as_json() {
    let person = person_with_id(5);
    assert_eq!(serde_json::to_value(&person).unwrap(), person.as_json());
}

#[test]
fn from_json_rejects_non_iso_dates() {
    let value = serde_json::json!({
        "name": "Bad Date",
        "date_of_birth": "26/08/1918",
        "id": 1
    });
    assert!(Person::from_json(value).is_err());
}

#[test]
fn equality_covers_the_identifier() {
    let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let unsaved = Person::new("Alice", dob);
    let mut saved = Person::new("Alice", dob);
    assert_eq!(unsaved, saved);

    saved.set_id(1).unwrap();
    assert_ne!(unsaved, saved);
}

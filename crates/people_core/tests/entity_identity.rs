use chrono::NaiveDate;
use people_core::{Entity, EntityId, InvalidStateError, Person};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_person_has_unset_id() {
    let person = Person::new("Grace Hopper", date(1906, 12, 9));

    assert_eq!(person.name, "Grace Hopper");
    assert_eq!(person.date_of_birth, date(1906, 12, 9));
    assert_eq!(person.id(), None);
}

#[test]
fn set_and_get_id() {
    let mut person = Person::new("Grace Hopper", date(1906, 12, 9));
    person.set_id(42).unwrap();
    assert_eq!(person.id(), Some(42));
}

#[test]
fn second_set_id_fails_with_invalid_state() {
    let mut person = Person::new("Grace Hopper", date(1906, 12, 9));
    person.set_id(1).unwrap();

    let err = person.set_id(2).unwrap_err();
    assert_eq!(err, InvalidStateError::IdAlreadySet { current: 1 });
    assert!(err.to_string().contains("id cannot be changed once set"));
    assert_eq!(person.id(), Some(1));
}

#[test]
fn entity_id_converts_from_option() {
    assert_eq!(EntityId::from(None), EntityId::Unset);
    assert_eq!(EntityId::from(Some(9)), EntityId::Set(9));
    assert!(EntityId::Set(9).is_set());
}

proptest! {
    #[test]
    fn setting_id_twice_always_fails(first in any::<i64>(), second in any::<i64>()) {
        let mut person = Person::new("Someone", date(2000, 1, 1));
        person.set_id(first).unwrap();

        let err = person.set_id(second).unwrap_err();
        prop_assert_eq!(err, InvalidStateError::IdAlreadySet { current: first });
        prop_assert_eq!(person.id(), Some(first));
    }
}

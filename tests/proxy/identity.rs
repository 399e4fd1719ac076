//! Identity Stability Tests
//!
//! The handle's value must be the same allocation across any number of
//! updates, and clones of it handed out earlier must follow every update.

use crate::common::*;
use std::sync::Arc;

#[test]
fn value_keeps_same_reference_across_updates() {
    let factory = isolated_factory();
    let handle = factory
        .create::<dyn TestClass>(test_class("Init value", 1))
        .unwrap();

    let before = Arc::clone(handle.value());
    handle.update_value(test_class("Updated value", 2)).unwrap();

    assert_eq!(addr(&before), addr(handle.value()));
}

#[test]
fn identity_survives_many_updates() {
    let factory = isolated_factory();
    let handle = factory.create::<dyn Person>(person("p", 0)).unwrap();
    let before = addr(handle.value());

    for age in 1..=1_000 {
        handle.update_value(person("p", age)).unwrap();
    }

    assert_eq!(addr(handle.value()), before);
    assert_eq!(addr(handle.forwarder()), before);
}

#[test]
fn early_clones_follow_updates() {
    let factory = isolated_factory();
    let handle = factory.create::<dyn Person>(person("Alice", 30)).unwrap();

    // Held elsewhere in the program before any update happens.
    let held: Vec<Arc<dyn Person>> = (0..4).map(|_| Arc::clone(handle.value())).collect();

    handle.update_value(person("Bob", 40)).unwrap();

    for view in &held {
        assert_eq!(view.name(), "Bob");
        assert_eq!(view.age(), 40);
    }
}

#[test]
fn view_outlives_handle() {
    let factory = isolated_factory();
    let handle = factory.create::<dyn Person>(person("Alice", 30)).unwrap();
    let view = Arc::clone(handle.value());

    handle.update_value(person("Bob", 40)).unwrap();
    drop(handle);

    assert_eq!(view.name(), "Bob");
}

#[test]
fn forwarder_reports_its_type_and_instance() {
    let factory = isolated_factory();
    let first = factory.create::<dyn Person>(person("a", 1)).unwrap();
    let second = factory.create::<dyn Person>(person("b", 2)).unwrap();

    let ty = first.forwarder().forwarder_type();
    assert_eq!(ty.contract_name(), "Person");
    assert_eq!(ty.accessors(), &["name", "age"]);
    assert_eq!(first.forwarder().instance(), 1);
    assert_eq!(second.forwarder().instance(), 2);
    assert_eq!(ty.instances(), 2);
}

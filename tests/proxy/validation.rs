//! Input Validation Tests
//!
//! - Absent seeds and replacements fail with InvalidArgument
//! - Contracts with settable members or arguments fail with UnsupportedContract
//! - Failed creates publish nothing and build no instance

use crate::common::*;
use std::sync::Arc;

// ============================================================================
// InvalidArgument
// ============================================================================

#[test]
fn create_with_absent_value_fails() {
    let factory = isolated_factory();

    let err = factory.create_optional::<dyn Person>(None).unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(factory.registry().is_empty());
}

#[test]
fn create_with_present_optional_value_succeeds() {
    let factory = isolated_factory();
    let seed: Arc<dyn Person> = person("Alice", 30);

    let handle = factory.create_optional(Some(seed)).unwrap();

    assert_eq!(handle.value().name(), "Alice");
}

#[test]
fn update_with_absent_value_fails_and_keeps_current() {
    let factory = isolated_factory();
    let handle = factory.create::<dyn Person>(person("Alice", 30)).unwrap();

    let err = handle.update_optional(None).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidArgument {
            argument: "new_value",
            ..
        }
    ));
    assert_eq!(handle.value().name(), "Alice");
    assert_eq!(handle.forwarder().update_count(), 0);
}

#[test]
fn update_with_own_view_fails() {
    let factory = isolated_factory();
    let handle = factory.create::<dyn Person>(person("Alice", 30)).unwrap();

    let err = handle.update_value(Arc::clone(handle.value())).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(handle.value().age(), 30);
}

// ============================================================================
// UnsupportedContract
// ============================================================================

#[test]
fn settable_member_is_rejected() {
    let factory = isolated_factory();

    let err = factory
        .create::<dyn Thermostat>(Arc::new(FixedThermostat(20.0)))
        .unwrap_err();

    match err {
        Error::UnsupportedContract {
            contract, member, ..
        } => {
            assert_eq!(contract, "Thermostat");
            assert_eq!(member, Some("set_target"));
        }
        other => panic!("Wrong error variant: {:?}", other),
    }
    assert!(!factory.registry().contains::<dyn Thermostat>());
}

#[test]
fn member_with_arguments_is_rejected() {
    let factory = isolated_factory();

    let err = factory
        .create::<dyn Catalog>(Arc::new(EmptyCatalog))
        .unwrap_err();

    assert!(err.is_unsupported_contract());
    assert!(err.to_string().contains("lookup"));
}

#[test]
fn rejection_is_repeatable() {
    let factory = isolated_factory();

    for _ in 0..3 {
        let result = factory.create::<dyn Thermostat>(Arc::new(FixedThermostat(1.0)));
        assert!(result.unwrap_err().is_unsupported_contract());
    }
    assert_eq!(factory.registry().syntheses(), 0);
}

#[test]
fn absent_seed_is_reported_before_contract_check() {
    let factory = isolated_factory();

    let err = factory
        .create_optional::<dyn Thermostat>(None)
        .unwrap_err();

    assert!(err.is_invalid_argument());
}

// ============================================================================
// Empty Contracts
// ============================================================================

#[test]
fn empty_contract_is_accepted_by_default() {
    let factory = isolated_factory();

    let handle = factory.create::<dyn Opaque>(Arc::new(OpaqueValue)).unwrap();

    assert!(handle.forwarder().forwarder_type().shape().is_empty());
}

#[test]
fn empty_contract_is_rejected_by_strict_config() {
    let factory = isolated_factory_with(FactoryConfig::strict());

    let err = factory
        .create::<dyn Opaque>(Arc::new(OpaqueValue))
        .unwrap_err();

    assert!(err.is_unsupported_contract());
}

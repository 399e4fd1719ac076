//! Property Tests
//!
//! For arbitrary values and update sequences:
//! - the forwarder answers exactly what the current value answers
//! - the view's identity never changes
//! - handles never observe each other's updates

use crate::common::*;
use proptest::prelude::*;
use std::sync::Arc;

fn record() -> impl Strategy<Value = PersonRecord> {
    ("[a-zA-Z ]{0,16}", any::<u32>()).prop_map(|(name, age)| PersonRecord { name, age })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn forwarded_accessors_match_value(value in record()) {
        let factory = isolated_factory();
        let handle = factory.create::<dyn Person>(Arc::new(value.clone())).unwrap();

        prop_assert_eq!(handle.value().name(), value.name.clone());
        prop_assert_eq!(handle.value().age(), value.age);
    }

    #[test]
    fn last_update_wins_and_identity_holds(
        initial in record(),
        updates in prop::collection::vec(record(), 1..20),
    ) {
        let factory = isolated_factory();
        let handle = factory.create::<dyn Person>(Arc::new(initial)).unwrap();
        let identity = addr(handle.value());

        for update in &updates {
            handle.update_value(Arc::new(update.clone())).unwrap();
            prop_assert_eq!(handle.value().name(), update.name.clone());
            prop_assert_eq!(handle.value().age(), update.age);
            prop_assert_eq!(addr(handle.value()), identity);
        }

        prop_assert_eq!(handle.forwarder().update_count(), updates.len() as u64);
    }

    #[test]
    fn handles_do_not_share_backing(
        seeds in prop::collection::vec(record(), 2..6),
        target in any::<prop::sample::Index>(),
        replacement in record(),
    ) {
        let factory = isolated_factory();
        let handles: Vec<_> = seeds
            .iter()
            .map(|seed| factory.create::<dyn Person>(Arc::new(seed.clone())).unwrap())
            .collect();

        let target = target.index(handles.len());
        handles[target].update_value(Arc::new(replacement.clone())).unwrap();

        for (i, (handle, seed)) in handles.iter().zip(&seeds).enumerate() {
            let expected = if i == target { &replacement } else { seed };
            prop_assert_eq!(handle.value().name(), expected.name.clone());
            prop_assert_eq!(handle.value().age(), expected.age);
        }
        prop_assert_eq!(factory.registry().syntheses(), 1);
    }
}

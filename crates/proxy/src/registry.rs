//! Forwarder type registry
//!
//! Each contract gets one [`ForwarderType`]: its validated shape and the
//! bookkeeping shared by every forwarder instance of that contract. Building
//! one means introspecting and validating the contract, so it happens at most
//! once per contract per registry; later lookups are a shard read.
//!
//! ## Single-flight publication
//!
//! ```text
//! resolve::<C>()
//!   1. fast path: entry exists and its cell is initialised → clone, done
//!   2. get-or-insert the contract's empty OnceCell (shard lock, brief)
//!   3. initialise the cell outside the shard lock
//!        - one caller runs synthesis, same-contract callers block on the cell
//!        - callers for other contracts use other cells and never wait here
//!   4. on validation failure nothing is published; the next call retries
//! ```
//!
//! The process-wide registry behind [`ForwarderRegistry::global`] is never
//! drained: a published forwarder type lives as long as the process.

use crate::contract::Contract;
use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use rustc_hash::FxHasher;
use std::any::TypeId;
use std::fmt;
use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use swapcell_core::{ContractShape, Result};
use tracing::debug;

type FxBuildHasher = BuildHasherDefault<FxHasher>;
type TypeCell = Arc<OnceCell<Arc<ForwarderType>>>;

/// Process-wide registry shared by default factories
static GLOBAL_REGISTRY: Lazy<Arc<ForwarderRegistry>> =
    Lazy::new(|| Arc::new(ForwarderRegistry::new()));

/// The synthesized forwarding implementation of one contract
pub struct ForwarderType {
    id: u64,
    type_id: TypeId,
    shape: &'static ContractShape,
    accessors: Box<[&'static str]>,
    instances: AtomicU64,
}

impl ForwarderType {
    /// Registry-unique id, in publication order starting at 1
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `TypeId` of the contract's trait-object type
    pub fn contract_type_id(&self) -> TypeId {
        self.type_id
    }

    /// Contract name
    pub fn contract_name(&self) -> &'static str {
        self.shape.name
    }

    /// Validated contract shape
    pub fn shape(&self) -> &'static ContractShape {
        self.shape
    }

    /// Names of the forwarded accessors, in declaration order
    pub fn accessors(&self) -> &[&'static str] {
        &self.accessors
    }

    /// Number of forwarder instances created from this type
    pub fn instances(&self) -> u64 {
        self.instances.load(Ordering::Relaxed)
    }

    pub(crate) fn record_instance(&self) -> u64 {
        self.instances.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl fmt::Debug for ForwarderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwarderType")
            .field("id", &self.id)
            .field("contract", &self.shape.name)
            .field("accessors", &self.accessors)
            .field("instances", &self.instances())
            .finish()
    }
}

/// Cache of forwarder types keyed by contract identity
pub struct ForwarderRegistry {
    types: DashMap<TypeId, TypeCell, FxBuildHasher>,
    next_id: AtomicU64,
}

impl ForwarderRegistry {
    /// Create an empty registry
    ///
    /// Factories use [`ForwarderRegistry::global`] unless told otherwise; a
    /// private registry keeps its own publication history.
    pub fn new() -> Self {
        Self {
            types: DashMap::with_hasher(FxBuildHasher::default()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The process-wide registry
    pub fn global() -> Arc<ForwarderRegistry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Return the forwarder type for `C`, synthesizing it on first use
    ///
    /// # Errors
    ///
    /// Returns [`swapcell_core::Error::UnsupportedContract`] if the contract
    /// shape fails validation. Nothing is published in that case.
    pub fn resolve<C: Contract + ?Sized>(&self) -> Result<Arc<ForwarderType>> {
        let key = TypeId::of::<C>();

        if let Some(published) = self
            .types
            .get(&key)
            .and_then(|entry| entry.value().get().cloned())
        {
            return Ok(published);
        }

        // Clone the cell out so the shard lock is released before synthesis.
        let cell: TypeCell = self
            .types
            .entry(key)
            .or_insert_with(TypeCell::default)
            .value()
            .clone();

        cell.get_or_try_init(|| self.synthesize::<C>()).cloned()
    }

    /// The published forwarder type for `C`, if any
    pub fn get<C: Contract + ?Sized>(&self) -> Option<Arc<ForwarderType>> {
        self.types
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.value().get().cloned())
    }

    /// True if a forwarder type for `C` has been published
    pub fn contains<C: Contract + ?Sized>(&self) -> bool {
        self.get::<C>().is_some()
    }

    /// Number of published forwarder types
    pub fn len(&self) -> usize {
        self.types
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    /// True if nothing has been published
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of forwarder types ever synthesized by this registry
    pub fn syntheses(&self) -> u64 {
        self.next_id.load(Ordering::Acquire) - 1
    }

    /// Names of the published contracts, sorted
    pub fn contract_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .types
            .iter()
            .filter_map(|entry| entry.value().get().map(|ty| ty.contract_name()))
            .collect();
        names.sort_unstable();
        names
    }

    fn synthesize<C: Contract + ?Sized>(&self) -> Result<Arc<ForwarderType>> {
        let shape = C::shape();
        shape.validate()?;

        let accessors: Box<[&'static str]> = shape.accessors().map(|m| m.name).collect();
        let id = self.next_id.fetch_add(1, Ordering::AcqRel);

        debug!(
            contract = shape.name,
            id,
            accessors = accessors.len(),
            "Synthesized forwarder type"
        );

        Ok(Arc::new(ForwarderType {
            id,
            type_id: TypeId::of::<C>(),
            shape,
            accessors,
            instances: AtomicU64::new(0),
        }))
    }
}

impl Default for ForwarderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ForwarderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwarderRegistry")
            .field("contracts", &self.contract_names())
            .field("syntheses", &self.syntheses())
            .finish()
    }
}

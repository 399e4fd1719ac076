//! Updatable handles
//!
//! The handle is the owner side of a forwarder: it hands out the contract view
//! ([`UpdatableHandle::value`]) and is the only way to replace the backing
//! value. The view keeps the same allocation for the life of the handle, so
//! anything holding a clone of it follows every update.

use crate::contract::Contract;
use crate::forwarder::Forwarder;
use std::fmt;
use std::sync::Arc;
use swapcell_core::{Error, Result};
use tracing::{trace, warn};

/// Stable-identity holder of a hot-swappable contract value
pub struct UpdatableHandle<C: Contract + ?Sized> {
    forwarder: Arc<Forwarder<C>>,
    value: Arc<C>,
    trace_updates: bool,
}

impl<C: Contract + ?Sized> UpdatableHandle<C> {
    pub(crate) fn new(forwarder: Forwarder<C>, trace_updates: bool) -> Self {
        let forwarder = Arc::new(forwarder);
        let value = C::expose(Arc::clone(&forwarder));
        debug_assert!(
            is_same_allocation_as(&value, &forwarder),
            "Contract::expose must return the forwarder it was given"
        );
        Self {
            forwarder,
            value,
            trace_updates,
        }
    }

    /// The forwarder, viewed through the contract
    ///
    /// Every call returns the same allocation. Accessor calls on it read the
    /// backing value current at the time of the call.
    pub fn value(&self) -> &Arc<C> {
        &self.value
    }

    /// The forwarder itself, for snapshots and diagnostics
    pub fn forwarder(&self) -> &Arc<Forwarder<C>> {
        &self.forwarder
    }

    /// Atomically replace the backing value
    ///
    /// Accessor calls that start after this returns observe `new_value`.
    /// Calls already in flight finish on the value they loaded. The replaced
    /// value is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `new_value` is this handle's own
    /// forwarder; installing it would make every accessor call recurse
    /// forever.
    pub fn update_value(&self, new_value: Arc<C>) -> Result<()> {
        if is_same_allocation(&new_value, &self.value) {
            warn!(
                contract = self.contract_name(),
                "Rejected update: value is the handle's own forwarder"
            );
            return Err(Error::invalid_argument(
                "new_value",
                "a handle cannot be backed by its own forwarder",
            ));
        }

        let (_previous, seq) = self.forwarder.exchange(new_value);

        if self.trace_updates {
            trace!(
                contract = self.contract_name(),
                instance = self.forwarder.instance(),
                seq,
                "Backing value exchanged"
            );
        }

        Ok(())
    }

    /// Atomically replace the backing value with a possibly absent one
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `new_value` is `None`, or for
    /// any reason [`UpdatableHandle::update_value`] would.
    pub fn update_optional(&self, new_value: Option<Arc<C>>) -> Result<()> {
        match new_value {
            Some(value) => self.update_value(value),
            None => {
                warn!(
                    contract = self.contract_name(),
                    "Rejected update: value is absent"
                );
                Err(Error::invalid_argument(
                    "new_value",
                    "a replacement value must be present",
                ))
            }
        }
    }

    fn contract_name(&self) -> &'static str {
        self.forwarder.forwarder_type().contract_name()
    }
}

impl<C: Contract + ?Sized> fmt::Debug for UpdatableHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdatableHandle")
            .field("forwarder", &self.forwarder)
            .finish()
    }
}

/// Address comparison that ignores trait-object metadata
fn is_same_allocation<C: ?Sized>(a: &Arc<C>, b: &Arc<C>) -> bool {
    is_same_allocation_as(a, b)
}

fn is_same_allocation_as<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

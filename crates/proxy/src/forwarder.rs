//! Forwarder instances
//!
//! A [`Forwarder<C>`] is the object callers hold in place of a backing value.
//! It implements the contract `C` (the implementation comes from
//! [`contract!`](crate::contract!)) and answers every accessor call from
//! whatever value its slot holds at the moment of the call.
//!
//! ## Read discipline
//!
//! Each forwarded accessor calls [`Forwarder::current`] exactly once and
//! delegates to the value it returned. An accessor racing an update therefore
//! sees the old value or the new value in full, never a mix of both. Callers
//! that read several accessors and need them to agree should take a
//! [`Forwarder::snapshot`] and read from that.
//!
//! Only the owning [`UpdatableHandle`](crate::UpdatableHandle) can exchange
//! the backing value.

use crate::contract::Contract;
use crate::registry::ForwarderType;
use crate::slot::{BackingSlot, SlotGuard};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Forwarding implementation instance of contract `C`
pub struct Forwarder<C: Contract + ?Sized> {
    slot: BackingSlot<C>,
    forwarder_type: Arc<ForwarderType>,
    /// Instance number within its forwarder type, starting at 1
    instance: u64,
    /// Completed exchanges, advisory only
    updates: AtomicU64,
}

impl<C: Contract + ?Sized> Forwarder<C> {
    pub(crate) fn new(forwarder_type: Arc<ForwarderType>, initial: Arc<C>) -> Self {
        let instance = forwarder_type.record_instance();
        Self {
            slot: BackingSlot::new(initial),
            forwarder_type,
            instance,
            updates: AtomicU64::new(0),
        }
    }

    /// Load the current backing value once
    ///
    /// This is what generated accessors call. The guard pins the value it
    /// loaded even if an update lands while it is alive.
    #[inline]
    pub fn current(&self) -> SlotGuard<C> {
        self.slot.load()
    }

    /// Shared ownership of the current backing value
    pub fn snapshot(&self) -> Arc<C> {
        self.slot.load_full()
    }

    /// True if the current backing value is exactly `value`
    pub fn is_backed_by(&self, value: &Arc<C>) -> bool {
        self.slot.holds(value)
    }

    /// The forwarder type this instance was built from
    pub fn forwarder_type(&self) -> &ForwarderType {
        &self.forwarder_type
    }

    /// Instance number within its forwarder type
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Number of completed updates
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }

    /// Install `new` and return the superseded value together with the
    /// sequence number of this update
    ///
    /// The number counts completed updates. With concurrent writers it is
    /// not taken atomically with the exchange, so two writers may observe
    /// numbers in the opposite order of their exchanges.
    pub(crate) fn exchange(&self, new: Arc<C>) -> (Arc<C>, u64) {
        let previous = self.slot.exchange(new);
        let seq = self.updates.fetch_add(1, Ordering::Relaxed) + 1;
        (previous, seq)
    }
}

impl<C: Contract + ?Sized> fmt::Debug for Forwarder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forwarder")
            .field("contract", &self.forwarder_type.contract_name())
            .field("instance", &self.instance)
            .field("updates", &self.update_count())
            .finish()
    }
}

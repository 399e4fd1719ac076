//! Atomic backing slot
//!
//! The slot holds the current backing value of a forwarder behind an
//! `ArcSwap`. Reads and exchanges are single atomic operations:
//!
//! - `load()` performs one atomic read and pins the value it saw for as long
//!   as the returned guard lives. A concurrent exchange never changes what a
//!   pinned guard points at.
//! - `exchange()` installs a new value with one atomic swap and hands back the
//!   value it replaced. The old value is never written to; it is freed when
//!   its last reader drops its guard.
//!
//! `ArcSwap` needs a sized pointee, so the slot stores `Arc<Arc<C>>` and the
//! outer allocation is the unit of exchange.

use arc_swap::{ArcSwap, Guard};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Atomically exchangeable reference to a backing value
pub struct BackingSlot<C: ?Sized> {
    inner: ArcSwap<Arc<C>>,
}

impl<C: ?Sized> BackingSlot<C> {
    /// Create a slot seeded with `initial`
    pub fn new(initial: Arc<C>) -> Self {
        Self {
            inner: ArcSwap::from_pointee(initial),
        }
    }

    /// Read the current value once
    ///
    /// The guard keeps the value alive. Hold it only for the duration of a
    /// call; long-lived copies should use [`BackingSlot::load_full`].
    pub fn load(&self) -> SlotGuard<C> {
        SlotGuard {
            guard: self.inner.load(),
        }
    }

    /// Read the current value once and take shared ownership of it
    pub fn load_full(&self) -> Arc<C> {
        let current = self.inner.load();
        Arc::clone(&**current)
    }

    /// Install `new` and return the value it replaced
    pub fn exchange(&self, new: Arc<C>) -> Arc<C> {
        let previous = self.inner.swap(Arc::new(new));
        // Other readers may still pin the outer allocation; clone the inner Arc.
        Arc::clone(&*previous)
    }

    /// True if the slot currently holds exactly `value` (same allocation)
    pub fn holds(&self, value: &Arc<C>) -> bool {
        let current = self.inner.load();
        Arc::ptr_eq(&**current, value)
    }
}

impl<C: ?Sized> fmt::Debug for BackingSlot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingSlot").finish_non_exhaustive()
    }
}

/// A single pinned read of a [`BackingSlot`]
pub struct SlotGuard<C: ?Sized> {
    guard: Guard<Arc<Arc<C>>>,
}

impl<C: ?Sized> Deref for SlotGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.guard
    }
}

impl<C: ?Sized + fmt::Debug> fmt::Debug for SlotGuard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

//! The capability contract seam
//!
//! A contract is a trait of read accessors. [`Contract`] is implemented for
//! the contract's trait-object type (`dyn Person`), which makes that type
//! usable as the `C` parameter of forwarders, handles and the factory.
//!
//! Implementations are normally generated by [`contract!`](crate::contract!).
//! A hand-written implementation must also implement the contract trait for
//! `Forwarder<dyn Trait>`, loading the slot once per accessor call.

use crate::forwarder::Forwarder;
use std::sync::Arc;
use swapcell_core::ContractShape;

/// A capability contract whose trait objects can sit behind a forwarder
pub trait Contract: Send + Sync + 'static {
    /// Introspected member list of the contract
    fn shape() -> &'static ContractShape;

    /// View a forwarder through the contract
    ///
    /// Always an unsizing coercion: the returned `Arc` shares the forwarder's
    /// allocation, so the contract view has the forwarder's identity.
    fn expose(forwarder: Arc<Forwarder<Self>>) -> Arc<Self>;
}

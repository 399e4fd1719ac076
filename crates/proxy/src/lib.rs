//! Stable-identity, hot-swappable contract values
//!
//! This crate turns a value implementing a read-only capability contract into
//! an [`UpdatableHandle`]. The handle's [`value`](UpdatableHandle::value) is a
//! forwarder that implements the same contract, keeps one identity for its
//! whole life, and answers every accessor call from whichever backing value
//! is current. The owner replaces that value atomically with
//! [`update_value`](UpdatableHandle::update_value).
//!
//! # Components
//!
//! - [`contract!`]: declares a contract trait and generates its forwarding
//!   implementation
//! - [`BackingSlot`]: the atomically exchangeable reference (`arc-swap`)
//! - [`Forwarder`]: one instance per handle, forwarding accessor calls
//! - [`ForwarderRegistry`]: per-contract forwarder types, built once and cached
//! - [`ForwarderFactory`]: resolves the forwarder type and builds handles
//!
//! # Concurrency
//!
//! Accessor calls and updates never block. An accessor reads the slot once,
//! so a call racing an update sees one value in full. Superseded values are
//! reference counted and freed after their last in-flight reader finishes.
//! The only blocking path is the first resolution of a contract, and only for
//! concurrent callers resolving that same contract.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod macros;

pub mod contract;
pub mod factory;
pub mod forwarder;
pub mod handle;
pub mod registry;
pub mod slot;

pub use contract::Contract;
pub use factory::ForwarderFactory;
pub use forwarder::Forwarder;
pub use handle::UpdatableHandle;
pub use registry::{ForwarderRegistry, ForwarderType};
pub use slot::{BackingSlot, SlotGuard};

pub use swapcell_core::{ContractShape, Error, FactoryConfig, Member, MemberKind, Result};

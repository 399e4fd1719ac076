//! swapcell - Stable-identity, hot-swappable values
//!
//! swapcell wraps a value implementing a read-only capability contract in a
//! handle whose `value()` keeps one identity forever while the value behind
//! it can be replaced atomically from any thread.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use swapcell::{contract, ForwarderFactory};
//!
//! contract! {
//!     pub trait Person {
//!         fn name(&self) -> String;
//!         fn age(&self) -> u32;
//!     }
//! }
//!
//! let handle = ForwarderFactory::new().create::<dyn Person>(Arc::new(alice))?;
//! let shared = Arc::clone(handle.value());
//!
//! handle.update_value(Arc::new(bob))?;
//! assert_eq!(shared.name(), "Bob");
//! ```
//!
//! # Architecture
//!
//! Contract shapes, errors and configuration live in `swapcell-core`; the
//! slot, forwarders, handles, registry and factory live in `swapcell-proxy`.
//! Only the proxy API is re-exported here.

// Re-export the public API from swapcell-proxy
pub use swapcell_proxy::*;

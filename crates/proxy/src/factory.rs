//! Forwarder factory
//!
//! Entry point of the crate. `create` turns a backing value into an
//! [`UpdatableHandle`]:
//!
//! ```text
//! create::<C>(initial)
//!   1. resolve C's forwarder type (validated, cached per registry)
//!   2. apply config policy (empty contracts)
//!   3. build a forwarder seeded with `initial`
//!   4. wrap it in a handle
//! ```
//!
//! Every call builds a new forwarder instance with its own slot; only the
//! forwarder type is shared between calls for the same contract.

use crate::contract::Contract;
use crate::forwarder::Forwarder;
use crate::handle::UpdatableHandle;
use crate::registry::ForwarderRegistry;
use std::sync::Arc;
use swapcell_core::{Error, FactoryConfig, Result};
use tracing::debug;

/// Builds updatable handles for any contract
#[derive(Debug, Clone)]
pub struct ForwarderFactory {
    registry: Arc<ForwarderRegistry>,
    config: FactoryConfig,
}

impl ForwarderFactory {
    /// Factory over the process-wide registry with default settings
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    /// Factory over the process-wide registry
    pub fn with_config(config: FactoryConfig) -> Self {
        Self {
            registry: ForwarderRegistry::global(),
            config,
        }
    }

    /// Use `registry` instead of the process-wide one
    pub fn with_registry(mut self, registry: Arc<ForwarderRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Registry forwarder types are published to
    pub fn registry(&self) -> &Arc<ForwarderRegistry> {
        &self.registry
    }

    /// Wrap `initial` in a new updatable handle
    ///
    /// # Example
    ///
    /// ```ignore
    /// let handle = ForwarderFactory::new().create::<dyn Person>(Arc::new(alice))?;
    /// let view = Arc::clone(handle.value());
    /// handle.update_value(Arc::new(bob))?;
    /// assert_eq!(view.name(), "Bob");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedContract`] if `C` declares members that
    /// cannot be forwarded, or declares no accessors while the config
    /// disallows empty contracts. No instance is built in either case.
    pub fn create<C: Contract + ?Sized>(&self, initial: Arc<C>) -> Result<UpdatableHandle<C>> {
        let forwarder_type = self.registry.resolve::<C>()?;

        if !self.config.allow_empty_contracts && forwarder_type.accessors().is_empty() {
            return Err(Error::unsupported_contract(
                forwarder_type.contract_name(),
                None,
                "contract declares no accessors",
            ));
        }

        let forwarder = Forwarder::new(forwarder_type, initial);
        debug!(
            contract = forwarder.forwarder_type().contract_name(),
            instance = forwarder.instance(),
            "Created updatable handle"
        );

        Ok(UpdatableHandle::new(forwarder, self.config.trace_updates))
    }

    /// Wrap a possibly absent initial value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `initial` is `None`, otherwise
    /// whatever [`ForwarderFactory::create`] returns.
    pub fn create_optional<C: Contract + ?Sized>(
        &self,
        initial: Option<Arc<C>>,
    ) -> Result<UpdatableHandle<C>> {
        let initial = initial.ok_or_else(|| {
            Error::invalid_argument("initial", "an initial value must be present")
        })?;
        self.create(initial)
    }
}

impl Default for ForwarderFactory {
    fn default() -> Self {
        Self::new()
    }
}

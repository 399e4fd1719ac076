//! Core types for swapcell
//!
//! This crate defines the foundational types shared by the forwarder crate:
//! - Error: Error taxonomy (invalid arguments, unsupported contracts, config)
//! - ContractShape / Member: Introspected member lists of capability contracts
//! - FactoryConfig: Factory settings loaded from TOML
//!
//! It contains no concurrency code; see `swapcell-proxy` for the backing
//! slot, forwarders, handles and the forwarder registry.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod shape;

pub use config::FactoryConfig;
pub use error::{Error, Result};
pub use shape::{ContractShape, Member, MemberKind};

//! Core types for the Apigate gateway registry.
//!
//! This crate defines the records the gateway resolves during request
//! authorization (APIs, clients, contracts), the cache key derivation
//! used by the caching registry, and the registry error taxonomy.
//! It contains no I/O; backends and caching live in `apigate-registry`.

pub mod api;
pub mod client;
pub mod contract;
pub mod coordinate;
pub mod error;
pub mod key;

pub use api::Api;
pub use client::Client;
pub use contract::{ApiContract, Contract, Policy};
pub use coordinate::ApiCoordinate;
pub use error::{ErrorCategory, RegistryError, Result};
pub use key::api_cache_key;

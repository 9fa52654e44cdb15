//! # apigate-registry
//!
//! Caching layer in front of the authoritative registry store used in
//! the gateway's request-authorization path.
//!
//! This crate defines the [`RegistryBackend`] trait that authoritative
//! stores implement, and [`CachingRegistry`], a single-node read-through
//! cache wrapped around a backend. It does not contain a remote backend
//! implementation; those are provided by separate crates.
//!
//! ## Overview
//!
//! A gateway request arrives with an API coordinate and an API key.
//! [`CachingRegistry::get_contract`] resolves the client by key and the
//! API by coordinate (each through its own cache), scans the client's
//! contracts for the first match, and assembles the effective
//! [`ApiContract`](apigate_core::ApiContract). Both caches are cleared
//! together by [`CachingRegistry::invalidate_cache`], typically driven
//! by an external change poller.
//!
//! ## Example
//!
//! ```ignore
//! use apigate_core::ApiCoordinate;
//! use apigate_registry::CachingRegistry;
//!
//! let registry = CachingRegistry::new(backend);
//! let coordinate = ApiCoordinate::new("org1", "apiA", "1.0");
//! let contract = registry.get_contract(&coordinate, "c1-key").await?;
//! println!("plan: {}", contract.plan);
//! ```
//!
//! ## Backends
//!
//! To implement a backend, implement the [`RegistryBackend`] trait:
//!
//! ```ignore
//! use async_trait::async_trait;
//! use apigate_registry::RegistryBackend;
//!
//! struct MyBackend { /* ... */ }
//!
//! #[async_trait]
//! impl RegistryBackend for MyBackend {
//!     async fn fetch_api(&self, coordinate: &ApiCoordinate) -> Result<Option<Api>> {
//!         // Implementation
//!     }
//!     // ... other methods
//! }
//! ```

mod backend;
mod caching;
mod handler;

pub use backend::{DynBackend, RegistryBackend};
pub use caching::{CacheStats, CachingRegistry};
pub use handler::AsyncResult;

// Re-export the core types backends and callers work with.
pub use apigate_core::{
    Api, ApiContract, ApiCoordinate, Client, Contract, ErrorCategory, Policy, RegistryError,
    Result,
};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use apigate_registry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{DynBackend, RegistryBackend};
    pub use crate::caching::{CacheStats, CachingRegistry};
    pub use crate::handler::AsyncResult;
    pub use apigate_core::{
        Api, ApiContract, ApiCoordinate, Client, Contract, ErrorCategory, Policy, RegistryError,
        Result,
    };
}

//! The authoritative backend abstraction.

use apigate_core::{Api, ApiCoordinate, Client, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// The authoritative registry store the cache reads through to.
///
/// Implementations must be thread-safe (`Send + Sync`); the caching
/// layer never serializes calls to the backend, and a slow fetch may
/// run concurrently with fetches for other keys.
///
/// Absent records are `Ok(None)`, not errors: a missing client or API
/// is a normal outcome the resolver turns into its own typed failure.
/// `Err` is reserved for infrastructure problems (I/O, connection).
#[async_trait]
pub trait RegistryBackend: Send + Sync {
    /// Fetches a published API by coordinate.
    ///
    /// Returns `None` if no API is published under the coordinate.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Backend` for infrastructure failures
    /// only, never for missing records.
    async fn fetch_api(&self, coordinate: &ApiCoordinate) -> Result<Option<Api>>;

    /// Fetches a registered client by its API key.
    ///
    /// Returns `None` if the key is unknown.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Backend` for infrastructure failures
    /// only, never for missing records.
    async fn fetch_client(&self, api_key: &str) -> Result<Option<Client>>;

    /// Returns the name of this backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// Type alias for a shared backend trait object.
pub type DynBackend = Arc<dyn RegistryBackend>;

#[async_trait]
impl<B: RegistryBackend + ?Sized> RegistryBackend for Arc<B> {
    async fn fetch_api(&self, coordinate: &ApiCoordinate) -> Result<Option<Api>> {
        (**self).fetch_api(coordinate).await
    }

    async fn fetch_client(&self, api_key: &str) -> Result<Option<Client>> {
        (**self).fetch_client(api_key).await
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

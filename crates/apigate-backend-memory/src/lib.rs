//! In-memory registry backend for the Apigate gateway.
//!
//! This crate provides an in-memory implementation of the
//! `RegistryBackend` trait from `apigate-registry`, using papaya
//! lock-free HashMaps for concurrent access. It serves as the
//! authoritative store for tests, demos and single-process
//! deployments without an external document store.
//!
//! # Example
//!
//! ```ignore
//! use apigate_backend_memory::InMemoryBackend;
//! use apigate_registry::{CachingRegistry, RegistryBackend};
//!
//! let backend = InMemoryBackend::new();
//! backend.publish_api(api);
//! backend.register_client(client);
//!
//! let registry = CachingRegistry::new(backend);
//! let contract = registry.get_contract(&coordinate, "c1-key").await?;
//! ```

use apigate_core::{Api, ApiCoordinate, Client, Result};
use async_trait::async_trait;
use papaya::HashMap as PapayaHashMap;

// Re-export the RegistryBackend trait for convenience
pub use apigate_registry::RegistryBackend;

/// In-memory authoritative store.
///
/// Publishing and registration are immediately visible to fetches,
/// but a `CachingRegistry` layered on top only observes changes to
/// already-cached keys after its cache is invalidated.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    apis: PapayaHashMap<ApiCoordinate, Api>,
    clients: PapayaHashMap<String, Client>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes an API, replacing any previous record under the
    /// same coordinate.
    pub fn publish_api(&self, api: Api) {
        let guard = self.apis.pin();
        guard.insert(api.coordinate.clone(), api);
    }

    /// Retires an API. Returns `true` if a record was removed.
    pub fn retire_api(&self, coordinate: &ApiCoordinate) -> bool {
        let guard = self.apis.pin();
        guard.remove(coordinate).is_some()
    }

    /// Registers a client under its API key, replacing any previous
    /// registration for the same key.
    pub fn register_client(&self, client: Client) {
        let guard = self.clients.pin();
        guard.insert(client.api_key.clone(), client);
    }

    /// Unregisters a client. Returns `true` if a record was removed.
    pub fn unregister_client(&self, api_key: &str) -> bool {
        let guard = self.clients.pin();
        guard.remove(api_key).is_some()
    }

    /// Number of published APIs.
    pub fn api_count(&self) -> usize {
        self.apis.pin().len()
    }

    /// Number of registered clients.
    pub fn client_count(&self) -> usize {
        self.clients.pin().len()
    }
}

#[async_trait]
impl RegistryBackend for InMemoryBackend {
    async fn fetch_api(&self, coordinate: &ApiCoordinate) -> Result<Option<Api>> {
        let guard = self.apis.pin();
        Ok(guard.get(coordinate).cloned())
    }

    async fn fetch_client(&self, api_key: &str) -> Result<Option<Client>> {
        let guard = self.clients.pin();
        Ok(guard.get(api_key).cloned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigate_core::Contract;
    use apigate_registry::CachingRegistry;

    fn coordinate() -> ApiCoordinate {
        ApiCoordinate::new("org1", "apiA", "1.0")
    }

    fn sample_api() -> Api {
        Api::new(coordinate(), "https://backend.example/apiA")
    }

    fn sample_client() -> Client {
        Client::new("c1", "c1-key").with_contract(Contract::new(coordinate(), "gold"))
    }

    #[tokio::test]
    async fn test_publish_fetch_retire() {
        let backend = InMemoryBackend::new();
        assert!(backend.fetch_api(&coordinate()).await.unwrap().is_none());

        backend.publish_api(sample_api());
        assert_eq!(backend.api_count(), 1);
        let fetched = backend.fetch_api(&coordinate()).await.unwrap().unwrap();
        assert_eq!(fetched.endpoint, "https://backend.example/apiA");

        assert!(backend.retire_api(&coordinate()));
        assert!(!backend.retire_api(&coordinate()));
        assert!(backend.fetch_api(&coordinate()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_fetch_unregister() {
        let backend = InMemoryBackend::new();
        assert!(backend.fetch_client("c1-key").await.unwrap().is_none());

        backend.register_client(sample_client());
        assert_eq!(backend.client_count(), 1);
        let fetched = backend.fetch_client("c1-key").await.unwrap().unwrap();
        assert_eq!(fetched.client_id, "c1");

        assert!(backend.unregister_client("c1-key"));
        assert!(!backend.unregister_client("c1-key"));
        assert!(backend.fetch_client("c1-key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_republish_replaces_record() {
        let backend = InMemoryBackend::new();
        backend.publish_api(sample_api());
        backend.publish_api(Api::new(coordinate(), "https://other.example"));

        assert_eq!(backend.api_count(), 1);
        let fetched = backend.fetch_api(&coordinate()).await.unwrap().unwrap();
        assert_eq!(fetched.endpoint, "https://other.example");
    }

    #[tokio::test]
    async fn test_caching_registry_over_memory_backend() {
        let backend = InMemoryBackend::new();
        backend.publish_api(sample_api());
        backend.register_client(sample_client());
        let registry = CachingRegistry::new(backend);

        let resolved = registry.get_contract(&coordinate(), "c1-key").await.unwrap();
        assert_eq!(resolved.plan, "gold");

        // Retiring the API is invisible until the cache is cleared.
        registry.backend().retire_api(&coordinate());
        assert!(registry.get_contract(&coordinate(), "c1-key").await.is_ok());

        registry.invalidate_cache().await;
        let err = registry
            .get_contract(&coordinate(), "c1-key")
            .await
            .unwrap_err();
        assert!(err.is_api_retired());
    }
}

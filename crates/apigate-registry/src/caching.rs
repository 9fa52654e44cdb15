//! Single-node read-through caching over a [`RegistryBackend`].

use crate::backend::RegistryBackend;
use apigate_core::{Api, ApiContract, ApiCoordinate, Client, RegistryError, Result, api_cache_key};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Both cache maps, guarded together.
///
/// A single exclusive lock owns both maps so that invalidation can
/// clear them in one critical section. Individual lookups touch only
/// one map per critical section.
#[derive(Debug, Default)]
struct CacheState {
    apis: HashMap<String, Api>,
    clients: HashMap<String, Client>,
}

/// Entry counts of the two caches, for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached API records.
    pub apis: usize,
    /// Number of cached client records.
    pub clients: usize,
}

/// A single-node caching layer over an authoritative registry store.
///
/// This caching solution will not work in a cluster: the caches are
/// process-local and coherence with other nodes relies entirely on
/// each node receiving its own [`invalidate_cache`] signal (for
/// example from a change poller).
///
/// Cached entries are immutable once stored and are only removed by a
/// full clear; there is no size bound and no TTL. Failed (absent)
/// lookups are never cached, so a later successful publish is picked
/// up by the next request.
///
/// [`invalidate_cache`]: CachingRegistry::invalidate_cache
#[derive(Debug)]
pub struct CachingRegistry<B> {
    backend: B,
    state: Mutex<CacheState>,
}

impl<B: RegistryBackend> CachingRegistry<B> {
    /// Wraps a backend in empty caches.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Returns the wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Gets the API either from the cache or from the backend.
    ///
    /// Read-through: the lock is held only for the cache read and the
    /// optional insert, never across the backend fetch, so one slow
    /// fetch does not block lookups for other keys.
    pub async fn get_api(&self, coordinate: &ApiCoordinate) -> Result<Option<Api>> {
        let key = api_cache_key(coordinate);
        {
            let state = self.state.lock().await;
            if let Some(api) = state.apis.get(&key) {
                debug!(%coordinate, "api cache hit");
                return Ok(Some(api.clone()));
            }
        }

        debug!(%coordinate, backend = self.backend.backend_name(), "api cache miss");
        let fetched = self.backend.fetch_api(coordinate).await?;
        if let Some(api) = &fetched {
            let mut state = self.state.lock().await;
            state.apis.insert(key, api.clone());
        }
        Ok(fetched)
    }

    /// Gets the client either from the cache or from the backend.
    ///
    /// The raw API key is the cache key; see [`get_api`] for the
    /// locking discipline.
    ///
    /// [`get_api`]: CachingRegistry::get_api
    pub async fn get_client(&self, api_key: &str) -> Result<Option<Client>> {
        {
            let state = self.state.lock().await;
            if let Some(client) = state.clients.get(api_key) {
                debug!("client cache hit");
                return Ok(Some(client.clone()));
            }
        }

        debug!(backend = self.backend.backend_name(), "client cache miss");
        let fetched = self.backend.fetch_client(api_key).await?;
        if let Some(client) = &fetched {
            let mut state = self.state.lock().await;
            state.clients.insert(api_key.to_string(), client.clone());
        }
        Ok(fetched)
    }

    /// Resolves the effective contract for one request.
    ///
    /// Looks up the client by API key, then the API by coordinate
    /// (each read-through), then selects the first contract in stored
    /// order matching the coordinate and assembles the resolved view.
    ///
    /// The two lookups run in separate critical sections. An
    /// invalidation racing between them can pair a pre-invalidation
    /// client snapshot with a post-invalidation API snapshot; this is
    /// a known, accepted weak-consistency window, not tightened here
    /// because it would serialize resolutions against slow fetches.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NoClientForApiKey`] if the key is unknown.
    /// - [`RegistryError::ApiRetired`] if the coordinate no longer
    ///   resolves.
    /// - [`RegistryError::NoContractFound`] if the client holds no
    ///   matching contract.
    /// - [`RegistryError::Backend`] if either fetch fails.
    pub async fn get_contract(
        &self,
        coordinate: &ApiCoordinate,
        api_key: &str,
    ) -> Result<ApiContract> {
        let client = self
            .get_client(api_key)
            .await?
            .ok_or_else(|| RegistryError::no_client_for_api_key(api_key))?;

        let api = self.get_api(coordinate).await?.ok_or_else(|| {
            RegistryError::api_retired(&coordinate.api_id, &coordinate.organization_id)
        })?;

        // First match in stored order wins; duplicate contracts for
        // one coordinate are a silent pick-first.
        let (plan, policies) = match client.contracts.iter().find(|c| c.matches(coordinate)) {
            Some(contract) => (contract.plan.clone(), contract.policies.clone()),
            None => {
                return Err(RegistryError::no_contract_found(
                    &client.client_id,
                    &coordinate.api_id,
                ));
            }
        };

        Ok(ApiContract::new(api, client, plan, policies))
    }

    /// Clears both caches so that subsequent lookups trigger a fresh
    /// fetch from the authoritative store.
    ///
    /// Both maps are cleared under one critical section; no completed
    /// lookup can observe one cache cleared and the other not.
    pub async fn invalidate_cache(&self) {
        let mut state = self.state.lock().await;
        let stats = CacheStats {
            apis: state.apis.len(),
            clients: state.clients.len(),
        };
        state.clients.clear();
        state.apis.clear();
        info!(
            apis = stats.apis,
            clients = stats.clients,
            "registry caches invalidated"
        );
    }

    /// Returns current entry counts for both caches.
    pub async fn cache_stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        CacheStats {
            apis: state.apis.len(),
            clients: state.clients.len(),
        }
    }
}

//! Single-shot result delivery.
//!
//! The embedding gateway's request pipeline hands the registry a
//! callback rather than awaiting a `Result` directly. These variants
//! wrap the async operations and deliver exactly one outcome, success
//! or typed failure, to the caller-supplied handler on the calling
//! task. Backend failures are delivered through the handler like any
//! other failure; nothing escapes as a panic.

use crate::backend::RegistryBackend;
use crate::caching::CachingRegistry;
use apigate_core::{Api, ApiContract, ApiCoordinate, Client, RegistryError};

/// The outcome delivered to a single-shot handler.
pub type AsyncResult<T> = Result<T, RegistryError>;

impl<B: RegistryBackend> CachingRegistry<B> {
    /// Resolves the effective contract and delivers the outcome to
    /// `handler`, which is invoked exactly once.
    pub async fn get_contract_with<F>(&self, coordinate: &ApiCoordinate, api_key: &str, handler: F)
    where
        F: FnOnce(AsyncResult<ApiContract>),
    {
        handler(self.get_contract(coordinate, api_key).await);
    }

    /// Looks up an API and delivers the outcome to `handler`, which
    /// is invoked exactly once. An unpublished coordinate is a
    /// successful `None`, not a failure.
    pub async fn get_api_with<F>(&self, coordinate: &ApiCoordinate, handler: F)
    where
        F: FnOnce(AsyncResult<Option<Api>>),
    {
        handler(self.get_api(coordinate).await);
    }

    /// Looks up a client and delivers the outcome to `handler`, which
    /// is invoked exactly once. An unknown key is a successful
    /// `None`, not a failure.
    pub async fn get_client_with<F>(&self, api_key: &str, handler: F)
    where
        F: FnOnce(AsyncResult<Option<Client>>),
    {
        handler(self.get_client(api_key).await);
    }
}

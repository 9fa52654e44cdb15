//! The published API record.

use crate::coordinate::ApiCoordinate;
use serde::{Deserialize, Serialize};

/// A published API as stored in the authoritative registry.
///
/// Beyond its identity [`ApiCoordinate`], the record is opaque to the
/// resolution core: the endpoint and public flag are carried through
/// for the embedding gateway but never inspected during contract
/// resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    /// Identity of this API version.
    pub coordinate: ApiCoordinate,
    /// Backend endpoint the gateway proxies requests to.
    pub endpoint: String,
    /// Whether the API may be invoked without a contract.
    #[serde(default)]
    pub public_api: bool,
}

impl Api {
    /// Creates an API record with the given identity and endpoint.
    pub fn new(coordinate: ApiCoordinate, endpoint: impl Into<String>) -> Self {
        Self {
            coordinate,
            endpoint: endpoint.into(),
            public_api: false,
        }
    }

    /// Marks the API as publicly invokable.
    #[must_use]
    pub fn with_public(mut self, public_api: bool) -> Self {
        self.public_api = public_api;
        self
    }
}

//! Cache key derivation.
//!
//! API cache entries are keyed by a delimited string built from the
//! coordinate triple; client entries are keyed by the raw API key,
//! which is already a globally unique external identifier.

use crate::coordinate::ApiCoordinate;

/// Derives the cache key for an API coordinate.
///
/// The delimiter scheme guarantees that distinct triples yield
/// distinct keys and identical triples yield identical keys, which is
/// the cache's equality contract.
#[must_use]
pub fn api_cache_key(coordinate: &ApiCoordinate) -> String {
    format!(
        "API::{}|{}|{}",
        coordinate.organization_id, coordinate.api_id, coordinate.version
    )
}

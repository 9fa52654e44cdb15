//! Registry error taxonomy.
//!
//! Every failure a resolution can produce is a value of
//! [`RegistryError`]; nothing crosses the async boundary as a panic.

use std::fmt;

/// Errors produced by registry lookups and contract resolution.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No client record exists for the supplied API key.
    #[error("No client found for API key: {api_key}")]
    NoClientForApiKey {
        /// The key that failed to resolve, kept for diagnostics.
        api_key: String,
    },

    /// The API coordinate is no longer resolvable in the
    /// authoritative store.
    #[error("API {api_id} in organization {organization_id} was retired")]
    ApiRetired {
        /// The API identifier.
        api_id: String,
        /// The owning organization.
        organization_id: String,
    },

    /// Client and API both exist, but no contract links them.
    #[error("No contract found between client {client_id} and API {api_id}")]
    NoContractFound {
        /// The resolved client identifier.
        client_id: String,
        /// The requested API identifier.
        api_id: String,
    },

    /// The authoritative store fetch failed. Transient and permanent
    /// failures are not distinguished here; retry policy belongs to
    /// the embedding gateway.
    #[error("Backend error: {message}")]
    Backend {
        /// Description of the backend failure.
        message: String,
    },
}

impl RegistryError {
    /// Creates a new `NoClientForApiKey` error.
    #[must_use]
    pub fn no_client_for_api_key(api_key: impl Into<String>) -> Self {
        Self::NoClientForApiKey {
            api_key: api_key.into(),
        }
    }

    /// Creates a new `ApiRetired` error.
    #[must_use]
    pub fn api_retired(api_id: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self::ApiRetired {
            api_id: api_id.into(),
            organization_id: organization_id.into(),
        }
    }

    /// Creates a new `NoContractFound` error.
    #[must_use]
    pub fn no_contract_found(client_id: impl Into<String>, api_id: impl Into<String>) -> Self {
        Self::NoContractFound {
            client_id: client_id.into(),
            api_id: api_id.into(),
        }
    }

    /// Creates a new `Backend` error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Returns `true` if the supplied API key did not resolve.
    #[must_use]
    pub fn is_no_client(&self) -> bool {
        matches!(self, Self::NoClientForApiKey { .. })
    }

    /// Returns `true` if the API was retired.
    #[must_use]
    pub fn is_api_retired(&self) -> bool {
        matches!(self, Self::ApiRetired { .. })
    }

    /// Returns `true` if no contract linked the client to the API.
    #[must_use]
    pub fn is_no_contract(&self) -> bool {
        matches!(self, Self::NoContractFound { .. })
    }

    /// Returns `true` if the authoritative store fetch failed.
    #[must_use]
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }

    /// Returns `true` if the caller can recover from this error
    /// (auth, retired or contract failures map to 4xx responses).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !self.is_backend()
    }

    /// Returns the error category for logging and monitoring.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoClientForApiKey { .. } => ErrorCategory::Auth,
            Self::ApiRetired { .. } => ErrorCategory::Retired,
            Self::NoContractFound { .. } => ErrorCategory::Forbidden,
            Self::Backend { .. } => ErrorCategory::Infrastructure,
        }
    }
}

/// Categories of registry errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unknown API key (401-equivalent).
    Auth,
    /// API no longer resolvable (410-equivalent).
    Retired,
    /// No contract between client and API (403-equivalent).
    Forbidden,
    /// Backend fetch failure.
    Infrastructure,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => write!(f, "auth"),
            Self::Retired => write!(f, "retired"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::Infrastructure => write!(f, "infrastructure"),
        }
    }
}

/// Convenience result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::no_client_for_api_key("bad-key");
        assert_eq!(err.to_string(), "No client found for API key: bad-key");

        let err = RegistryError::api_retired("apiA", "org1");
        assert_eq!(err.to_string(), "API apiA in organization org1 was retired");

        let err = RegistryError::no_contract_found("c1", "apiA");
        assert_eq!(
            err.to_string(),
            "No contract found between client c1 and API apiA"
        );

        let err = RegistryError::backend("connection refused");
        assert_eq!(err.to_string(), "Backend error: connection refused");
    }

    #[test]
    fn test_error_predicates() {
        let err = RegistryError::no_client_for_api_key("bad-key");
        assert!(err.is_no_client());
        assert!(!err.is_api_retired());
        assert!(!err.is_no_contract());
        assert!(!err.is_backend());

        let err = RegistryError::backend("down");
        assert!(err.is_backend());
        assert!(!err.is_no_client());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            RegistryError::no_client_for_api_key("k").category(),
            ErrorCategory::Auth
        );
        assert_eq!(
            RegistryError::api_retired("a", "o").category(),
            ErrorCategory::Retired
        );
        assert_eq!(
            RegistryError::no_contract_found("c", "a").category(),
            ErrorCategory::Forbidden
        );
        assert_eq!(
            RegistryError::backend("x").category(),
            ErrorCategory::Infrastructure
        );
    }

    #[test]
    fn test_client_vs_server_classification() {
        assert!(RegistryError::no_client_for_api_key("k").is_client_error());
        assert!(RegistryError::api_retired("a", "o").is_client_error());
        assert!(RegistryError::no_contract_found("c", "a").is_client_error());
        assert!(!RegistryError::backend("x").is_client_error());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Auth.to_string(), "auth");
        assert_eq!(ErrorCategory::Retired.to_string(), "retired");
        assert_eq!(ErrorCategory::Forbidden.to_string(), "forbidden");
        assert_eq!(ErrorCategory::Infrastructure.to_string(), "infrastructure");
    }
}

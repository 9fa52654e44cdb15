//! The registered client (API consumer) record.

use crate::contract::Contract;
use serde::{Deserialize, Serialize};

/// A registered client of the gateway.
///
/// Identified externally by its opaque API key; the key is globally
/// unique and used verbatim as the client cache key. The contract
/// list order is the resolution order: first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Human-assigned client identifier, used in diagnostics.
    pub client_id: String,
    /// Opaque, globally unique API key presented on each request.
    pub api_key: String,
    /// Contracts held by this client, in stored order.
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

impl Client {
    /// Creates a client with no contracts.
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            contracts: Vec::new(),
        }
    }

    /// Appends a contract, preserving stored order.
    #[must_use]
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contracts.push(contract);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::ApiCoordinate;

    #[test]
    fn test_client_contract_order() {
        let client = Client::new("c1", "c1-key")
            .with_contract(Contract::new(
                ApiCoordinate::new("org1", "apiA", "1.0"),
                "gold",
            ))
            .with_contract(Contract::new(
                ApiCoordinate::new("org1", "apiB", "1.0"),
                "silver",
            ));

        assert_eq!(client.contracts[0].plan, "gold");
        assert_eq!(client.contracts[1].plan, "silver");
    }

    #[test]
    fn test_client_deserializes_without_contracts() {
        let json = r#"{"client_id": "c1", "api_key": "c1-key"}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert!(client.contracts.is_empty());
    }
}

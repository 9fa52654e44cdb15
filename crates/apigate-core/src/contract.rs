//! Contracts binding a client to an API, and the resolved view handed
//! to the request pipeline.

use crate::api::Api;
use crate::client::Client;
use crate::coordinate::ApiCoordinate;
use serde::{Deserialize, Serialize};

/// A policy attached to a contract.
///
/// The configuration is opaque JSON interpreted by the policy engine,
/// not by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Name of the policy implementation.
    pub name: String,
    /// Policy configuration, passed through verbatim.
    #[serde(default)]
    pub configuration: serde_json::Value,
}

impl Policy {
    /// Creates a policy with an empty configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configuration: serde_json::Value::Null,
        }
    }

    /// Attaches a configuration value.
    #[must_use]
    pub fn with_configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = configuration;
        self
    }
}

/// A contract between a client and one API coordinate.
///
/// A client may hold several contracts, each for a distinct API.
/// Duplicates are not rejected here; resolution picks the first match
/// in stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// The API this contract grants access to.
    pub coordinate: ApiCoordinate,
    /// The plan the client is subscribed to.
    pub plan: String,
    /// Policies applied to requests made under this contract.
    #[serde(default)]
    pub policies: Vec<Policy>,
}

impl Contract {
    /// Creates a contract for the given API under the given plan.
    pub fn new(coordinate: ApiCoordinate, plan: impl Into<String>) -> Self {
        Self {
            coordinate,
            plan: plan.into(),
            policies: Vec::new(),
        }
    }

    /// Appends a policy to the contract's policy chain.
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Returns `true` if this contract grants access to the API
    /// identified by `coordinate`.
    #[must_use]
    pub fn matches(&self, coordinate: &ApiCoordinate) -> bool {
        self.coordinate == *coordinate
    }
}

/// The fully resolved contract for one request.
///
/// Combines the fetched API, the fetched client and the matched
/// contract's plan and policies. Constructed fresh per resolution and
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiContract {
    /// The API being invoked.
    pub api: Api,
    /// The client invoking it.
    pub client: Client,
    /// Plan from the matched contract.
    pub plan: String,
    /// Policies from the matched contract.
    pub policies: Vec<Policy>,
}

impl ApiContract {
    /// Assembles the resolved view from its parts.
    pub fn new(api: Api, client: Client, plan: impl Into<String>, policies: Vec<Policy>) -> Self {
        Self {
            api,
            client,
            plan: plan.into(),
            policies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_matches_only_its_coordinate() {
        let contract = Contract::new(ApiCoordinate::new("org1", "apiA", "1.0"), "gold");

        assert!(contract.matches(&ApiCoordinate::new("org1", "apiA", "1.0")));
        assert!(!contract.matches(&ApiCoordinate::new("org1", "apiA", "2.0")));
        assert!(!contract.matches(&ApiCoordinate::new("org1", "apiB", "1.0")));
        assert!(!contract.matches(&ApiCoordinate::new("org2", "apiA", "1.0")));
    }

    #[test]
    fn test_contract_policy_order_is_preserved() {
        let contract = Contract::new(ApiCoordinate::new("org1", "apiA", "1.0"), "gold")
            .with_policy(Policy::new("rate-limit"))
            .with_policy(Policy::new("ip-filter"));

        let names: Vec<_> = contract.policies.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["rate-limit", "ip-filter"]);
    }

    #[test]
    fn test_policy_configuration_passthrough() {
        let policy = Policy::new("rate-limit")
            .with_configuration(serde_json::json!({"limit": 100, "period": "minute"}));
        assert_eq!(policy.configuration["limit"], 100);

        let bare = Policy::new("ip-filter");
        assert!(bare.configuration.is_null());
    }

    #[test]
    fn test_api_contract_assembly() {
        let api = Api::new(ApiCoordinate::new("org1", "apiA", "1.0"), "https://b.example");
        let client = Client::new("c1", "c1-key");
        let resolved = ApiContract::new(
            api.clone(),
            client.clone(),
            "gold",
            vec![Policy::new("p1"), Policy::new("p2")],
        );

        assert_eq!(resolved.api, api);
        assert_eq!(resolved.client, client);
        assert_eq!(resolved.plan, "gold");
        assert_eq!(resolved.policies.len(), 2);
    }
}

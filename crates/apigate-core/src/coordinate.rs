//! The (organization, api, version) triple identifying a unique API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a published API version.
///
/// Two coordinates built from the same organization id, API id and
/// version always compare and hash equal; the caching registry relies
/// on this when deriving cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiCoordinate {
    /// The organization that owns the API.
    pub organization_id: String,
    /// The API identifier, unique within the organization.
    pub api_id: String,
    /// The published version of the API.
    pub version: String,
}

impl ApiCoordinate {
    /// Creates a coordinate from its three identity fields.
    pub fn new(
        organization_id: impl Into<String>,
        api_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            organization_id: organization_id.into(),
            api_id: api_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ApiCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.organization_id, self.api_id, self.version
        )
    }
}

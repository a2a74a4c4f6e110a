pub mod virtual_machines;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The management client itself could not be constructed.
    #[error("Azure management client is required for this operation: {0}")]
    ClientUnavailable(#[source] azure_core::error::Error),
    /// A remote object carried an id that does not follow the
    /// `/subscriptions/{sub}/resourceGroups/{group}/...` shape.
    #[error("malformed resource id: {0}")]
    MalformedResourceId(String),
    /// A remote object came back without a field every resource must carry.
    #[error("resource is missing its {0}")]
    IncompleteResource(&'static str),
    /// Anything the management API itself reported, surfaced unmodified.
    #[error(transparent)]
    Api(#[from] azure_core::error::Error),
}

/// Read access to one kind of Azure resource, scoped to a subscription.
///
/// One implementation per resource kind; additional kinds (disks, networks)
/// are new implementations, not new methods here.
#[async_trait]
pub trait ResourceFetcher {
    type Record;

    /// List every resource in the subscription, or only those in
    /// `resource_group` when given.
    async fn list(&self, resource_group: Option<&str>) -> Result<Vec<Self::Record>, FetchError>;

    /// Fetch a single resource by name.
    async fn get(&self, name: &str, resource_group: &str) -> Result<Self::Record, FetchError>;
}

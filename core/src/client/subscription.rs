use super::{parse_one, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Cluster, Property};

impl StratosClient {
    /// Topology of the cluster serving a cartridge subscription.
    pub fn build_describe_cluster(&self, subscription_alias: &str) -> HttpRequest {
        self.get(&Endpoint::Cluster {
            subscription_alias: subscription_alias.to_string(),
        })
    }

    pub fn parse_describe_cluster(&self, response: HttpResponse) -> Result<Cluster, ApiError> {
        parse_one(response, "cluster")
    }

    /// Ask the subscription's members to pull their artifact repository.
    pub fn build_synchronize_artifacts(&self, subscription_alias: &str) -> HttpRequest {
        self.post_empty(&Endpoint::SynchronizeArtifacts {
            subscription_alias: subscription_alias.to_string(),
        })
    }

    pub fn build_update_subscription_properties(
        &self,
        subscription_alias: &str,
        properties: &Definition<Vec<Property>>,
    ) -> Result<HttpRequest, ApiError> {
        let endpoint = Endpoint::SubscriptionProperties {
            subscription_alias: subscription_alias.to_string(),
        };
        self.send_json(HttpMethod::Put, &endpoint, properties)
    }
}

use super::{parse_many, parse_one, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Partition;

impl StratosClient {
    pub fn build_list_partitions(&self) -> HttpRequest {
        self.get(&Endpoint::Partitions)
    }

    pub fn parse_list_partitions(&self, response: HttpResponse) -> Result<Vec<Partition>, ApiError> {
        parse_many(response, "partitions")
    }

    pub fn build_describe_partition(&self, id: &str) -> HttpRequest {
        self.get(&Endpoint::Partition { id: id.to_string() })
    }

    pub fn parse_describe_partition(&self, response: HttpResponse) -> Result<Partition, ApiError> {
        parse_one(response, "partition")
    }

    pub fn build_deploy_partition(
        &self,
        partition: &Definition<Partition>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::Partitions, partition)
    }
}

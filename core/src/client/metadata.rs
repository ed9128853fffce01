use super::{parse_many, StratosClient};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::MetadataProperty;

impl StratosClient {
    pub fn build_list_metadata(&self, application_id: &str) -> HttpRequest {
        self.get(&Endpoint::ApplicationMetadata {
            application_id: application_id.to_string(),
        })
    }

    pub fn parse_list_metadata(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<MetadataProperty>, ApiError> {
        parse_many(response, "properties")
    }

    pub fn build_add_metadata(
        &self,
        application_id: &str,
        property: &MetadataProperty,
    ) -> Result<HttpRequest, ApiError> {
        let endpoint = Endpoint::ApplicationMetadata {
            application_id: application_id.to_string(),
        };
        self.send_json(HttpMethod::Post, &endpoint, property)
    }
}

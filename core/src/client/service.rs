use super::{parse_many, parse_one, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ServiceDefinition, ServiceGroup};

impl StratosClient {
    pub fn build_list_services(&self) -> HttpRequest {
        self.get(&Endpoint::Services)
    }

    pub fn parse_list_services(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ServiceDefinition>, ApiError> {
        parse_many(response, "services")
    }

    pub fn build_deploy_service(
        &self,
        service: &Definition<ServiceDefinition>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::Services, service)
    }

    pub fn build_undeploy_service(&self, service_type: &str) -> HttpRequest {
        self.delete(&Endpoint::Service {
            service_type: service_type.to_string(),
        })
    }

    pub fn build_deploy_service_group(
        &self,
        group: &Definition<ServiceGroup>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::ServiceGroups, group)
    }

    pub fn build_describe_service_group(&self, name: &str) -> HttpRequest {
        self.get(&Endpoint::ServiceGroup {
            name: name.to_string(),
        })
    }

    pub fn parse_describe_service_group(
        &self,
        response: HttpResponse,
    ) -> Result<ServiceGroup, ApiError> {
        parse_one(response, "serviceGroup")
    }

    pub fn build_undeploy_service_group(&self, name: &str) -> HttpRequest {
        self.delete(&Endpoint::ServiceGroup {
            name: name.to_string(),
        })
    }
}

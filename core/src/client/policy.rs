use super::{parse_many, parse_one, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AutoscalePolicy, DeploymentPolicy};

impl StratosClient {
    pub fn build_list_autoscaling_policies(&self) -> HttpRequest {
        self.get(&Endpoint::AutoscalingPolicies)
    }

    pub fn parse_list_autoscaling_policies(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<AutoscalePolicy>, ApiError> {
        parse_many(response, "autoscalePolicies")
    }

    pub fn build_describe_autoscaling_policy(&self, id: &str) -> HttpRequest {
        self.get(&Endpoint::AutoscalingPolicy { id: id.to_string() })
    }

    pub fn parse_describe_autoscaling_policy(
        &self,
        response: HttpResponse,
    ) -> Result<AutoscalePolicy, ApiError> {
        parse_one(response, "autoscalePolicy")
    }

    pub fn build_deploy_autoscaling_policy(
        &self,
        policy: &Definition<AutoscalePolicy>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::AutoscalingPolicies, policy)
    }

    /// Updates replace the policy with the same id; the id travels in the body.
    /// The server takes them on `/autoscalePolicies`, not the collection path.
    pub fn build_update_autoscaling_policy(
        &self,
        policy: &Definition<AutoscalePolicy>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Put, &Endpoint::AutoscalePolicies, policy)
    }

    pub fn build_list_deployment_policies(&self) -> HttpRequest {
        self.get(&Endpoint::DeploymentPolicies)
    }

    pub fn parse_list_deployment_policies(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<DeploymentPolicy>, ApiError> {
        parse_many(response, "deploymentPolicies")
    }

    pub fn build_describe_deployment_policy(&self, id: &str) -> HttpRequest {
        self.get(&Endpoint::DeploymentPolicy { id: id.to_string() })
    }

    pub fn parse_describe_deployment_policy(
        &self,
        response: HttpResponse,
    ) -> Result<DeploymentPolicy, ApiError> {
        parse_one(response, "deploymentPolicy")
    }

    pub fn build_deploy_deployment_policy(
        &self,
        policy: &Definition<DeploymentPolicy>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::DeploymentPolicies, policy)
    }

    pub fn build_update_deployment_policy(
        &self,
        policy: &Definition<DeploymentPolicy>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Put, &Endpoint::DeploymentPolicies, policy)
    }
}

use super::{parse_many, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::CartridgeDefinition;

impl StratosClient {
    pub fn build_list_cartridges(&self) -> HttpRequest {
        self.get(&Endpoint::Cartridges)
    }

    pub fn parse_list_cartridges(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CartridgeDefinition>, ApiError> {
        parse_many(response, "cartridges")
    }

    /// There is no per-type GET on the server, so describing a cartridge
    /// lists them all and picks the matching type.
    pub fn build_describe_cartridge(&self) -> HttpRequest {
        self.build_list_cartridges()
    }

    pub fn parse_describe_cartridge(
        &self,
        response: HttpResponse,
        cartridge_type: &str,
    ) -> Result<CartridgeDefinition, ApiError> {
        self.parse_list_cartridges(response)?
            .into_iter()
            .find(|c| c.cartridge_type == cartridge_type)
            .ok_or(ApiError::NotFound)
    }

    pub fn build_deploy_cartridge(
        &self,
        definition: &Definition<CartridgeDefinition>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::Cartridges, definition)
    }

    pub fn build_undeploy_cartridge(&self, cartridge_type: &str) -> HttpRequest {
        self.delete(&Endpoint::Cartridge {
            cartridge_type: cartridge_type.to_string(),
        })
    }

    /// Cartridges a tenant is subscribed to.
    pub fn build_list_tenant_cartridges(&self, tenant_id: &str) -> HttpRequest {
        self.get(&Endpoint::TenantSubscriptions {
            tenant_id: tenant_id.to_string(),
        })
    }

    pub fn parse_list_tenant_cartridges(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CartridgeDefinition>, ApiError> {
        parse_many(response, "cartridges")
    }
}

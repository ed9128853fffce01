use super::{parse_many, StratosClient};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TenantInfo;

impl StratosClient {
    pub fn build_add_tenant(&self, tenant: &TenantInfo) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::Tenants, tenant)
    }

    pub fn build_list_tenants(&self) -> HttpRequest {
        self.get(&Endpoint::Tenants)
    }

    pub fn parse_list_tenants(&self, response: HttpResponse) -> Result<Vec<TenantInfo>, ApiError> {
        parse_many(response, "tenants")
    }

    pub fn build_delete_tenant(&self, domain: &str) -> HttpRequest {
        self.delete(&Endpoint::Tenant {
            domain: domain.to_string(),
        })
    }

    pub fn build_activate_tenant(&self, domain: &str) -> HttpRequest {
        self.post_empty(&Endpoint::ActivateTenant {
            domain: domain.to_string(),
        })
    }

    pub fn build_deactivate_tenant(&self, domain: &str) -> HttpRequest {
        self.post_empty(&Endpoint::DeactivateTenant {
            domain: domain.to_string(),
        })
    }
}

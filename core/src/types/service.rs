use serde::{Deserialize, Serialize};

/// A multi-tenant service deployed from a cartridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub cartridge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_policy_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaling_policy_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_sub_domain: Option<String>,
    /// `*` for every tenant, otherwise `from-to`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_range: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

use serde::{Deserialize, Serialize};

use super::ServiceGroup;

/// Composite application definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDefinition {
    pub application_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ServiceGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cartridges: Vec<CartridgeReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartridgeReference {
    #[serde(rename = "type")]
    pub cartridge_type: String,
    #[serde(default)]
    pub cartridge_min: u32,
    #[serde(default)]
    pub cartridge_max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribable_info: Option<SubscribableInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribableInfo {
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaling_policy: Option<String>,
}

impl ApplicationDefinition {
    /// Subscription aliases of the top-level cartridges.
    pub fn subscription_aliases(&self) -> Vec<&str> {
        self.components
            .iter()
            .flat_map(|c| &c.cartridges)
            .filter_map(|c| c.subscribable_info.as_ref())
            .map(|info| info.alias.as_str())
            .collect()
    }
}

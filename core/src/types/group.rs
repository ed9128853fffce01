use serde::{Deserialize, Serialize};

/// Service group definition: a named composition of cartridges and
/// nested groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGroup {
    pub name: String,
    #[serde(default, alias = "subGroups", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ServiceGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cartridges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Dependencies>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub startup_orders: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_behaviour: Option<String>,
}

impl ServiceGroup {
    /// Every cartridge type reachable from this group, depth first.
    pub fn all_cartridges(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.cartridges.iter().map(String::as_str).collect();
        for group in &self.groups {
            out.extend(group.all_cartridges());
        }
        out
    }
}

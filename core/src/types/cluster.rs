use serde::{Deserialize, Serialize};

use super::Property;

/// Topology view of a running cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub cluster_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member: Vec<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_range: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_names: Vec<String>,
    #[serde(default)]
    pub is_lb_cluster: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<Property>,
}

/// A running instance inside a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    pub member_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_partition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_public_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lb_cluster_id: Option<String>,
}

impl Cluster {
    /// Private IPs of every member that has one, in member order.
    pub fn member_ips(&self) -> Vec<&str> {
        self.member
            .iter()
            .filter_map(|m| m.member_ip.as_deref())
            .collect()
    }

    /// Public IPs of every member that has one, in member order.
    pub fn member_public_ips(&self) -> Vec<&str> {
        self.member
            .iter()
            .filter_map(|m| m.member_public_ip.as_deref())
            .collect()
    }
}

use serde::{Deserialize, Serialize};

/// Autoscaling policy: thresholds the autoscaler scales against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoscalePolicy {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_thresholds: Option<LoadThresholds>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadThresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_in_flight: Option<ThresholdValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_consumption: Option<ThresholdValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_average: Option<ThresholdValues>,
}

/// Limits for one load metric. Servers send any subset of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

/// Deployment policy: which network partitions a cartridge may land in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPolicy {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_partition: Vec<ChildLevelNetworkPartition>,
}

/// A network partition as referenced from a deployment policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildLevelNetworkPartition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_algo: Option<String>,
    #[serde(default, alias = "partitions", skip_serializing_if = "Vec::is_empty")]
    pub child_level_partitions: Vec<ChildLevelPartition>,
    #[serde(default)]
    pub min: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildLevelPartition {
    #[serde(alias = "id")]
    pub partition_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_partition_id: Option<String>,
    #[serde(default)]
    pub max: u32,
}

impl DeploymentPolicy {
    /// Total instance ceiling across every child partition.
    pub fn max_instances(&self) -> u32 {
        self.network_partition
            .iter()
            .flat_map(|np| &np.child_level_partitions)
            .map(|p| p.max)
            .sum()
    }
}

//! REST endpoint catalogue.
//!
//! Every resource path the client talks to is a variant here, with its
//! path parameters as fields. Rendering percent-encodes each parameter so
//! identifiers containing `/`, spaces or `?` cannot escape their segment.

/// Prefix of the management REST API.
pub const API_CONTEXT: &str = "/api/v4.1";

/// Prefix of the metadata service.
pub const METADATA_CONTEXT: &str = "/metadata/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Init,

    Cartridges,
    Cartridge { cartridge_type: String },
    TenantSubscriptions { tenant_id: String },

    Partitions,
    Partition { id: String },

    AutoscalingPolicies,
    AutoscalingPolicy { id: String },
    /// Update target for autoscaling policies; differs from the collection path.
    AutoscalePolicies,

    DeploymentPolicies,
    DeploymentPolicy { id: String },

    KubernetesClusters,
    KubernetesCluster { cluster_id: String },
    KubernetesMaster { cluster_id: String },
    KubernetesHosts { cluster_id: String },
    KubernetesHost { cluster_id: String, host_id: String },
    KubernetesMinions { cluster_id: String },
    KubernetesMinion { cluster_id: String, minion_id: String },

    Tenants,
    Tenant { domain: String },
    ActivateTenant { domain: String },
    DeactivateTenant { domain: String },

    Users,
    User { user_name: String },

    Services,
    Service { service_type: String },

    ServiceGroups,
    ServiceGroup { name: String },

    Applications,
    Application { application_id: String },

    Cluster { subscription_alias: String },
    SynchronizeArtifacts { subscription_alias: String },
    SubscriptionProperties { subscription_alias: String },

    ApplicationMetadata { application_id: String },
}

impl Endpoint {
    /// Render the path (without base URL) with parameters substituted.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Init => api(&["init"]),

            Endpoint::Cartridges => api(&["cartridges"]),
            Endpoint::Cartridge { cartridge_type } => api(&["cartridges", cartridge_type]),
            Endpoint::TenantSubscriptions { tenant_id } => {
                api(&["subscriptions", tenant_id, "cartridges"])
            }

            Endpoint::Partitions => api(&["partitions"]),
            Endpoint::Partition { id } => api(&["partitions", id]),

            Endpoint::AutoscalingPolicies => api(&["autoscalingPolicies"]),
            Endpoint::AutoscalingPolicy { id } => api(&["autoscalingPolicies", id]),
            Endpoint::AutoscalePolicies => api(&["autoscalePolicies"]),

            Endpoint::DeploymentPolicies => api(&["deploymentPolicies"]),
            Endpoint::DeploymentPolicy { id } => api(&["deploymentPolicies", id]),

            Endpoint::KubernetesClusters => api(&["kubernetesCluster"]),
            Endpoint::KubernetesCluster { cluster_id } => api(&["kubernetesCluster", cluster_id]),
            Endpoint::KubernetesMaster { cluster_id } => {
                api(&["kubernetesCluster", cluster_id, "master"])
            }
            Endpoint::KubernetesHosts { cluster_id } => {
                api(&["kubernetesCluster", cluster_id, "hosts"])
            }
            Endpoint::KubernetesHost { cluster_id, host_id } => {
                api(&["kubernetesCluster", cluster_id, "hosts", host_id])
            }
            Endpoint::KubernetesMinions { cluster_id } => {
                api(&["kubernetesCluster", cluster_id, "minion"])
            }
            Endpoint::KubernetesMinion { cluster_id, minion_id } => {
                api(&["kubernetesCluster", cluster_id, "minion", minion_id])
            }

            Endpoint::Tenants => api(&["tenants"]),
            Endpoint::Tenant { domain } => api(&["tenants", domain]),
            Endpoint::ActivateTenant { domain } => api(&["tenants", "activate", domain]),
            Endpoint::DeactivateTenant { domain } => api(&["tenants", "deactivate", domain]),

            Endpoint::Users => api(&["users"]),
            Endpoint::User { user_name } => api(&["users", user_name]),

            Endpoint::Services => api(&["services"]),
            Endpoint::Service { service_type } => api(&["services", service_type]),

            Endpoint::ServiceGroups => api(&["groups"]),
            Endpoint::ServiceGroup { name } => api(&["groups", name]),

            Endpoint::Applications => api(&["applications"]),
            Endpoint::Application { application_id } => api(&["applications", application_id]),

            Endpoint::Cluster { subscription_alias } => api(&["clusters", subscription_alias]),
            Endpoint::SynchronizeArtifacts { subscription_alias } => {
                api(&["repo", "synchronize", subscription_alias])
            }
            Endpoint::SubscriptionProperties { subscription_alias } => {
                api(&["subscriptions", subscription_alias, "properties"])
            }

            Endpoint::ApplicationMetadata { application_id } => join(
                METADATA_CONTEXT,
                &["application", application_id, "properties"],
            ),
        }
    }
}

fn api(segments: &[&str]) -> String {
    join(API_CONTEXT, segments)
}

fn join(prefix: &str, segments: &[&str]) -> String {
    let mut path = String::from(prefix);
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree. One subcommand per management operation.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate the connection and credentials.
    Init,

    // --- cartridges ---
    /// List deployed cartridges.
    ListCartridges,
    /// Describe a cartridge by type.
    DescribeCartridge { cartridge_type: String },
    /// Deploy a cartridge definition.
    DeployCartridge(ResourceArgs),
    /// Undeploy a cartridge by type.
    UndeployCartridge { cartridge_type: String },
    /// List the cartridges a tenant is subscribed to.
    ListTenantCartridges { tenant_id: String },

    // --- partitions ---
    /// List partitions.
    ListPartitions,
    /// Describe a partition.
    DescribePartition { partition_id: String },
    /// Deploy a partition definition.
    DeployPartition(ResourceArgs),

    // --- policies ---
    /// List autoscaling policies.
    ListAutoscalingPolicies,
    /// Describe an autoscaling policy.
    DescribeAutoscalingPolicy { policy_id: String },
    /// Deploy an autoscaling policy.
    DeployAutoscalingPolicy(ResourceArgs),
    /// Update an existing autoscaling policy.
    UpdateAutoscalingPolicy(ResourceArgs),
    /// List deployment policies.
    ListDeploymentPolicies,
    /// Describe a deployment policy.
    DescribeDeploymentPolicy { policy_id: String },
    /// Deploy a deployment policy.
    DeployDeploymentPolicy(ResourceArgs),
    /// Update an existing deployment policy.
    UpdateDeploymentPolicy(ResourceArgs),

    // --- kubernetes ---
    /// List Kubernetes clusters.
    ListKubernetesClusters,
    /// Describe a Kubernetes cluster.
    DescribeKubernetesCluster { cluster_id: String },
    /// Deploy a Kubernetes cluster.
    DeployKubernetesCluster(ResourceArgs),
    /// Undeploy a Kubernetes cluster.
    UndeployKubernetesCluster { cluster_id: String },
    /// List the hosts of a Kubernetes cluster.
    ListKubernetesHosts { cluster_id: String },
    /// Add a host to a Kubernetes cluster.
    DeployKubernetesHost {
        cluster_id: String,
        #[command(flatten)]
        resource: ResourceArgs,
    },
    /// Replace a host of a Kubernetes cluster.
    UpdateKubernetesHost {
        cluster_id: String,
        host_id: String,
        #[command(flatten)]
        resource: ResourceArgs,
    },
    /// Remove a host from a Kubernetes cluster.
    UndeployKubernetesHost { cluster_id: String, host_id: String },
    /// Describe the master of a Kubernetes cluster.
    DescribeKubernetesMaster { cluster_id: String },
    /// Replace the master of a Kubernetes cluster.
    UpdateKubernetesMaster {
        cluster_id: String,
        #[command(flatten)]
        resource: ResourceArgs,
    },

    // --- tenants ---
    /// Add a tenant.
    AddTenant(AddTenantArgs),
    /// List tenants.
    ListTenants,
    /// Delete a tenant by domain.
    DeleteTenant { domain: String },
    /// Activate a tenant by domain.
    ActivateTenant { domain: String },
    /// Deactivate a tenant by domain.
    DeactivateTenant { domain: String },

    // --- users ---
    /// Add a user.
    AddUser(AddUserArgs),
    /// List users.
    ListUsers,
    /// Delete a user by name.
    DeleteUser { user_name: String },

    // --- services and groups ---
    /// List deployed multi-tenant services.
    ListServices,
    /// Deploy a multi-tenant service.
    DeployService(ResourceArgs),
    /// Undeploy a multi-tenant service by cartridge type.
    UndeployService { service_type: String },
    /// Deploy a service group definition.
    DeployServiceGroup(ResourceArgs),
    /// Describe a service group.
    DescribeServiceGroup { group_name: String },
    /// Undeploy a service group.
    UndeployServiceGroup { group_name: String },

    // --- applications ---
    /// List applications.
    ListApplications,
    /// Describe an application.
    DescribeApplication { application_id: String },
    /// Deploy an application definition.
    DeployApplication(ResourceArgs),
    /// Undeploy an application.
    UndeployApplication { application_id: String },

    // --- subscriptions ---
    /// Describe the cluster behind a subscription alias.
    DescribeCluster { alias: String },
    /// List the member IP addresses behind a subscription alias.
    ListMemberIps { alias: String },
    /// Synchronize repository artifacts for a subscription alias.
    Sync { alias: String },
    /// Replace the properties of a subscription from a JSON array.
    UpdateSubscriptionProperties {
        alias: String,
        #[command(flatten)]
        resource: ResourceArgs,
    },

    // --- metadata ---
    /// List metadata properties of an application.
    ListMetadata { application_id: String },
    /// Add a metadata property to an application.
    AddMetadata {
        application_id: String,
        #[arg(long)]
        key: String,
        /// Value to add; repeat for several values
        #[arg(long = "value", required = true)]
        values: Vec<String>,
    },
}

/// A JSON resource definition read from disk.
#[derive(Clone, Debug, Args)]
pub struct ResourceArgs {
    /// Path to the JSON definition
    #[arg(short = 'p', long = "resource-path", value_name = "FILE")]
    pub resource_path: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct AddTenantArgs {
    #[arg(long)]
    pub admin_username: String,
    #[arg(long)]
    pub admin_password: String,
    #[arg(long)]
    pub domain: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct AddUserArgs {
    #[arg(long)]
    pub user_name: String,
    #[arg(long)]
    pub credential: String,
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub profile_name: Option<String>,
}

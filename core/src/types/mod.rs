//! Data-model types for the Stratos management API.
//!
//! # Design
//! One serde struct per API resource, field names in camelCase as the server
//! sends them. Nearly every field is optional or defaulted: the server omits
//! empty values freely and describe/list responses carry different subsets of
//! the same bean. These types are defined independently of the mock server;
//! integration tests catch schema drift.

mod application;
mod cartridge;
mod cluster;
mod group;
mod kubernetes;
mod metadata;
mod partition;
mod policy;
mod property;
mod service;
mod tenant;
mod user;

pub use application::{ApplicationDefinition, CartridgeReference, Components, SubscribableInfo};
pub use cartridge::{CartridgeDefinition, IaasProvider, PortMapping};
pub use cluster::{Cluster, Member};
pub use group::{Dependencies, ServiceGroup};
pub use kubernetes::{KubernetesCluster, KubernetesHost, KubernetesMaster, PortRange};
pub use metadata::MetadataProperty;
pub use partition::Partition;
pub use policy::{
    AutoscalePolicy, ChildLevelNetworkPartition, ChildLevelPartition, DeploymentPolicy,
    LoadThresholds, ThresholdValues,
};
pub use property::Property;
pub use service::ServiceDefinition;
pub use tenant::TenantInfo;
pub use user::UserInfo;

//! Kubernetes clusters (groups), their hosts and their master.

use std::io::Write;
use std::path::Path;

use stratos_core::types::{KubernetesCluster, KubernetesHost, KubernetesMaster};
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output::{self, print_done};
use crate::session::{Outcome, Session};

pub fn list_clusters(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let clusters = session.call(
        StratosClient::build_list_kubernetes_clusters,
        StratosClient::parse_list_kubernetes_clusters,
    )?;
    output::print_list(
        out,
        flags.format,
        &clusters,
        "Kubernetes groups found:",
        "No kubernetes groups found",
    )
}

pub fn describe_cluster(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
) -> Result<(), CliError> {
    let cluster = session
        .call(
            |c| c.build_describe_kubernetes_cluster(cluster_id),
            StratosClient::parse_describe_kubernetes_cluster,
        )
        .map_err(CliError::not_found("Kubernetes cluster", cluster_id))?;
    output::print_described(
        out,
        flags.format,
        &format!("Kubernetes cluster: {}", cluster.group_id),
        &cluster,
    )
}

pub fn deploy_cluster(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<KubernetesCluster> = read_definition(path)?;
    let cluster = definition.bean();
    session.call_with(
        |c| c.build_deploy_kubernetes_cluster(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "kubernetes cluster", &cluster.group_id)
}

pub fn undeploy_cluster(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_undeploy_kubernetes_cluster(cluster_id),
            StratosClient::parse_deleted,
        )
        .map_err(CliError::not_found("Kubernetes cluster", cluster_id))?;
    done(out, flags, "undeployed", "kubernetes cluster", cluster_id)
}

pub fn list_hosts(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
) -> Result<(), CliError> {
    let hosts = session
        .call(
            |c| c.build_list_kubernetes_hosts(cluster_id),
            StratosClient::parse_list_kubernetes_hosts,
        )
        .map_err(CliError::not_found("Kubernetes cluster", cluster_id))?;
    output::print_list(
        out,
        flags.format,
        &hosts,
        "Kubernetes hosts found:",
        "No kubernetes hosts found",
    )
}

pub fn deploy_host(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<KubernetesHost> = read_definition(path)?;
    let host = definition.bean();
    session
        .call_with(
            |c| c.build_deploy_kubernetes_host(cluster_id, &definition),
            StratosClient::parse_updated,
        )
        .map_err(CliError::not_found("Kubernetes cluster", cluster_id))?;
    print_done(
        out,
        flags.format,
        &format!("You have successfully deployed host to Kubernetes cluster: {cluster_id}"),
        &Outcome {
            action: "deployed",
            resource: "kubernetes host",
            id: &host.host_id,
        },
    )
}

pub fn update_host(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
    host_id: &str,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<KubernetesHost> = read_definition(path)?;
    let host = definition.bean();
    if host.host_id != host_id {
        tracing::warn!(
            %host_id,
            definition = %host.host_id,
            "host id in the definition differs from the one addressed"
        );
    }
    session
        .call_with(
            |c| c.build_update_kubernetes_host(cluster_id, host_id, &definition),
            StratosClient::parse_updated,
        )
        .map_err(CliError::not_found("Kubernetes host", host_id))?;
    done(out, flags, "updated", "kubernetes host", host_id)
}

pub fn undeploy_host(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
    host_id: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_undeploy_kubernetes_host(cluster_id, host_id),
            StratosClient::parse_deleted,
        )
        .map_err(CliError::not_found("Kubernetes host", host_id))?;
    done(out, flags, "undeployed", "kubernetes host", host_id)
}

pub fn describe_master(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
) -> Result<(), CliError> {
    let master = session
        .call(
            |c| c.build_describe_kubernetes_master(cluster_id),
            StratosClient::parse_describe_kubernetes_master,
        )
        .map_err(CliError::not_found("Kubernetes master of cluster", cluster_id))?;
    output::print_described(
        out,
        flags.format,
        &format!("Kubernetes master: {}", master.host_id),
        &master,
    )
}

pub fn update_master(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cluster_id: &str,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<KubernetesMaster> = read_definition(path)?;
    let master = definition.bean();
    session
        .call_with(
            |c| c.build_update_kubernetes_master(cluster_id, &definition),
            StratosClient::parse_updated,
        )
        .map_err(CliError::not_found("Kubernetes cluster", cluster_id))?;
    done(out, flags, "updated", "kubernetes master", &master.host_id)
}

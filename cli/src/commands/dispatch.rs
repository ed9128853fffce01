use std::io::Write;

use crate::cli::root_commands::Commands;
use crate::cli::GlobalFlags;
use crate::commands::{
    application, cartridge, init, kubernetes, metadata, partition, policy, service, subscription,
    tenant, user,
};
use crate::error::CliError;
use crate::session::Session;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Commands::Init => init::handle(session, flags, out),

        Commands::ListCartridges => cartridge::list(session, flags, out),
        Commands::DescribeCartridge { cartridge_type } => {
            cartridge::describe(session, flags, out, cartridge_type)
        }
        Commands::DeployCartridge(args) => cartridge::deploy(session, flags, out, &args.resource_path),
        Commands::UndeployCartridge { cartridge_type } => {
            cartridge::undeploy(session, flags, out, cartridge_type)
        }
        Commands::ListTenantCartridges { tenant_id } => {
            cartridge::list_for_tenant(session, flags, out, tenant_id)
        }

        Commands::ListPartitions => partition::list(session, flags, out),
        Commands::DescribePartition { partition_id } => {
            partition::describe(session, flags, out, partition_id)
        }
        Commands::DeployPartition(args) => partition::deploy(session, flags, out, &args.resource_path),

        Commands::ListAutoscalingPolicies => policy::list_autoscaling(session, flags, out),
        Commands::DescribeAutoscalingPolicy { policy_id } => {
            policy::describe_autoscaling(session, flags, out, policy_id)
        }
        Commands::DeployAutoscalingPolicy(args) => {
            policy::deploy_autoscaling(session, flags, out, &args.resource_path)
        }
        Commands::UpdateAutoscalingPolicy(args) => {
            policy::update_autoscaling(session, flags, out, &args.resource_path)
        }
        Commands::ListDeploymentPolicies => policy::list_deployment(session, flags, out),
        Commands::DescribeDeploymentPolicy { policy_id } => {
            policy::describe_deployment(session, flags, out, policy_id)
        }
        Commands::DeployDeploymentPolicy(args) => {
            policy::deploy_deployment(session, flags, out, &args.resource_path)
        }
        Commands::UpdateDeploymentPolicy(args) => {
            policy::update_deployment(session, flags, out, &args.resource_path)
        }

        Commands::ListKubernetesClusters => kubernetes::list_clusters(session, flags, out),
        Commands::DescribeKubernetesCluster { cluster_id } => {
            kubernetes::describe_cluster(session, flags, out, cluster_id)
        }
        Commands::DeployKubernetesCluster(args) => {
            kubernetes::deploy_cluster(session, flags, out, &args.resource_path)
        }
        Commands::UndeployKubernetesCluster { cluster_id } => {
            kubernetes::undeploy_cluster(session, flags, out, cluster_id)
        }
        Commands::ListKubernetesHosts { cluster_id } => {
            kubernetes::list_hosts(session, flags, out, cluster_id)
        }
        Commands::DeployKubernetesHost {
            cluster_id,
            resource,
        } => kubernetes::deploy_host(session, flags, out, cluster_id, &resource.resource_path),
        Commands::UpdateKubernetesHost {
            cluster_id,
            host_id,
            resource,
        } => kubernetes::update_host(
            session,
            flags,
            out,
            cluster_id,
            host_id,
            &resource.resource_path,
        ),
        Commands::UndeployKubernetesHost {
            cluster_id,
            host_id,
        } => kubernetes::undeploy_host(session, flags, out, cluster_id, host_id),
        Commands::DescribeKubernetesMaster { cluster_id } => {
            kubernetes::describe_master(session, flags, out, cluster_id)
        }
        Commands::UpdateKubernetesMaster {
            cluster_id,
            resource,
        } => kubernetes::update_master(session, flags, out, cluster_id, &resource.resource_path),

        Commands::AddTenant(args) => tenant::add(session, flags, out, args),
        Commands::ListTenants => tenant::list(session, flags, out),
        Commands::DeleteTenant { domain } => tenant::delete(session, flags, out, domain),
        Commands::ActivateTenant { domain } => tenant::activate(session, flags, out, domain),
        Commands::DeactivateTenant { domain } => tenant::deactivate(session, flags, out, domain),

        Commands::AddUser(args) => user::add(session, flags, out, args),
        Commands::ListUsers => user::list(session, flags, out),
        Commands::DeleteUser { user_name } => user::delete(session, flags, out, user_name),

        Commands::ListServices => service::list(session, flags, out),
        Commands::DeployService(args) => service::deploy(session, flags, out, &args.resource_path),
        Commands::UndeployService { service_type } => {
            service::undeploy(session, flags, out, service_type)
        }
        Commands::DeployServiceGroup(args) => {
            service::deploy_group(session, flags, out, &args.resource_path)
        }
        Commands::DescribeServiceGroup { group_name } => {
            service::describe_group(session, flags, out, group_name)
        }
        Commands::UndeployServiceGroup { group_name } => {
            service::undeploy_group(session, flags, out, group_name)
        }

        Commands::ListApplications => application::list(session, flags, out),
        Commands::DescribeApplication { application_id } => {
            application::describe(session, flags, out, application_id)
        }
        Commands::DeployApplication(args) => {
            application::deploy(session, flags, out, &args.resource_path)
        }
        Commands::UndeployApplication { application_id } => {
            application::undeploy(session, flags, out, application_id)
        }

        Commands::DescribeCluster { alias } => {
            subscription::describe_cluster(session, flags, out, alias)
        }
        Commands::ListMemberIps { alias } => subscription::list_member_ips(session, flags, out, alias),
        Commands::Sync { alias } => subscription::sync(session, flags, out, alias),
        Commands::UpdateSubscriptionProperties { alias, resource } => {
            subscription::update_properties(session, flags, out, alias, &resource.resource_path)
        }

        Commands::ListMetadata { application_id } => {
            metadata::list(session, flags, out, application_id)
        }
        Commands::AddMetadata {
            application_id,
            key,
            values,
        } => metadata::add(session, flags, out, application_id, key, values),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::Cli;
    use crate::commands::testing::table_flags;
    use crate::session::fake::FakeTransport;

    fn run(args: &[&str], fake: &FakeTransport) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out: Vec<u8> = Vec::new();
        dispatch(&cli.command, &fake.session(), &table_flags(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn routes_parsed_commands_to_handlers() {
        let fake = FakeTransport::default();
        fake.respond(200, "").respond(204, "").respond(200, "");

        assert_eq!(run(&["stratos", "list-users"], &fake), "No users found\n");
        assert_eq!(
            run(&["stratos", "undeploy-kubernetes-host", "k8s-1", "slave-1"], &fake),
            "Successfully undeployed kubernetes host: slave-1\n"
        );
        assert_eq!(
            run(&["stratos", "sync", "myphp"], &fake),
            "Synchronizing artifacts for cartridge subscription alias: myphp\n"
        );

        let paths: Vec<String> = fake.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "https://stratos.test:9443/api/v4.1/users".to_string(),
                "https://stratos.test:9443/api/v4.1/kubernetesCluster/k8s-1/hosts/slave-1"
                    .to_string(),
                "https://stratos.test:9443/api/v4.1/repo/synchronize/myphp".to_string(),
            ]
        );
    }
}

//! Autoscaling and deployment policies.

use std::io::Write;
use std::path::Path;

use stratos_core::types::{AutoscalePolicy, DeploymentPolicy};
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::Session;

pub fn list_autoscaling(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let policies = session.call(
        StratosClient::build_list_autoscaling_policies,
        StratosClient::parse_list_autoscaling_policies,
    )?;
    output::print_list(
        out,
        flags.format,
        &policies,
        "Autoscaling policies found:",
        "No autoscaling policies found",
    )
}

pub fn describe_autoscaling(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    policy_id: &str,
) -> Result<(), CliError> {
    let policy = session
        .call(
            |c| c.build_describe_autoscaling_policy(policy_id),
            StratosClient::parse_describe_autoscaling_policy,
        )
        .map_err(CliError::not_found("Autoscaling policy", policy_id))?;
    output::print_described(
        out,
        flags.format,
        &format!("Autoscaling policy: {}", policy.id),
        &policy,
    )
}

pub fn deploy_autoscaling(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<AutoscalePolicy> = read_definition(path)?;
    let policy = definition.bean();
    session.call_with(
        |c| c.build_deploy_autoscaling_policy(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "autoscaling policy", &policy.id)
}

pub fn update_autoscaling(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<AutoscalePolicy> = read_definition(path)?;
    let policy = definition.bean();
    session
        .call_with(
            |c| c.build_update_autoscaling_policy(&definition),
            StratosClient::parse_updated,
        )
        .map_err(CliError::not_found("Autoscaling policy", &policy.id))?;
    done(out, flags, "updated", "autoscaling policy", &policy.id)
}

pub fn list_deployment(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let policies = session.call(
        StratosClient::build_list_deployment_policies,
        StratosClient::parse_list_deployment_policies,
    )?;
    output::print_list(
        out,
        flags.format,
        &policies,
        "Deployment policies found:",
        "No deployment policies found",
    )
}

pub fn describe_deployment(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    policy_id: &str,
) -> Result<(), CliError> {
    let policy = session
        .call(
            |c| c.build_describe_deployment_policy(policy_id),
            StratosClient::parse_describe_deployment_policy,
        )
        .map_err(CliError::not_found("Deployment policy", policy_id))?;
    output::print_described(
        out,
        flags.format,
        &format!("Deployment policy: {}", policy.id),
        &policy,
    )
}

pub fn deploy_deployment(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<DeploymentPolicy> = read_definition(path)?;
    let policy = definition.bean();
    session.call_with(
        |c| c.build_deploy_deployment_policy(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "deployment policy", &policy.id)
}

pub fn update_deployment(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<DeploymentPolicy> = read_definition(path)?;
    let policy = definition.bean();
    session
        .call_with(
            |c| c.build_update_deployment_policy(&definition),
            StratosClient::parse_updated,
        )
        .map_err(CliError::not_found("Deployment policy", &policy.id))?;
    done(out, flags, "updated", "deployment policy", &policy.id)
}

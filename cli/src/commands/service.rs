//! Multi-tenant services and service groups.

use std::io::Write;
use std::path::Path;

use stratos_core::types::{ServiceDefinition, ServiceGroup};
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::Session;

pub fn list(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    let services = session.call(
        StratosClient::build_list_services,
        StratosClient::parse_list_services,
    )?;
    output::print_list(
        out,
        flags.format,
        &services,
        "Available multi-tenant services:",
        "No multi-tenant services found",
    )
}

pub fn deploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<ServiceDefinition> = read_definition(path)?;
    let service = definition.bean();
    session.call_with(
        |c| c.build_deploy_service(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "service", &service.cartridge_type)
}

pub fn undeploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    service_type: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_undeploy_service(service_type),
            StratosClient::parse_deleted,
        )
        .map_err(CliError::not_found("Service", service_type))?;
    done(out, flags, "undeployed", "service", service_type)
}

pub fn deploy_group(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<ServiceGroup> = read_definition(path)?;
    let group = definition.bean();
    tracing::debug!(
        group = %group.name,
        cartridges = ?group.all_cartridges(),
        "deploying service group"
    );
    session.call_with(
        |c| c.build_deploy_service_group(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "service group", &group.name)
}

pub fn describe_group(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    group_name: &str,
) -> Result<(), CliError> {
    let group = session
        .call(
            |c| c.build_describe_service_group(group_name),
            StratosClient::parse_describe_service_group,
        )
        .map_err(CliError::not_found("Service group", group_name))?;
    output::print_described(
        out,
        flags.format,
        &format!("Service Group : {}", group.name),
        &group,
    )
}

pub fn undeploy_group(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    group_name: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_undeploy_service_group(group_name),
            StratosClient::parse_deleted,
        )
        .map_err(CliError::not_found("Service group", group_name))?;
    done(out, flags, "undeployed", "service group", group_name)
}

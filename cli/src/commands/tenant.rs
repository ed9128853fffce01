use std::io::Write;

use stratos_core::types::TenantInfo;
use stratos_core::StratosClient;

use crate::cli::root_commands::AddTenantArgs;
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output::{self, print_done};
use crate::session::{Outcome, Session};

/// New tenants are always created inactive; activation is a separate call.
fn tenant_from(args: &AddTenantArgs) -> TenantInfo {
    TenantInfo {
        admin: Some(args.admin_username.clone()),
        firstname: Some(args.first_name.clone()),
        lastname: Some(args.last_name.clone()),
        admin_password: Some(args.admin_password.clone()),
        tenant_domain: args.domain.clone(),
        email: Some(args.email.clone()),
        active: false,
        ..Default::default()
    }
}

pub fn add(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    args: &AddTenantArgs,
) -> Result<(), CliError> {
    let tenant = tenant_from(args);
    session.call_with(|c| c.build_add_tenant(&tenant), StratosClient::parse_created)?;
    confirm(out, flags, "Tenant added successfully", "added", &args.domain)
}

pub fn list(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    let tenants = session.call(
        StratosClient::build_list_tenants,
        StratosClient::parse_list_tenants,
    )?;
    output::print_list(out, flags.format, &tenants, "Tenants:", "No tenants found")
}

pub fn delete(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    domain: &str,
) -> Result<(), CliError> {
    session
        .call(|c| c.build_delete_tenant(domain), StratosClient::parse_deleted)
        .map_err(CliError::not_found("Tenant", domain))?;
    confirm(
        out,
        flags,
        &format!("You have successfully deleted {domain} tenant"),
        "deleted",
        domain,
    )
}

pub fn activate(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    domain: &str,
) -> Result<(), CliError> {
    session
        .call(|c| c.build_activate_tenant(domain), StratosClient::parse_accepted)
        .map_err(CliError::not_found("Tenant", domain))?;
    confirm(
        out,
        flags,
        &format!("You have successfully activated tenant: {domain}"),
        "activated",
        domain,
    )
}

pub fn deactivate(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    domain: &str,
) -> Result<(), CliError> {
    session
        .call(|c| c.build_deactivate_tenant(domain), StratosClient::parse_accepted)
        .map_err(CliError::not_found("Tenant", domain))?;
    confirm(
        out,
        flags,
        &format!("You have successfully deactivated {domain} tenant"),
        "deactivated",
        domain,
    )
}

fn confirm(
    out: &mut dyn Write,
    flags: &GlobalFlags,
    message: &str,
    action: &str,
    domain: &str,
) -> Result<(), CliError> {
    print_done(
        out,
        flags.format,
        message,
        &Outcome {
            action,
            resource: "tenant",
            id: domain,
        },
    )
}

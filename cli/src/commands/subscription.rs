//! Operations addressed by a cartridge subscription alias.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use stratos_core::types::Property;
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::error::CliError;
use crate::output::{self, print_done};
use crate::session::{Outcome, Session};

pub fn describe_cluster(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    alias: &str,
) -> Result<(), CliError> {
    let cluster = session
        .call(
            |c| c.build_describe_cluster(alias),
            StratosClient::parse_describe_cluster,
        )
        .map_err(CliError::not_found("Subscription", alias))?;
    output::print_described(
        out,
        flags.format,
        &format!("Cluster: {}", cluster.cluster_id),
        &cluster,
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberIps<'a> {
    alias: &'a str,
    member_ips: Vec<&'a str>,
    member_public_ips: Vec<&'a str>,
}

pub fn list_member_ips(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    alias: &str,
) -> Result<(), CliError> {
    let cluster = session
        .call(
            |c| c.build_describe_cluster(alias),
            StratosClient::parse_describe_cluster,
        )
        .map_err(CliError::not_found("Subscription", alias))?;
    let ips = MemberIps {
        alias,
        member_ips: cluster.member_ips(),
        member_public_ips: cluster.member_public_ips(),
    };

    match flags.format {
        OutputFormat::Json => output::print_json(out, &ips),
        OutputFormat::Table if ips.member_ips.is_empty() && ips.member_public_ips.is_empty() => {
            writeln!(out, "No member IPs found")?;
            Ok(())
        }
        OutputFormat::Table => {
            print_addresses(out, &format!("Private IPs of {alias}:"), &ips.member_ips)?;
            print_addresses(out, &format!("Public IPs of {alias}:"), &ips.member_public_ips)
        }
    }
}

fn print_addresses(out: &mut dyn Write, title: &str, addresses: &[&str]) -> Result<(), CliError> {
    writeln!(out, "{title}")?;
    if addresses.is_empty() {
        writeln!(out, "  -")?;
    }
    for address in addresses {
        writeln!(out, "  {address}")?;
    }
    Ok(())
}

pub fn sync(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    alias: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_synchronize_artifacts(alias),
            StratosClient::parse_accepted,
        )
        .map_err(CliError::not_found("Subscription", alias))?;
    print_done(
        out,
        flags.format,
        &format!("Synchronizing artifacts for cartridge subscription alias: {alias}"),
        &Outcome {
            action: "synchronized",
            resource: "subscription",
            id: alias,
        },
    )
}

/// The definition file holds a JSON array of `{name, value}` pairs.
pub fn update_properties(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    alias: &str,
    path: &Path,
) -> Result<(), CliError> {
    let properties: Definition<Vec<Property>> = read_definition(path)?;
    tracing::debug!(%alias, count = properties.bean().len(), "updating subscription properties");
    session
        .call_with(
            |c| c.build_update_subscription_properties(alias, &properties),
            StratosClient::parse_updated,
        )
        .map_err(CliError::not_found("Subscription", alias))?;
    done(out, flags, "updated properties of", "subscription", alias)
}

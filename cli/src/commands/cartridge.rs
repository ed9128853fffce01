use std::io::Write;
use std::path::Path;

use stratos_core::types::{CartridgeDefinition, IaasProvider};
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::error::CliError;
use crate::output::{self, cell, table, TableRow};
use crate::session::Session;

const RULE: &str = "-------------------------------------";

pub fn list(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    let cartridges = session.call(
        StratosClient::build_list_cartridges,
        StratosClient::parse_list_cartridges,
    )?;
    output::print_list(out, flags.format, &cartridges, "Cartridges found:", "No cartridges found")
}

pub fn describe(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cartridge_type: &str,
) -> Result<(), CliError> {
    let cartridge = session
        .call(StratosClient::build_describe_cartridge, |c, r| {
            c.parse_describe_cartridge(r, cartridge_type)
        })
        .map_err(CliError::not_found("Cartridge", cartridge_type))?;

    match flags.format {
        OutputFormat::Json => output::print_json(out, &cartridge),
        OutputFormat::Table => print_information(out, &cartridge),
    }
}

fn print_information(out: &mut dyn Write, cartridge: &CartridgeDefinition) -> Result<(), CliError> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Cartridge Information:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Type: {}", cartridge.cartridge_type)?;
    writeln!(out, "Category: {}", cell(cartridge.category.as_deref()))?;
    writeln!(out, "Name: {}", cell(cartridge.display_name.as_deref()))?;
    writeln!(out, "Description: {}", cell(cartridge.description.as_deref()))?;
    writeln!(out, "Version: {}", cell(cartridge.version.as_deref()))?;
    writeln!(out, "Multi-Tenant: {}", cartridge.multi_tenant)?;
    writeln!(out, "Hostname: {}", cell(cartridge.host.as_deref()))?;

    if !cartridge.iaas_provider.is_empty() {
        let rows = cartridge
            .iaas_provider
            .iter()
            .map(TableRow::row)
            .collect::<Vec<_>>();
        writeln!(out, "{RULE}")?;
        writeln!(out, "IaaS Providers:")?;
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "{}",
            table::render_table(IaasProvider::HEADERS, &rows, table::TableOptions::default())
        )?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

pub fn deploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<CartridgeDefinition> = read_definition(path)?;
    let cartridge = definition.bean();
    session.call_with(
        |c| c.build_deploy_cartridge(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "cartridge", &cartridge.cartridge_type)
}

pub fn undeploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    cartridge_type: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_undeploy_cartridge(cartridge_type),
            StratosClient::parse_deleted,
        )
        .map_err(CliError::not_found("Cartridge", cartridge_type))?;
    done(out, flags, "undeployed", "cartridge", cartridge_type)
}

pub fn list_for_tenant(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    tenant_id: &str,
) -> Result<(), CliError> {
    let cartridges = session.call(
        |c| c.build_list_tenant_cartridges(tenant_id),
        StratosClient::parse_list_tenant_cartridges,
    )?;
    output::print_list(
        out,
        flags.format,
        &cartridges,
        "Subscribed cartridges found:",
        "No subscribed cartridges found",
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stratos_core::HttpMethod;

    use super::*;
    use crate::commands::testing::{definition_file, json_flags, rendered, table_flags};
    use crate::session::fake::FakeTransport;

    const CARTRIDGES: &str = r#"{"cartridges":[
        {"type":"php","category":"framework","displayName":"PHP","description":"PHP cartridge","version":"7","multiTenant":false,"host":"stratos.org",
         "iaasProvider":[{"type":"openstack","provider":"openstack","name":"os-1","imageId":"img-1","maxInstanceLimit":-1}]},
        {"type":"mysql","category":"data","multiTenant":true}
    ]}"#;

    #[test]
    fn list_prints_fixed_columns() {
        let fake = FakeTransport::default();
        fake.respond(200, CARTRIDGES);
        let out = rendered(|out| list(&fake.session(), &table_flags(), out));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Cartridges found:");
        assert_eq!(
            lines[1],
            "Type   Category   Name  Description    Version  Multi-Tenant"
        );
        assert!(lines[3].starts_with("php    framework  PHP   PHP cartridge  "));
        assert!(lines[4].starts_with("mysql  data       -"));
        assert!(lines[4].ends_with("true"));
    }

    #[test]
    fn empty_list_prints_message() {
        let fake = FakeTransport::default();
        fake.respond(200, r#"{"cartridges":[]}"#);
        let out = rendered(|out| list(&fake.session(), &table_flags(), out));
        assert_eq!(out, "No cartridges found\n");
    }

    #[test]
    fn describe_prints_information_and_iaas_table() {
        let fake = FakeTransport::default();
        fake.respond(200, CARTRIDGES);
        let out = rendered(|out| describe(&fake.session(), &table_flags(), out, "php"));

        assert!(out.contains("Cartridge Information:\n"));
        assert!(out.contains("Type: php\n"));
        assert!(out.contains("Multi-Tenant: false\n"));
        assert!(out.contains("Hostname: stratos.org\n"));
        assert!(out.contains("IaaS Providers:\n"));
        assert!(out.contains("Provider   Type       Name  Image ID  Max Instance Limit"));
        assert!(out.ends_with(&format!("{RULE}\n")));
    }

    #[test]
    fn describe_unknown_type_is_not_found() {
        let fake = FakeTransport::default();
        fake.respond(200, CARTRIDGES);
        let mut out: Vec<u8> = Vec::new();
        let err = describe(&fake.session(), &table_flags(), &mut out, "ruby").unwrap_err();
        assert_eq!(err.to_string(), "Cartridge not found: ruby");
    }

    #[test]
    fn deploy_sends_the_file_unchanged() {
        let file = definition_file(
            r#"{"type":"php","category":"framework","persistence":{"isRequired":true}}"#,
        );
        let fake = FakeTransport::default();
        fake.respond(201, "");
        let out = rendered(|out| deploy(&fake.session(), &table_flags(), out, file.path()));
        assert_eq!(out, "Successfully deployed cartridge: php\n");

        let request = &fake.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "https://stratos.test:9443/api/v4.1/cartridges");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "type": "php",
                "category": "framework",
                "persistence": {"isRequired": true}
            })
        );
    }

    #[test]
    fn deploy_surfaces_server_message() {
        let file = definition_file(r#"{"type":"php"}"#);
        let fake = FakeTransport::default();
        fake.respond(409, r#"{"Error":{"errorCode":409,"errorMessage":"Cartridge php already exists"}}"#);
        let mut out: Vec<u8> = Vec::new();
        let err = deploy(&fake.session(), &table_flags(), &mut out, file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Cartridge php already exists");
        assert!(out.is_empty());
    }

    #[test]
    fn undeploy_json_outcome() {
        let fake = FakeTransport::default();
        fake.respond(204, "");
        let out = rendered(|out| undeploy(&fake.session(), &json_flags(), out, "php"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["action"], "undeployed");
        assert_eq!(parsed["id"], "php");
    }

    #[test]
    fn tenant_cartridges_use_subscription_path() {
        let fake = FakeTransport::default();
        fake.respond(200, "[]");
        let out = rendered(|out| list_for_tenant(&fake.session(), &table_flags(), out, "-1234"));
        assert_eq!(out, "No subscribed cartridges found\n");
        assert_eq!(
            fake.requests()[0].path,
            "https://stratos.test:9443/api/v4.1/subscriptions/-1234/cartridges"
        );
    }
}

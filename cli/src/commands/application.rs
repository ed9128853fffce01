use std::io::Write;
use std::path::Path;

use stratos_core::types::ApplicationDefinition;
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::Session;

pub fn list(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    let applications = session.call(
        StratosClient::build_list_applications,
        StratosClient::parse_list_applications,
    )?;
    output::print_list(
        out,
        flags.format,
        &applications,
        "Applications found:",
        "No applications found",
    )
}

pub fn describe(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    application_id: &str,
) -> Result<(), CliError> {
    let application = session
        .call(
            |c| c.build_describe_application(application_id),
            StratosClient::parse_describe_application,
        )
        .map_err(CliError::not_found("Application", application_id))?;
    output::print_described(
        out,
        flags.format,
        &format!("Application: {}", application.application_id),
        &application,
    )
}

pub fn deploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<ApplicationDefinition> = read_definition(path)?;
    let application = definition.bean();
    tracing::debug!(
        application = %application.application_id,
        aliases = ?application.subscription_aliases(),
        "deploying application"
    );
    session.call_with(
        |c| c.build_deploy_application(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "application", &application.application_id)
}

pub fn undeploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    application_id: &str,
) -> Result<(), CliError> {
    session
        .call(
            |c| c.build_undeploy_application(application_id),
            StratosClient::parse_deleted,
        )
        .map_err(CliError::not_found("Application", application_id))?;
    done(out, flags, "undeployed", "application", application_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::testing::{definition_file, rendered, table_flags};
    use crate::session::fake::FakeTransport;

    #[test]
    fn list_applications_table() {
        let fake = FakeTransport::default();
        fake.respond(
            200,
            r#"{"applications":[{"applicationId":"wordpress","name":"WordPress","alias":"wp","status":"Active"}]}"#,
        );
        let out = rendered(|out| list(&fake.session(), &table_flags(), out));
        let expected = "\
Applications found:
Application ID  Name       Alias  Status
----------------------------------------
wordpress       WordPress  wp     Active
";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_applications() {
        let fake = FakeTransport::default();
        fake.respond(200, "");
        let out = rendered(|out| list(&fake.session(), &table_flags(), out));
        assert_eq!(out, "No applications found\n");
    }

    #[test]
    fn describe_application_heading() {
        let fake = FakeTransport::default();
        fake.respond(200, r#"{"applicationId":"wordpress","status":"Active"}"#);
        let out = rendered(|out| describe(&fake.session(), &table_flags(), out, "wordpress"));
        assert!(out.starts_with("Application: wordpress\n"));
        assert!(out.contains(r#""status": "Active""#));
    }

    #[test]
    fn deploy_and_undeploy_application() {
        let file = definition_file(
            r#"{"applicationId":"wordpress","components":{"cartridges":[{"type":"php","cartridgeMin":1,"cartridgeMax":2,"subscribableInfo":{"alias":"myphp"}}]}}"#,
        );
        let fake = FakeTransport::default();
        fake.respond(201, "").respond(404, "");
        let session = fake.session();

        let out = rendered(|out| deploy(&session, &table_flags(), out, file.path()));
        assert_eq!(out, "Successfully deployed application: wordpress\n");

        let mut out: Vec<u8> = Vec::new();
        let err = undeploy(&session, &table_flags(), &mut out, "wordpress").unwrap_err();
        assert_eq!(err.to_string(), "Application not found: wordpress");
    }
}

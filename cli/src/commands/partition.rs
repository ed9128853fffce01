use std::io::Write;
use std::path::Path;

use stratos_core::types::Partition;
use stratos_core::{Definition, StratosClient};

use super::shared::{done, read_definition};
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::Session;

pub fn list(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    let partitions = session.call(
        StratosClient::build_list_partitions,
        StratosClient::parse_list_partitions,
    )?;
    output::print_list(out, flags.format, &partitions, "Partitions found:", "No partitions found")
}

pub fn describe(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    partition_id: &str,
) -> Result<(), CliError> {
    let partition = session
        .call(
            |c| c.build_describe_partition(partition_id),
            StratosClient::parse_describe_partition,
        )
        .map_err(CliError::not_found("Partition", partition_id))?;
    output::print_described(out, flags.format, &format!("Partition: {}", partition.id), &partition)
}

pub fn deploy(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    path: &Path,
) -> Result<(), CliError> {
    let definition: Definition<Partition> = read_definition(path)?;
    let partition = definition.bean();
    session.call_with(
        |c| c.build_deploy_partition(&definition),
        StratosClient::parse_created,
    )?;
    done(out, flags, "deployed", "partition", &partition.id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::testing::{definition_file, json_flags, rendered, table_flags};
    use crate::session::fake::FakeTransport;

    #[test]
    fn list_shows_accessibility() {
        let fake = FakeTransport::default();
        fake.respond(
            200,
            r#"{"partitions":[{"id":"P1","provider":"ec2","isPublic":true},{"id":"P2"}]}"#,
        );
        let out = rendered(|out| list(&fake.session(), &table_flags(), out));
        let expected = "\
Partitions found:
ID  Provider  Accessibility
---------------------------
P1  ec2       Public
P2  -         Private
";
        assert_eq!(out, expected);
    }

    #[test]
    fn describe_prints_heading_then_json() {
        let fake = FakeTransport::default();
        fake.respond(200, r#"{"partition":{"id":"P1","provider":"ec2"}}"#);
        let out = rendered(|out| describe(&fake.session(), &table_flags(), out, "P1"));
        let (heading, body) = out.split_once('\n').unwrap();
        assert_eq!(heading, "Partition: P1");
        let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed["provider"], "ec2");
    }

    #[test]
    fn describe_missing_partition() {
        let fake = FakeTransport::default();
        fake.respond(404, "");
        let mut out: Vec<u8> = Vec::new();
        let err = describe(&fake.session(), &json_flags(), &mut out, "P9").unwrap_err();
        assert_eq!(err.to_string(), "Partition not found: P9");
    }

    #[test]
    fn deploy_posts_definition() {
        let file = definition_file(r#"{"id":"P1","provider":"ec2","property":[{"name":"region","value":"us-east-1"}]}"#);
        let fake = FakeTransport::default();
        fake.respond(201, "");
        let out = rendered(|out| deploy(&fake.session(), &table_flags(), out, file.path()));
        assert_eq!(out, "Successfully deployed partition: P1\n");
        assert_eq!(
            fake.requests()[0].path,
            "https://stratos.test:9443/api/v4.1/partitions"
        );
    }
}

use std::io::Write;

use stratos_core::types::MetadataProperty;
use stratos_core::StratosClient;

use super::shared::done;
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::Session;

pub fn list(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    application_id: &str,
) -> Result<(), CliError> {
    let properties = session.call(
        |c| c.build_list_metadata(application_id),
        StratosClient::parse_list_metadata,
    )?;
    output::print_list(
        out,
        flags.format,
        &properties,
        &format!("Metadata of application {application_id}:"),
        "No metadata found",
    )
}

pub fn add(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    application_id: &str,
    key: &str,
    values: &[String],
) -> Result<(), CliError> {
    let mut property = MetadataProperty {
        key: key.to_string(),
        values: Vec::with_capacity(values.len()),
    };
    for value in values {
        property.add_value(value.as_str());
    }
    session.call_with(
        |c| c.build_add_metadata(application_id, &property),
        StratosClient::parse_created,
    )?;
    done(out, flags, "added", "metadata property", key)
}

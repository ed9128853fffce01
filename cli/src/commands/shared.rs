use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use stratos_core::Definition;

use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::Outcome;

/// Read a JSON resource definition. The file's document is what gets sent;
/// the typed bean only has to decode for the identifiers to be read.
pub fn read_definition<T: DeserializeOwned>(path: &Path) -> Result<Definition<T>, CliError> {
    tracing::debug!(path = %path.display(), "reading resource definition");
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadDefinition {
        path: path.to_path_buf(),
        source,
    })?;
    Definition::from_json(&raw).map_err(|source| CliError::InvalidDefinition {
        path: path.to_path_buf(),
        source,
    })
}

/// Confirm a write in the common "Successfully <action> <resource>: <id>" form.
pub fn done(
    out: &mut dyn Write,
    flags: &GlobalFlags,
    action: &str,
    resource: &str,
    id: &str,
) -> Result<(), CliError> {
    let message = format!("Successfully {action} {resource}: {id}");
    output::print_done(out, flags.format, &message, &Outcome { action, resource, id })
}

use std::io::Write;

use stratos_core::StratosClient;

use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output;
use crate::session::{Outcome, Session};

/// Call the init endpoint so bad URLs and credentials fail fast.
pub fn handle(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    session.call(StratosClient::build_init, StratosClient::parse_init)?;

    let client = session.client();
    let user = client.username().unwrap_or("-");
    let message = format!("Successfully authenticated as {user} at {}", client.base_url());
    output::print_done(
        out,
        flags.format,
        &message,
        &Outcome {
            action: "authenticated",
            resource: "user",
            id: user,
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stratos_core::ApiError;

    use super::*;
    use crate::commands::testing::{rendered, table_flags};
    use crate::session::fake::FakeTransport;

    #[test]
    fn reports_authenticated_user() {
        let fake = FakeTransport::default();
        fake.respond(200, "");
        let out = rendered(|out| handle(&fake.session(), &table_flags(), out));
        assert_eq!(
            out,
            "Successfully authenticated as admin at https://stratos.test:9443\n"
        );
        assert_eq!(
            fake.requests()[0].path,
            "https://stratos.test:9443/api/v4.1/init"
        );
    }

    #[test]
    fn rejected_credentials_are_an_error() {
        let fake = FakeTransport::default();
        fake.respond(401, "");
        let mut out: Vec<u8> = Vec::new();
        let err = handle(&fake.session(), &table_flags(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Api(ApiError::Unauthorized { status: 401 })));
        assert_eq!(err.to_string(), "authentication failed (HTTP 401)");
    }
}

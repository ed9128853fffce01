use std::io::Write;

use stratos_core::types::UserInfo;
use stratos_core::StratosClient;

use crate::cli::root_commands::AddUserArgs;
use crate::cli::GlobalFlags;
use crate::error::CliError;
use crate::output::{self, print_done};
use crate::session::{Outcome, Session};

fn user_from(args: &AddUserArgs) -> UserInfo {
    UserInfo {
        user_name: args.user_name.clone(),
        credential: Some(args.credential.clone()),
        role: Some(args.role.clone()),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        profile_name: args.profile_name.clone(),
    }
}

pub fn add(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    args: &AddUserArgs,
) -> Result<(), CliError> {
    let user = user_from(args);
    session.call_with(|c| c.build_add_user(&user), StratosClient::parse_created)?;
    print_done(
        out,
        flags.format,
        "User added successfully",
        &Outcome {
            action: "added",
            resource: "user",
            id: &user.user_name,
        },
    )
}

pub fn list(session: &Session, flags: &GlobalFlags, out: &mut dyn Write) -> Result<(), CliError> {
    let users = session.call(StratosClient::build_list_users, StratosClient::parse_list_users)?;
    output::print_list(out, flags.format, &users, "Users:", "No users found")
}

pub fn delete(
    session: &Session,
    flags: &GlobalFlags,
    out: &mut dyn Write,
    user_name: &str,
) -> Result<(), CliError> {
    session
        .call(|c| c.build_delete_user(user_name), StratosClient::parse_deleted)
        .map_err(CliError::not_found("User", user_name))?;
    print_done(
        out,
        flags.format,
        &format!("You have successfully deleted {user_name} user"),
        &Outcome {
            action: "deleted",
            resource: "user",
            id: user_name,
        },
    )
}

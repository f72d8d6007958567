use crate::{
    cli::{
        actions::{server::Args, Action},
        commands::{
            cookies::{ARG_ROLE_COOKIE, ARG_TOKEN_COOKIE},
            ARG_PORT,
        },
    },
    gate::CredentialCookies,
};
use anyhow::{Context, Result};

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);

    let token = matches
        .get_one::<String>(ARG_TOKEN_COOKIE)
        .cloned()
        .context("missing required argument: --token-cookie")?;
    let role = matches
        .get_one::<String>(ARG_ROLE_COOKIE)
        .cloned()
        .context("missing required argument: --role-cookie")?;

    Ok(Action::Server(Args {
        port,
        cookies: CredentialCookies { token, role },
    }))
}

use crate::gate::credential::{DEFAULT_ROLE_COOKIE, DEFAULT_TOKEN_COOKIE};
use clap::{builder::NonEmptyStringValueParser, Arg, Command};

pub const ARG_TOKEN_COOKIE: &str = "token-cookie";
pub const ARG_ROLE_COOKIE: &str = "role-cookie";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_TOKEN_COOKIE)
                .long(ARG_TOKEN_COOKIE)
                .help("Cookie holding the opaque access token")
                .long_help(
                    "Cookie holding the opaque access token. Only its presence is checked; the authentication service owns its value.",
                )
                .env("DASHGATE_TOKEN_COOKIE")
                .default_value(DEFAULT_TOKEN_COOKIE)
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .arg(
            Arg::new(ARG_ROLE_COOKIE)
                .long(ARG_ROLE_COOKIE)
                .help("Cookie holding the caller's role label")
                .env("DASHGATE_ROLE_COOKIE")
                .default_value(DEFAULT_ROLE_COOKIE)
                .value_parser(NonEmptyStringValueParser::new()),
        )
}

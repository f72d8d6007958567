pub mod cookies;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("dashgate")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("DASHGATE_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = cookies::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::cookies::{ARG_ROLE_COOKIE, ARG_TOKEN_COOKIE};

    const ENV_VARS: [&str; 4] = [
        "DASHGATE_PORT",
        "DASHGATE_TOKEN_COOKIE",
        "DASHGATE_ROLE_COOKIE",
        "DASHGATE_LOG_LEVEL",
    ];

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(ENV_VARS.map(|key| (key, None::<&str>)), f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "dashgate");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        clean_env(|| {
            let matches = new().get_matches_from(vec!["dashgate"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert_eq!(
                matches.get_one::<String>(ARG_TOKEN_COOKIE).cloned(),
                Some("access_token".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_ROLE_COOKIE).cloned(),
                Some("user_role".to_string())
            );
        });
    }

    #[test]
    fn test_check_port_and_cookies() {
        clean_env(|| {
            let matches = new().get_matches_from(vec![
                "dashgate",
                "--port",
                "9090",
                "--token-cookie",
                "sid",
                "--role-cookie",
                "role",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
            assert_eq!(
                matches.get_one::<String>(ARG_TOKEN_COOKIE).cloned(),
                Some("sid".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_ROLE_COOKIE).cloned(),
                Some("role".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("DASHGATE_PORT", Some("443")),
                ("DASHGATE_TOKEN_COOKIE", Some("session")),
                ("DASHGATE_ROLE_COOKIE", Some("role_label")),
                ("DASHGATE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["dashgate"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_TOKEN_COOKIE).cloned(),
                    Some("session".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_ROLE_COOKIE).cloned(),
                    Some("role_label".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_empty_cookie_name_is_rejected() {
        clean_env(|| {
            let result = new().try_get_matches_from(vec!["dashgate", "--token-cookie", ""]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("DASHGATE_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["dashgate"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            clean_env(|| {
                let mut args = vec!["dashgate".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}

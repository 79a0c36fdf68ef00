pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_INPUT: &str = "input";
pub const ARG_STRICT: &str = "strict";
pub const ARG_LEVEL_NAMES: &str = "level-names";
pub const ARG_LINEAGE: &str = "lineage";
pub const ARG_PRETTY: &str = "pretty";

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

    let command = Command::new("access-levels")
        .about("Flatten access level hierarchies into sorted depth buckets")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_INPUT)
                .help("Hierarchy JSON file, '-' or empty to read stdin")
                .env("ACCESS_LEVELS_INPUT")
                .value_name("INPUT"),
        )
        .arg(
            Arg::new(ARG_STRICT)
                .long("strict")
                .help("Fail on access levels that have no name")
                .env("ACCESS_LEVELS_STRICT")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_LEVEL_NAMES)
                .short('l')
                .long("level-names")
                .help("Comma separated access level names, one per depth, e.g. Organization,Region,Site")
                .env("ACCESS_LEVELS_LEVEL_NAMES")
                .value_delimiter(',')
                .conflicts_with(ARG_LINEAGE),
        )
        .arg(
            Arg::new(ARG_LINEAGE)
                .long("lineage")
                .help("Print the root-first path to the access level with this id")
                .env("ACCESS_LEVELS_LINEAGE")
                .value_name("ID"),
        )
        .arg(
            Arg::new(ARG_PRETTY)
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 6] = [
        "ACCESS_LEVELS_INPUT",
        "ACCESS_LEVELS_STRICT",
        "ACCESS_LEVELS_LEVEL_NAMES",
        "ACCESS_LEVELS_LINEAGE",
        "ACCESS_LEVELS_LOG_LEVEL",
        "ACCESS_LEVELS_LOG_FORMAT",
    ];

    fn without_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(ENV_VARS.map(|name| (name, None::<String>)), f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "access-levels");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Flatten access level hierarchies into sorted depth buckets".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_args() {
        without_env(|| {
            let matches = new().get_matches_from(vec![
                "access-levels",
                "tree.json",
                "--strict",
                "--level-names",
                "Organization,Region,Site",
                "--pretty",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_INPUT).cloned(),
                Some("tree.json".to_string())
            );
            assert!(matches.get_flag(ARG_STRICT));
            assert!(matches.get_flag(ARG_PRETTY));
            assert_eq!(
                matches
                    .get_many::<String>(ARG_LEVEL_NAMES)
                    .map(|names| names.cloned().collect::<Vec<_>>()),
                Some(vec![
                    "Organization".to_string(),
                    "Region".to_string(),
                    "Site".to_string()
                ])
            );
        });
    }

    #[test]
    fn test_defaults() {
        without_env(|| {
            let matches = new().get_matches_from(vec!["access-levels"]);

            assert_eq!(matches.get_one::<String>(ARG_INPUT), None);
            assert!(!matches.get_flag(ARG_STRICT));
            assert!(!matches.get_flag(ARG_PRETTY));
            assert_eq!(matches.get_one::<String>(ARG_LINEAGE), None);
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("ACCESS_LEVELS_INPUT", Some("/tmp/tree.json")),
                ("ACCESS_LEVELS_STRICT", Some("true")),
                ("ACCESS_LEVELS_LINEAGE", Some("42")),
                ("ACCESS_LEVELS_LEVEL_NAMES", None),
                ("ACCESS_LEVELS_LOG_LEVEL", Some("info")),
                ("ACCESS_LEVELS_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["access-levels"]);

                assert_eq!(
                    matches.get_one::<String>(ARG_INPUT).cloned(),
                    Some("/tmp/tree.json".to_string())
                );
                assert!(matches.get_flag(ARG_STRICT));
                assert_eq!(
                    matches.get_one::<String>(ARG_LINEAGE).cloned(),
                    Some("42".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_lineage_conflicts_with_level_names() {
        without_env(|| {
            let result = new().try_get_matches_from(vec![
                "access-levels",
                "--lineage",
                "1",
                "--level-names",
                "Organization",
            ]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("ACCESS_LEVELS_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["access-levels"]);
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
            temp_env::with_vars([("ACCESS_LEVELS_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["access-levels".to_string()];

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

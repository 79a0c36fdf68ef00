use crate::cli::{
    actions::{flatten, lineage, Action, Input},
    commands::{ARG_INPUT, ARG_LEVEL_NAMES, ARG_LINEAGE, ARG_PRETTY, ARG_STRICT},
};
use crate::hierarchy::NodeId;
use anyhow::Result;

/// # Errors
/// Returns an error if arguments are inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let input = Input::from_arg(matches.get_one::<String>(ARG_INPUT).map(String::as_str));
    let pretty = matches.get_flag(ARG_PRETTY);

    if let Some(id) = matches.get_one::<String>(ARG_LINEAGE) {
        let id = id.parse::<NodeId>()?;
        return Ok(Action::Lineage(lineage::Args { input, id, pretty }));
    }

    let level_names: Vec<String> = matches
        .get_many::<String>(ARG_LEVEL_NAMES)
        .map(|names| {
            names
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(Action::Flatten(flatten::Args {
        input,
        strict: matches.get_flag(ARG_STRICT),
        level_names,
        pretty,
    }))
}

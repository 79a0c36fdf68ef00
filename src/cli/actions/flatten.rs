use super::{write_json, Input};
use crate::hierarchy::{flatten_and_sort, flatten_and_sort_strict};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub input: Input,
    pub strict: bool,
    pub level_names: Vec<String>,
    pub pretty: bool,
}

/// Execute the flatten action: print the depth buckets, or labelled tiers when
/// level names were given.
/// # Errors
/// Returns an error if the input cannot be read, a node has no name in strict
/// mode, or the output cannot be written.
pub fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let forest = args.input.read()?;

    let index = if args.strict {
        flatten_and_sort_strict(Some(&forest)).context("Hierarchy rejected in strict mode")?
    } else {
        flatten_and_sort(Some(&forest))
    };

    info!(
        depths = index.len(),
        entries = index.total_entries(),
        "flattened hierarchy"
    );

    if args.level_names.is_empty() {
        write_json(out, &index, args.pretty)
    } else {
        write_json(out, &index.labelled(args.level_names.as_slice()), args.pretty)
    }
}

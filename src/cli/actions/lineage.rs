use super::{write_json, Input};
use crate::hierarchy::{lineage, NodeId};
use anyhow::{anyhow, Result};
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub input: Input,
    pub id: NodeId,
    pub pretty: bool,
}

/// Execute the lineage action: print the root-first path to `args.id`.
/// # Errors
/// Returns an error if the input cannot be read or no access level has the id.
pub fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let forest = args.input.read()?;

    // `--lineage 12` parses as a number; snapshots may carry the id as "12".
    let path = lineage(Some(&forest), &args.id)
        .or_else(|| match &args.id {
            NodeId::Number(id) => lineage(Some(&forest), &NodeId::Text(id.to_string())),
            NodeId::Text(_) => None,
        })
        .ok_or_else(|| anyhow!("Access level {} not found in hierarchy", args.id))?;

    info!(id = %args.id, depth = path.len(), "resolved lineage");

    write_json(out, &path, args.pretty)
}

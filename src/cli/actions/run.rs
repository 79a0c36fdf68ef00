use super::{flatten, lineage, Action};
use anyhow::Result;
use std::io::Write;

pub(super) fn execute<W: Write>(action: Action, out: &mut W) -> Result<()> {
    match action {
        Action::Flatten(args) => flatten::execute(args, out),
        Action::Lineage(args) => lineage::execute(args, out),
    }
}

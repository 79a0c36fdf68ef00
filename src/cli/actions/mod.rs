pub mod flatten;
pub mod lineage;

// Internal "interpreter" for `Action`.
mod run;

use crate::hierarchy::{read_forest, AccessLevelNode};
use anyhow::{Context, Result};
use std::{fs::File, io, io::BufReader, path::PathBuf};
use tracing::debug;

#[derive(Debug)]
pub enum Action {
    Flatten(flatten::Args),
    Lineage(lineage::Args),
}

impl Action {
    /// Execute the action, writing its JSON result to stdout.
    /// # Errors
    /// Returns an error if the input cannot be read or the action fails.
    pub fn execute(self) -> Result<()> {
        let stdout = io::stdout();
        run::execute(self, &mut stdout.lock())
    }
}

/// Where the hierarchy snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-" | "") => Self::Stdin,
            Some(path) => Self::Path(PathBuf::from(path)),
        }
    }

    /// # Errors
    /// Returns an error if the input cannot be opened or is not a hierarchy.
    pub fn read(&self) -> Result<Vec<AccessLevelNode>> {
        let forest = match self {
            Self::Stdin => {
                read_forest(io::stdin().lock()).context("Failed to read hierarchy from stdin")?
            }
            Self::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open hierarchy file: {}", path.display()))?;
                read_forest(BufReader::new(file))
                    .with_context(|| format!("Failed to read hierarchy file: {}", path.display()))?
            }
        };

        debug!(roots = forest.len(), input = ?self, "loaded hierarchy");

        Ok(forest)
    }
}

pub(crate) fn write_json<W, T>(out: &mut W, value: &T, pretty: bool) -> Result<()>
where
    W: io::Write,
    T: serde::Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

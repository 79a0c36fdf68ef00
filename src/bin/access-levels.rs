use access_levels::cli;
use anyhow::Result;

// Main function
fn main() -> Result<()> {
    let action = cli::start()?;

    action.execute()?;

    Ok(())
}

use std::io::Write;

use clap::CommandFactory;

use crate::cli::Args;
use crate::error::CommandResult;

/// Writes the top-level usage help.
pub fn run<W: Write>(out: &mut W) -> CommandResult<()> {
    Args::command().write_help(out)?;
    Ok(())
}

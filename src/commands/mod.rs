pub mod hello;
pub mod help;

use std::io::Write;

use crate::cli::{Args, Command};
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
///
/// A missing subcommand falls through to the help output.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> CommandResult<()> {
    match args.command {
        Some(Command::Hello) => {
            tracing::debug!(command = "hello", "dispatching command");
            hello::run(out)
        }
        None => {
            tracing::debug!("no command given, printing help");
            help::run(out)
        }
    }
}

use std::io::Write;

use crate::error::CommandResult;

pub const GREETING: &str = "Hello, World!";

/// Writes the greeting followed by a newline.
pub fn run<W: Write>(out: &mut W) -> CommandResult<()> {
    writeln!(out, "{GREETING}")?;
    Ok(())
}

use clap::{Parser, Subcommand};

/// Command-line arguments for the rw-3agent-lite CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rw-3agent-lite",
    version,
    about = "rw-3agent-lite CLI",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print Hello, World!
    Hello,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_hello_subcommand() {
        let args = Args::try_parse_from(["rw-3agent-lite", "hello"]).unwrap();
        assert_eq!(args.command, Some(Command::Hello));
    }

    #[test]
    fn missing_subcommand_is_not_an_error() {
        let args = Args::try_parse_from(["rw-3agent-lite"]).unwrap();
        assert_eq!(args.command, None);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let err = Args::try_parse_from(["rw-3agent-lite", "foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_arguments_after_hello() {
        let err = Args::try_parse_from(["rw-3agent-lite", "hello", "there"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_not_a_subcommand() {
        let err = Args::try_parse_from(["rw-3agent-lite", "help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}

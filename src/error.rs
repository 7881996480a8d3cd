use thiserror::Error;

pub type CommandResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to write command output")]
    Output(#[from] std::io::Error),
}

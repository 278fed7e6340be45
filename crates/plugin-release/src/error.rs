use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine the project directory")]
    ProjectDir(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] release_config::ConfigError),

    #[error(transparent)]
    Operation(#[from] release_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;

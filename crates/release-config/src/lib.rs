mod config;
mod error;
mod patterns;

pub use config::{
    CONFIG_FILE_NAMES, FilesConfig, Patterns, ReleaseConfig, ReleaseRepoConfig, VcsConfig,
    discover_config, load_config,
};
pub use error::ConfigError;
pub use patterns::expand_patterns;

pub type Result<T> = std::result::Result<T, ConfigError>;

mod error;
mod logging;
mod release;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use release_core::PackageType;

use crate::error::CliError;
use crate::release::ReleaseArgs;

#[derive(Parser)]
#[command(name = "plugin-release")]
#[command(version = env!("PLUGIN_RELEASE_VERSION"))]
#[command(
    about = "Publish a WordPress plugin or theme build to its Subversion release repository",
    long_about = None
)]
struct Cli {
    /// Project directory (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Configuration file (default: .plugin-release.yml in the project directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Resolve and print the release plan without touching anything
    #[arg(long)]
    dry_run: bool,

    /// Plugin main file or theme stylesheet carrying the version header
    #[arg(long)]
    file: Option<PathBuf>,

    /// Package type
    #[arg(long = "type", value_enum)]
    package_type: Option<PackageType>,

    /// Release repository slug
    #[arg(long)]
    slug: Option<String>,

    /// Branch to release from
    #[arg(long)]
    branch: Option<String>,

    /// Release repository username
    #[arg(long)]
    username: Option<String>,

    /// Directory for the release repository working copy
    #[arg(long)]
    build_path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let project_dir = match resolve_project_dir(cli.path.clone()) {
        Ok(dir) => dir,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match release::run(&project_dir, &ReleaseArgs::from(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_project_dir(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let path = match path {
        Some(p) => p,
        None => std::env::current_dir().map_err(CliError::ProjectDir)?,
    };
    std::path::absolute(path).map_err(CliError::ProjectDir)
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}

impl From<Cli> for ReleaseArgs {
    fn from(cli: Cli) -> Self {
        Self {
            config: cli.config,
            dry_run: cli.dry_run,
            overrides: release_operations::operations::CliOverrides {
                file: cli.file,
                package_type: cli.package_type,
                slug: cli.slug,
                branch: cli.branch,
                username: cli.username,
                build_path: cli.build_path,
            },
        }
    }
}

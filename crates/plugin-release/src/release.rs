use std::path::{Path, PathBuf};

use release_config::{discover_config, load_config};
use release_operations::operations::{
    CliOverrides, ParameterResolver, ReleaseInput, ReleaseOperation, ReleaseOutcome,
};
use release_operations::providers::{
    FileSystemHeaderReader, FileSystemReadmeChecker, Git2Provider, SvnCliProvider,
};
use tracing::debug;

use crate::error::Result;

pub struct ReleaseArgs {
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub overrides: CliOverrides,
}

pub fn run(project_dir: &Path, args: &ReleaseArgs) -> Result<()> {
    let (config_path, config) = match &args.config {
        Some(path) => {
            let path = project_dir.join(path);
            let config = load_config(&path)?;
            (path, config)
        }
        None => discover_config(project_dir)?,
    };
    debug!(path = %config_path.display(), "loaded configuration");

    let resolver = ParameterResolver::new(Git2Provider::new(), FileSystemHeaderReader::new());
    let params = resolver.resolve(project_dir, &args.overrides, &config)?;

    let operation = ReleaseOperation::new(
        Git2Provider::new(),
        SvnCliProvider::new(),
        FileSystemReadmeChecker::new(),
    );
    let input = ReleaseInput {
        dry_run: args.dry_run,
    };

    match operation.execute(&params, &input)? {
        ReleaseOutcome::DryRun(output) => {
            println!(
                "Dry run: would release {} {} from branch '{}'",
                params.slug(),
                params.version(),
                params.target_branch()
            );
            for stage in &output.stages {
                println!("  {stage}");
            }
            println!("Tag would be created at: {}", output.tag_url);
        }
        ReleaseOutcome::Executed(output) => {
            println!("Release created: {}", output.tag_url);
        }
    }
    Ok(())
}

//! `copy-example-content` implementation

use crate::cli::CopyExampleContentArgs;
use crate::error::Result;
use crate::example::{ExampleConfig, ExampleRequest, copy_example_content};
use crate::ops::LocalRepoOps;
use crate::ui::Reporter;

pub fn run(args: CopyExampleContentArgs, reporter: &dyn Reporter) -> Result<()> {
    let request = ExampleRequest {
        force: args.force,
        branch: args.branch,
    };
    let mut config = ExampleConfig::default();
    if let Some(repo) = args.repo {
        config.repo_url = repo;
    }
    let mut ops = LocalRepoOps::new(reporter);

    copy_example_content(&request, &config, &mut ops, reporter)?;
    Ok(())
}

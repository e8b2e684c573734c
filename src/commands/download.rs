//! `download-content` implementation

use crate::cli::DownloadContentArgs;
use crate::error::Result;
use crate::fetch::{FetchConfig, FetchRequest, download_content};
use crate::ops::LocalRepoOps;
use crate::ui::Reporter;

pub fn run(args: DownloadContentArgs, reporter: &dyn Reporter) -> Result<()> {
    let request = FetchRequest {
        directories: args.directories,
        branch: args.branch,
        repo: args.repo,
    };
    let config = FetchConfig::default();
    let mut ops = LocalRepoOps::new(reporter);

    let summary = download_content(&request, &config, &mut ops, reporter)?;
    if !summary.missing.is_empty() {
        reporter.info(&format!(
            "Not in repository: {}",
            summary.missing.join(", ")
        ));
    }
    Ok(())
}

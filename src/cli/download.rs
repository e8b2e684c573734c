use clap::Parser;

/// Download demo content for the Adritian theme
///
/// Clones the demo site repository and copies the selected directories into
/// the current project. With no directories, everything is downloaded,
/// including the Hugo configuration files.
#[derive(Parser, Debug)]
#[command(
    name = "download-content",
    version,
    styles = super::styles(),
    after_help = "EXAMPLES:\n  \
                  Download everything:\n    download-content\n\n\
                  Download only content and translations:\n    download-content content i18n\n\n\
                  Download from a branch:\n    download-content --branch feature/new-design\n\n\
                  Download from a fork:\n    download-content --repo https://github.com/you/adritian-demo"
)]
pub struct DownloadContentArgs {
    /// Directories to download (i18n, data, content, assets, static, config)
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<String>,

    /// Branch to clone
    #[arg(long, short = 'b')]
    pub branch: Option<String>,

    /// Repository URL to clone instead of the demo site
    #[arg(long, short = 'r', env = "ADRITIAN_CONTENT_REPO")]
    pub repo: Option<String>,

    /// Only print warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

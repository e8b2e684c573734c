use clap::Parser;

/// Copy the theme's example site content into ./content
#[derive(Parser, Debug)]
#[command(name = "copy-example-content", version, styles = super::styles())]
pub struct CopyExampleContentArgs {
    /// Replace ./content even when it already has files
    #[arg(long)]
    pub force: bool,

    /// Theme branch to copy from
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Repository URL to clone instead of the theme repository
    #[arg(long, env = "ADRITIAN_THEME_REPO")]
    pub repo: Option<String>,

    /// Only print warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

use std::path::PathBuf;

use clap::Parser;

/// Update the theme's icon font from an icon-font generator export
///
/// Copies css/, font/ and config.json from the export into assets/css and
/// static/fonts, asking before any existing file is overwritten.
#[derive(Parser, Debug)]
#[command(
    name = "update-font",
    version,
    styles = super::styles(),
    after_help = "EXAMPLES:\n  \
                  Update from an unpacked export:\n    \
                  update-font --source ~/Downloads/fontello-1234 --destination ."
)]
pub struct UpdateFontArgs {
    /// Unpacked icon-font export (contains css/, font/ and config.json)
    #[arg(long, value_name = "PATH")]
    pub source: PathBuf,

    /// Theme or site root to update
    #[arg(long, value_name = "PATH")]
    pub destination: PathBuf,

    /// Only print warnings, errors and prompts
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_and_destination() {
        let args = UpdateFontArgs::try_parse_from([
            "update-font",
            "--source",
            "/test/source",
            "--destination",
            "/test/dest",
        ])
        .unwrap();
        assert_eq!(args.source, PathBuf::from("/test/source"));
        assert_eq!(args.destination, PathBuf::from("/test/dest"));
    }

    #[test]
    fn test_missing_source_is_named() {
        let err = UpdateFontArgs::try_parse_from(["update-font", "--destination", "/test/dest"])
            .unwrap_err();
        assert!(err.to_string().contains("--source"));
    }

    #[test]
    fn test_missing_destination_is_named() {
        let err =
            UpdateFontArgs::try_parse_from(["update-font", "--source", "/test/source"]).unwrap_err();
        assert!(err.to_string().contains("--destination"));
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = UpdateFontArgs::try_parse_from(["update-font", "-h"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}

//! Icon-font update
//!
//! Merges an icon-font generator export (a `css/` directory, a `font/`
//! directory and `config.json`) into the theme layout, then rewrites the
//! `/font/` path fragment to `/fonts/` in the copied stylesheets and config.
//!
//! This module is organized into:
//! - [`decide`]: pure per-entry copy policy
//! - [`copy`]: the gated tree walk
//! - [`replace`]: literal fragment substitution

mod copy;
pub mod decide;
pub mod replace;

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::common::fs::ensure_dir;
use crate::error::{AdritianError, Result};
use crate::prompt::Confirmer;
use crate::ui::Reporter;
use copy::TreeCopier;
use replace::FragmentReplacer;

/// Source and destination layout of a font update
#[derive(Debug, Clone)]
pub struct FontLayout {
    pub css_source: PathBuf,
    pub font_source: PathBuf,
    pub config_file: String,
    pub css_target: PathBuf,
    pub fonts_target: PathBuf,
    /// Regex matched against entry names; matches are never copied
    pub exclude_pattern: String,
    pub search: String,
    pub replacement: String,
}

impl Default for FontLayout {
    fn default() -> Self {
        Self {
            css_source: PathBuf::from("css"),
            font_source: PathBuf::from("font"),
            config_file: "config.json".to_string(),
            css_target: Path::new("assets").join("css"),
            fonts_target: Path::new("static").join("fonts"),
            exclude_pattern: "adritian-icons-ie7".to_string(),
            search: "/font/".to_string(),
            replacement: "/fonts/".to_string(),
        }
    }
}

impl FontLayout {
    /// Name of the font directory that must not be copied into itself
    fn nested_dir_name(&self) -> &str {
        self.font_source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("font")
    }
}

/// One invocation of the font updater
#[derive(Debug, Clone)]
pub struct FontUpdateRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl FontUpdateRequest {
    /// Both paths must be non-empty.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let destination = destination.into();
        if source.as_os_str().is_empty() {
            return Err(AdritianError::MissingArgument { what: "Source" });
        }
        if destination.as_os_str().is_empty() {
            return Err(AdritianError::MissingArgument {
                what: "Destination",
            });
        }
        Ok(Self {
            source,
            destination,
        })
    }
}

/// What a font update did
#[derive(Debug, Default)]
pub struct FontUpdateSummary {
    /// Destination paths written
    pub copied: Vec<PathBuf>,
    /// Source paths skipped by policy
    pub skipped: Vec<PathBuf>,
    /// Destination paths kept because the overwrite was declined
    pub declined: Vec<PathBuf>,
    /// Files whose content was rewritten
    pub rewritten: Vec<PathBuf>,
    pub prompts: usize,
}

/// Merge the font export at `request.source` into `request.destination`.
pub fn update_font(
    request: &FontUpdateRequest,
    layout: &FontLayout,
    confirmer: &mut dyn Confirmer,
    reporter: &dyn Reporter,
) -> Result<FontUpdateSummary> {
    let source = &request.source;
    let destination = &request.destination;
    let css_target = destination.join(&layout.css_target);
    let fonts_target = destination.join(&layout.fonts_target);

    reporter.step("Verifying directories...");
    if !source.exists() {
        return Err(AdritianError::SourceNotFound {
            path: source.display().to_string(),
        });
    }
    for dir in [destination, &fonts_target, &css_target] {
        ensure_dir(dir)?;
    }

    let exclude = Regex::new(&layout.exclude_pattern)?;
    let replacer = FragmentReplacer::new(&layout.search, &layout.replacement)?;
    let mut summary = FontUpdateSummary::default();
    let mut copier = TreeCopier {
        confirmer,
        reporter,
        exclude: &exclude,
        nested_dir_name: layout.nested_dir_name(),
        summary: &mut summary,
    };

    reporter.step("Copying CSS files...");
    copier.copy_tree(&source.join(&layout.css_source), &css_target)?;

    reporter.step(&format!("Copying {}...", layout.config_file));
    let config_source = source.join(&layout.config_file);
    let config_target = fonts_target.join(&layout.config_file);
    if config_source.is_file() {
        copier.copy_file_gated(&config_source, &config_target)?;
    } else {
        reporter.warn(&format!(
            "File {} not found in source",
            config_source.display()
        ));
    }

    reporter.step("Copying font files...");
    copier.copy_tree(&source.join(&layout.font_source), &fonts_target)?;

    reporter.step("Replacing strings in CSS files...");
    summary.rewritten = replacer.rewrite_dir(&css_target, reporter)?;

    reporter.step(&format!("Replacing strings in {}...", layout.config_file));
    if config_target.is_file() && replacer.rewrite_file(&config_target)? {
        summary.rewritten.push(config_target);
    }

    reporter.success("Font update completed successfully!");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedConfirmer;
    use crate::ui::testing::RecordingReporter;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        source: PathBuf,
        destination: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let source = temp.path().join("fontello-export");
            let destination = temp.path().join("site");
            fs::create_dir_all(&source).unwrap();
            Self {
                _temp: temp,
                source,
                destination,
            }
        }

        fn write_source(&self, rel: &str, content: &str) {
            write(&self.source.join(rel), content);
        }

        fn write_destination(&self, rel: &str, content: &str) {
            write(&self.destination.join(rel), content);
        }

        fn read_destination(&self, rel: &str) -> String {
            fs::read_to_string(self.destination.join(rel)).unwrap()
        }

        fn run(&self, confirmer: &mut ScriptedConfirmer) -> Result<FontUpdateSummary> {
            let reporter = RecordingReporter::default();
            let request = FontUpdateRequest::new(&self.source, &self.destination).unwrap();
            update_font(&request, &FontLayout::default(), confirmer, &reporter)
        }
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_request_rejects_empty_paths() {
        assert!(matches!(
            FontUpdateRequest::new("", "/dest"),
            Err(AdritianError::MissingArgument { what: "Source" })
        ));
        assert!(matches!(
            FontUpdateRequest::new("/src", ""),
            Err(AdritianError::MissingArgument {
                what: "Destination"
            })
        ));
    }

    #[test]
    fn test_missing_source_fails_before_copying() {
        let fixture = Fixture::new();
        fs::remove_dir_all(&fixture.source).unwrap();

        let err = fixture.run(&mut ScriptedConfirmer::default()).unwrap_err();

        assert!(matches!(err, AdritianError::SourceNotFound { .. }));
        assert!(!fixture.destination.exists());
    }

    #[test]
    fn test_fresh_destination_end_to_end() {
        let fixture = Fixture::new();
        fixture.write_source("css/style.css", "url(/font/x.woff)");
        fixture.write_source("config.json", r#"{"css_prefix_text": "icon-", "path": "/font/"}"#);
        fixture.write_source("font/adritian-icons.woff2", "woff2");
        let mut confirmer = ScriptedConfirmer::default();

        let summary = fixture.run(&mut confirmer).unwrap();

        assert_eq!(
            fixture.read_destination("assets/css/style.css"),
            "url(/fonts/x.woff)"
        );
        assert!(fixture
            .read_destination("static/fonts/config.json")
            .contains("\"/fonts/\""));
        assert_eq!(
            fixture.read_destination("static/fonts/adritian-icons.woff2"),
            "woff2"
        );
        assert!(confirmer.questions.is_empty());
        assert_eq!(summary.prompts, 0);
        assert_eq!(summary.rewritten.len(), 2);
    }

    #[test]
    fn test_excluded_files_never_copied() {
        let fixture = Fixture::new();
        fixture.write_source("css/adritian-icons-ie7.css", "ie7");
        fixture.write_source("css/adritian-icons-ie7-codes.css", "ie7");
        fixture.write_source("css/adritian-icons.css", "ok");

        let summary = fixture.run(&mut ScriptedConfirmer::default()).unwrap();

        let css = fixture.destination.join("assets/css");
        assert!(css.join("adritian-icons.css").exists());
        assert!(!css.join("adritian-icons-ie7.css").exists());
        assert!(!css.join("adritian-icons-ie7-codes.css").exists());
        assert_eq!(summary.skipped.len(), 2);
    }

    #[test]
    fn test_declined_overwrite_keeps_destination() {
        let fixture = Fixture::new();
        fixture.write_source("css/style.css", "new");
        fixture.write_destination("assets/css/style.css", "old");
        let mut confirmer = ScriptedConfirmer::answering(&["n"]);

        let summary = fixture.run(&mut confirmer).unwrap();

        assert_eq!(fixture.read_destination("assets/css/style.css"), "old");
        assert_eq!(confirmer.questions.len(), 1);
        assert!(confirmer.questions[0].ends_with("style.css already exists. Overwrite?"));
        assert_eq!(summary.declined.len(), 1);
    }

    #[test]
    fn test_accepted_overwrite_replaces_destination() {
        let fixture = Fixture::new();
        fixture.write_source("css/style.css", "url(/font/new.woff)");
        fixture.write_destination("assets/css/style.css", "old");

        fixture
            .run(&mut ScriptedConfirmer::answering(&["Y"]))
            .unwrap();

        assert_eq!(
            fixture.read_destination("assets/css/style.css"),
            "url(/fonts/new.woff)"
        );
    }

    #[test]
    fn test_one_prompt_per_existing_file_in_order() {
        let fixture = Fixture::new();
        fixture.write_source("css/a.css", "new-a");
        fixture.write_source("css/b.css", "new-b");
        fixture.write_source("config.json", "{}");
        fixture.write_destination("assets/css/a.css", "old-a");
        fixture.write_destination("assets/css/b.css", "old-b");
        fixture.write_destination("static/fonts/config.json", "{\"old\": true}");
        let mut confirmer = ScriptedConfirmer::answering(&["y", "n", "y"]);

        fixture.run(&mut confirmer).unwrap();

        assert_eq!(confirmer.questions.len(), 3);
        assert!(confirmer.questions[2].contains("config.json"));
        assert_eq!(fixture.read_destination("assets/css/a.css"), "new-a");
        assert_eq!(fixture.read_destination("assets/css/b.css"), "old-b");
        assert_eq!(fixture.read_destination("static/fonts/config.json"), "{}");
    }

    #[test]
    fn test_nested_font_directories() {
        let fixture = Fixture::new();
        fixture.write_source("font/icons.woff", "top");
        fixture.write_source("font/font/style.css", "one level");
        fixture.write_source("font/font/font/deep.woff", "too deep");

        fixture.run(&mut ScriptedConfirmer::default()).unwrap();

        let fonts = fixture.destination.join("static/fonts");
        assert!(fonts.join("icons.woff").exists());
        assert!(fonts.join("font/style.css").exists());
        assert!(!fonts.join("font/font").exists());
    }

    #[test]
    fn test_missing_css_and_font_directories_warn() {
        let fixture = Fixture::new();
        fixture.write_source("config.json", "{}");

        let reporter = RecordingReporter::default();
        let request = FontUpdateRequest::new(&fixture.source, &fixture.destination).unwrap();
        update_font(
            &request,
            &FontLayout::default(),
            &mut ScriptedConfirmer::default(),
            &reporter,
        )
        .unwrap();

        assert_eq!(reporter.warnings().len(), 2);
        assert!(fixture.destination.join("assets/css").is_dir());
        assert!(fixture.destination.join("static/fonts/config.json").is_file());
    }

    #[test]
    fn test_non_css_files_not_rewritten() {
        let fixture = Fixture::new();
        fixture.write_source("css/README.txt", "see /font/");
        fixture.write_source("font/LICENSE.txt", "files in /font/");

        fixture.run(&mut ScriptedConfirmer::default()).unwrap();

        assert_eq!(
            fixture.read_destination("assets/css/README.txt"),
            "see /font/"
        );
        assert_eq!(
            fixture.read_destination("static/fonts/LICENSE.txt"),
            "files in /font/"
        );
    }

    #[test]
    fn test_non_utf8_stylesheet_still_rewritten_with_config() {
        let fixture = Fixture::new();
        let legacy = fixture.source.join("css/legacy.css");
        fs::create_dir_all(legacy.parent().unwrap()).unwrap();
        fs::write(&legacy, b"/* \xe9 */ url(/font/a.woff)").unwrap();
        fixture.write_source("config.json", r#"{"path": "/font/"}"#);

        let summary = fixture.run(&mut ScriptedConfirmer::default()).unwrap();

        assert_eq!(
            fs::read(fixture.destination.join("assets/css/legacy.css")).unwrap(),
            b"/* \xe9 */ url(/fonts/a.woff)"
        );
        assert_eq!(
            fixture.read_destination("static/fonts/config.json"),
            r#"{"path": "/fonts/"}"#
        );
        assert_eq!(summary.rewritten.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_in_export_is_skipped() {
        let fixture = Fixture::new();
        fixture.write_source("font/icons.woff", "woff");
        let font_dir = fixture.source.join("font");
        std::os::unix::fs::symlink(&font_dir, font_dir.join("again")).unwrap();

        let summary = fixture.run(&mut ScriptedConfirmer::default()).unwrap();

        let fonts = fixture.destination.join("static/fonts");
        assert!(fonts.join("icons.woff").exists());
        assert!(!fonts.join("again").exists());
        assert_eq!(summary.skipped, vec![font_dir.join("again")]);
    }
}

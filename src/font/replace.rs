//! Path fragment substitution in copied stylesheets and config files

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use regex::bytes::{NoExpand, Regex};
use walkdir::WalkDir;

use crate::error::{Result, read_failed, write_failed};
use crate::ui::Reporter;

const REWRITTEN_EXTENSIONS: &[&str] = &["css", "json"];

/// Literal, global replacement of one path fragment.
///
/// Works on raw bytes: files need not be valid UTF-8 and bytes outside the
/// matches are written back unchanged.
pub struct FragmentReplacer {
    pattern: Regex,
    replacement: Vec<u8>,
}

impl FragmentReplacer {
    /// `search` is matched literally; regex metacharacters are escaped.
    pub fn new(search: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&regex::escape(search))?,
            replacement: replacement.as_bytes().to_vec(),
        })
    }

    /// Replace every occurrence in `content`.
    pub fn apply<'t>(&self, content: &'t [u8]) -> Cow<'t, [u8]> {
        self.pattern
            .replace_all(content, NoExpand(self.replacement.as_slice()))
    }

    /// Rewrite `path` in place. Returns whether the content changed.
    pub fn rewrite_file(&self, path: &Path) -> Result<bool> {
        let content = fs::read(path).map_err(|e| read_failed(path, &e))?;
        match self.apply(&content) {
            Cow::Borrowed(_) => Ok(false),
            Cow::Owned(updated) => {
                fs::write(path, updated).map_err(|e| write_failed(path, &e))?;
                Ok(true)
            }
        }
    }

    /// Rewrite the `.css` and `.json` files directly inside `dir`.
    ///
    /// Subdirectories are not descended into. Returns the files that changed.
    pub fn rewrite_dir(&self, dir: &Path, reporter: &dyn Reporter) -> Result<Vec<PathBuf>> {
        let mut changed = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let io = std::io::Error::other(e.to_string());
                read_failed(dir, &io)
            })?;
            if !entry.file_type().is_file() || !has_rewritten_extension(entry.path()) {
                continue;
            }

            reporter.info(&format!("Replacing in file: {}", entry.path().display()));
            if self.rewrite_file(entry.path())? {
                changed.push(entry.path().to_path_buf());
            }
        }

        Ok(changed)
    }
}

fn has_rewritten_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| REWRITTEN_EXTENSIONS.contains(&ext))
}

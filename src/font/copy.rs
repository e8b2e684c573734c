//! Gated tree copy
//!
//! Walks a source directory in name order, asking [`decide`] about every
//! entry. Existing destination files are only replaced after the
//! [`Confirmer`] says yes, one file at a time.

use std::fs;
use std::path::Path;

use super::FontUpdateSummary;
use super::decide::{Decision, EntryInfo, EntryKind, SkipReason, WalkContext, decide};
use crate::common::fs::{copy_file, ensure_dir};
use crate::error::{Result, read_failed};
use crate::prompt::Confirmer;
use crate::ui::Reporter;

pub(crate) struct TreeCopier<'a> {
    pub confirmer: &'a mut dyn Confirmer,
    pub reporter: &'a dyn Reporter,
    pub exclude: &'a regex::Regex,
    pub nested_dir_name: &'a str,
    pub summary: &'a mut FontUpdateSummary,
}

impl TreeCopier<'_> {
    /// Copy `src` into `dst`. A missing `src` is reported and skipped.
    pub fn copy_tree(&mut self, src: &Path, dst: &Path) -> Result<()> {
        if !src.exists() {
            self.reporter.warn(&format!(
                "Source directory '{}' does not exist",
                src.display()
            ));
            return Ok(());
        }
        ensure_dir(dst)?;

        let mut entries = fs::read_dir(src)
            .map_err(|e| read_failed(src, &e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| read_failed(src, &e))?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let src_path = entry.path();
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let dst_path = dst.join(&file_name);

            let file_type = entry.file_type().map_err(|e| read_failed(&src_path, &e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_symlink() && !src_path.is_file() {
                EntryKind::Link
            } else {
                EntryKind::File
            };
            let info = EntryInfo {
                name: &name,
                kind,
                destination_exists: dst_path.exists(),
            };
            let ctx = WalkContext {
                source_dir: src,
                exclude: self.exclude,
                nested_dir_name: self.nested_dir_name,
            };

            match decide(&info, &ctx) {
                Decision::Skip(SkipReason::Excluded) => {
                    self.reporter
                        .info(&format!("Skipping ignored file: {name}"));
                    self.summary.skipped.push(src_path);
                }
                Decision::Skip(SkipReason::NestedFont) => {
                    self.reporter.info(&format!(
                        "Skipping nested font directory: {}",
                        src_path.display()
                    ));
                    self.summary.skipped.push(src_path);
                }
                Decision::Skip(SkipReason::Link) => {
                    self.reporter
                        .info(&format!("Skipping symlink: {}", src_path.display()));
                    self.summary.skipped.push(src_path);
                }
                Decision::Recurse => self.copy_tree(&src_path, &dst_path)?,
                Decision::Copy => self.copy_one(&src_path, &dst_path)?,
                Decision::Prompt => self.copy_confirmed(&src_path, &dst_path)?,
            }
        }

        Ok(())
    }

    /// Copy a single file, asking first when `dst` already exists.
    pub fn copy_file_gated(&mut self, src: &Path, dst: &Path) -> Result<()> {
        if dst.exists() {
            self.copy_confirmed(src, dst)
        } else {
            self.copy_one(src, dst)
        }
    }

    fn copy_confirmed(&mut self, src: &Path, dst: &Path) -> Result<()> {
        self.summary.prompts += 1;
        let question = format!("File {} already exists. Overwrite?", dst.display());
        if self.confirmer.confirm(&question)? {
            self.copy_one(src, dst)
        } else {
            self.reporter
                .info(&format!("Skipping: {}", dst.display()));
            self.summary.declined.push(dst.to_path_buf());
            Ok(())
        }
    }

    fn copy_one(&mut self, src: &Path, dst: &Path) -> Result<()> {
        self.reporter.info(&format!(
            "Copying: {} -> {}",
            src.display(),
            dst.display()
        ));
        copy_file(src, dst)?;
        self.summary.copied.push(dst.to_path_buf());
        Ok(())
    }
}

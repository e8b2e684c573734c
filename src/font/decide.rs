//! Per-entry copy policy
//!
//! Kept free of I/O: the walker gathers the facts about an entry and this
//! module says what to do with it.

use std::path::{Component, Path};

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlink that does not resolve to a regular file
    Link,
}

/// Facts about one source entry
#[derive(Debug, Clone, Copy)]
pub struct EntryInfo<'a> {
    pub name: &'a str,
    pub kind: EntryKind,
    /// Whether the matching destination path already exists
    pub destination_exists: bool,
}

/// Where the walk currently is
pub struct WalkContext<'a> {
    /// Source directory containing the entry
    pub source_dir: &'a Path,
    /// Legacy vendor files that are never copied
    pub exclude: &'a Regex,
    /// Directory name that must not be nested inside itself
    pub nested_dir_name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Excluded,
    NestedFont,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Copy,
    Prompt,
    Recurse,
    Skip(SkipReason),
}

pub fn decide(entry: &EntryInfo<'_>, ctx: &WalkContext<'_>) -> Decision {
    if ctx.exclude.is_match(entry.name) {
        return Decision::Skip(SkipReason::Excluded);
    }

    match entry.kind {
        EntryKind::Directory
            if entry.name == ctx.nested_dir_name
                && inside_segment(ctx.source_dir, ctx.nested_dir_name) =>
        {
            Decision::Skip(SkipReason::NestedFont)
        }
        EntryKind::Directory => Decision::Recurse,
        EntryKind::Link => Decision::Skip(SkipReason::Link),
        EntryKind::File if entry.destination_exists => Decision::Prompt,
        EntryKind::File => Decision::Copy,
    }
}

/// True when `dir` sits below a component named `segment`, i.e. its path
/// reads `.../<segment>/...`. The final component alone does not count.
fn inside_segment(dir: &Path, segment: &str) -> bool {
    let mut components: Vec<Component<'_>> = dir.components().collect();
    components.pop();
    components
        .iter()
        .any(|c| matches!(c, Component::Normal(name) if *name == segment))
}

//! Read, transform, back up, and rewrite a single file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rules::RuleSet;

/// Suffix appended to a target path to form its backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Per-file result of a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was rewritten with at least one rename applied.
    Updated,
    /// The file was processed but no rule matched.
    Unchanged,
    /// No file exists at the target path; nothing was read or written.
    Missing,
}

/// A pending change to a single file.
#[derive(Debug, Clone)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub original: String,
    pub transformed: String,
}

impl FileRewrite {
    /// Returns true if the content was modified.
    pub fn is_modified(&self) -> bool {
        self.original != self.transformed
    }
}

/// Returns the backup path for a target file.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut full = path.as_os_str().to_os_string();
    full.push(BACKUP_SUFFIX);
    PathBuf::from(full)
}

/// Reads and transforms `path` without writing anything back.
///
/// Returns `None` when no file exists at `path`.
pub fn preview_file(path: &Path, rules: &RuleSet) -> Result<Option<FileRewrite>> {
    if !path.exists() {
        return Ok(None);
    }
    let original = fs::read_to_string(path)?;
    let transformed = rules.apply(&original);
    Ok(Some(FileRewrite {
        path: path.to_path_buf(),
        original,
        transformed,
    }))
}

/// Rewrites `path` in place, saving the pre-transform content to
/// `<path>.backup` first.
///
/// The backup must be on disk before the live file is touched, so the write
/// sequence is backup, sync, then overwrite. There is no atomic swap: a
/// failure between the two writes leaves the live file with its original
/// content and the backup already saved.
pub fn rewrite_file(path: &Path, rules: &RuleSet) -> Result<Outcome> {
    let Some(rewrite) = preview_file(path, rules)? else {
        return Ok(Outcome::Missing);
    };

    let mut backup = File::create(backup_path(path))?;
    backup.write_all(rewrite.original.as_bytes())?;
    backup.sync_all()?;

    fs::write(path, &rewrite.transformed)?;

    if rewrite.is_modified() {
        Ok(Outcome::Updated)
    } else {
        Ok(Outcome::Unchanged)
    }
}

/// Tally of outcomes across one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub attempted: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub missing: usize,
}

impl RunSummary {
    /// Records one file's outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.attempted += 1;
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Missing => self.missing += 1,
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} file(s) updated", self.updated, self.attempted)
    }
}

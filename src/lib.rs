//! # prop-rename
//!
//! A one-shot source-rewriting tool: applies a fixed set of identifier
//! renames to a list of text files, saving a `.backup` copy of each file
//! before overwriting it.
//!
//! Renames are purely lexical. Every rule matches whole words only (an
//! identifier bounded by non-identifier characters on both sides), and one
//! rule additionally refuses to touch occurrences followed by a forbidden
//! suffix, so `condition` becomes `ifCondition` while `conditionType` is
//! left alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use prop_rename::prelude::*;
//!
//! let rules = RuleSet::default_renames();
//! let output = rules.apply("row.condition = row.conditionType;");
//! assert_eq!(output, "row.ifCondition = row.conditionType;");
//! ```
//!
//! Rewriting files on disk goes through [`rewrite_file`], which reads the
//! file, applies the rules, writes the backup, then overwrites the original:
//!
//! ```rust,no_run
//! use prop_rename::prelude::*;
//! use std::path::Path;
//!
//! let config = RenameConfig::default_migration();
//! let rules = config.rule_set()?;
//! for file in &config.files {
//!     match rewrite_file(file, &rules)? {
//!         Outcome::Updated => println!("updated {}", file.display()),
//!         Outcome::Unchanged => println!("no changes in {}", file.display()),
//!         Outcome::Missing => eprintln!("missing {}", file.display()),
//!     }
//! }
//! # Ok::<(), prop_rename::error::RenameError>(())
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod rewrite;
pub mod rules;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{RenameConfig, RuleSpec};
    pub use crate::diff::{colorized_diff, unified_diff};
    pub use crate::error::{RenameError, Result};
    pub use crate::rewrite::{
        BACKUP_SUFFIX, FileRewrite, Outcome, RunSummary, backup_path, preview_file, rewrite_file,
    };
    pub use crate::rules::{RenameRule, RuleSet};
}

pub use prelude::*;

//! Install the MCP server into settings files and agent rules into rules files.
//!
//! Every change is shown as a unified diff and written only after explicit
//! confirmation.

mod console;
pub mod rules;
pub mod settings;

use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use similar::TextDiff;

pub use console::Console;

use crate::error::{Error, Result};

/// A proposed rewrite of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub path: PathBuf,
    pub original: String,
    pub modified: String,
}

impl Patch {
    /// Unified diff from `a/<name>` to `b/<name>`; empty when nothing changes.
    pub fn diff(&self) -> String {
        if self.original == self.modified {
            return String::new();
        }
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let diff = TextDiff::from_lines(&self.original, &self.modified);
        let mut unified = diff.unified_diff();
        unified.header(&format!("a/{}", name), &format!("b/{}", name));
        unified.to_string()
    }

    pub fn apply(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &self.modified)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoChanges,
    RulesPresent,
    Applied(PathBuf),
    Declined,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChanges => f.write_str("No changes needed."),
            Self::RulesPresent => f.write_str("Smarty McFly rules already present in file."),
            Self::Applied(path) => write!(f, "Changes applied to {}", path.display()),
            Self::Declined => f.write_str("Changes not applied."),
        }
    }
}

/// Show the patch's diff and write it if the user confirms.
pub fn review<R: BufRead, W: Write>(patch: &Patch, console: &mut Console<R, W>) -> Result<Outcome> {
    let diff = patch.diff();
    if diff.is_empty() {
        return Ok(Outcome::NoChanges);
    }

    console.show_diff(&diff)?;
    if !console.confirm() {
        return Ok(Outcome::Declined);
    }

    patch.apply()?;
    tracing::info!(path = %patch.path.display(), "applied changes");
    Ok(Outcome::Applied(patch.path.clone()))
}

/// Register the MCP server in a JSON settings file. The file must exist and
/// hold valid JSON; otherwise nothing is shown or written.
pub fn install_mcp<R: BufRead, W: Write>(
    settings_file: &Path,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    if !settings_file.exists() {
        return Err(Error::MissingFile(settings_file.to_path_buf()));
    }

    let original = fs::read_to_string(settings_file)?;
    let current: serde_json::Value =
        serde_json::from_str(&original).map_err(|source| Error::InvalidJson {
            path: settings_file.to_path_buf(),
            source,
        })?;

    let updated = settings::add_mcp_server(&current).map_err(|reason| Error::InvalidSettings {
        path: settings_file.to_path_buf(),
        reason,
    })?;
    let modified = settings::render_settings(&updated).map_err(|source| Error::InvalidJson {
        path: settings_file.to_path_buf(),
        source,
    })?;

    let patch = Patch {
        path: settings_file.to_path_buf(),
        original,
        modified,
    };
    review(&patch, console)
}

/// Append agent rules to a rules file, creating it (and its parent
/// directories) if needed. Files that already carry the rules are left alone
/// without showing a diff.
pub fn install_rules<R: BufRead, W: Write>(
    rules_file: &Path,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    let original = if rules_file.exists() {
        fs::read_to_string(rules_file)?
    } else {
        String::new()
    };

    let Some(modified) = rules::append_rules(&original) else {
        return Ok(Outcome::RulesPresent);
    };

    let patch = Patch {
        path: rules_file.to_path_buf(),
        original,
        modified,
    };
    review(&patch, console)
}

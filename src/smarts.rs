//! Bootstrap a project's `.smarts/` store from the shared documentation repository.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::DocStore;

/// Directory inside the repository that holds the shared documentation.
pub const REPO_DOCS_DIR: &str = "smarts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmartsStatus {
    /// The store directory already existed; nothing was touched.
    AlreadyPresent(PathBuf),
    /// The store was populated from a fresh clone.
    Cloned(PathBuf),
}

impl fmt::Display for SmartsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPresent(path) => {
                write!(f, "Smarts already available at {}", path.display())
            }
            Self::Cloned(path) => write!(f, "Smarts cloned to {}", path.display()),
        }
    }
}

/// Clone the repository's `smarts/` directory into `<project_root>/.smarts`
/// unless that directory already exists. Safe to call repeatedly.
pub async fn ensure_smarts(project_root: impl AsRef<Path>, config: &Config) -> Result<SmartsStatus> {
    let store = DocStore::for_project(project_root)?;
    let target = store.root();

    if target.exists() {
        return Ok(SmartsStatus::AlreadyPresent(target.to_path_buf()));
    }

    let checkout = tempfile::tempdir()?;
    let dest = checkout.path().to_string_lossy();

    tracing::info!(repo = %config.repo_url, "cloning shared documentation");
    config
        .git
        .run(
            &["clone", "--depth=1", config.repo_url.as_str(), &*dest],
            None,
        )
        .await
        .map_err(|e| match e {
            Error::CommandFailed { stderr, .. } => Error::Clone(stderr),
            other => other,
        })?;

    let source = checkout.path().join(REPO_DOCS_DIR);
    if !source.is_dir() {
        return Err(Error::MissingRepoDir(REPO_DOCS_DIR.to_string()));
    }

    copy_tree(&source, target)?;

    Ok(SmartsStatus::Cloned(target.to_path_buf()))
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

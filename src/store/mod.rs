//! The per-project documentation store.
//!
//! Layout:
//! ```text
//! <project>/.smarts/MANIFEST.md
//! <project>/.smarts/<topic>/<subtopic>.md
//! ```
//! The store assumes a single writer; manifest updates read and rewrite the
//! whole file without locking.

mod manifest;

use std::fs;
use std::path::{Component, Path, PathBuf};

pub use manifest::*;

use crate::error::Result;
use crate::models::FiledDocument;

/// Store directory name under a project root.
pub const STORE_DIR: &str = ".smarts";

#[derive(Debug, Clone)]
pub struct DocStore {
    root: PathBuf,
}

impl DocStore {
    /// Store rooted at `<project_root>/.smarts`. An existing project root is
    /// canonicalized (symlinks resolved); a missing one is only made absolute.
    pub fn for_project(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        let project_root = if project_root.exists() {
            fs::canonicalize(project_root)?
        } else {
            std::path::absolute(project_root)?
        };
        Ok(Self::new(project_root.join(STORE_DIR)))
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn document_path(&self, topic: &str, subtopic: &str) -> PathBuf {
        self.root.join(topic).join(format!("{}.md", subtopic))
    }

    /// Write `markdown` as the (topic, subtopic) document, replacing any
    /// previous version, and record it in the manifest.
    pub fn file(&self, topic: &str, subtopic: &str, markdown: &str) -> Result<FiledDocument> {
        let topic_dir = self.root.join(topic);
        fs::create_dir_all(&topic_dir)?;

        let path = self.document_path(topic, subtopic);
        fs::write(&path, markdown)?;
        self.update_manifest(topic, subtopic, &path)?;

        tracing::info!(topic, subtopic, path = %path.display(), "filed document");

        Ok(FiledDocument {
            topic: topic.to_string(),
            subtopic: subtopic.to_string(),
            path,
        })
    }

    /// Add an entry for `doc_path` under `topic`, creating the manifest on
    /// first use.
    pub fn update_manifest(&self, topic: &str, subtopic: &str, doc_path: &Path) -> Result<()> {
        let mut manifest = self.read_manifest()?.unwrap_or_default();
        manifest.insert(topic, &entry_line(subtopic, &self.relative_link(doc_path)));

        fs::create_dir_all(&self.root)?;
        fs::write(self.manifest_path(), manifest.render())?;
        Ok(())
    }

    /// The parsed manifest, or `None` if it has not been created yet.
    pub fn read_manifest(&self) -> Result<Option<Manifest>> {
        let path = self.manifest_path();
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        Ok(Some(Manifest::parse(&text)))
    }

    /// `/`-separated path of `doc_path` relative to the store root.
    fn relative_link(&self, doc_path: &Path) -> String {
        let relative = doc_path.strip_prefix(&self.root).unwrap_or(doc_path);
        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

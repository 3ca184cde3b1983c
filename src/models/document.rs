use std::fmt;
use std::path::PathBuf;

/// A markdown document written into the store at `<store>/<topic>/<subtopic>.md`.
///
/// Identified by the (topic, subtopic) pair; filing the same pair again
/// overwrites the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiledDocument {
    pub topic: String,
    pub subtopic: String,
    /// Absolute path of the written file.
    pub path: PathBuf,
}

impl fmt::Display for FiledDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Documentation saved to {}", self.path.display())
    }
}

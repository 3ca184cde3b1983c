//! The learn pipeline: resolve a source, fetch it, convert it to markdown and
//! file it into the project's store.

pub mod convert;
pub mod fetch;
pub mod resolve;

use std::path::Path;

pub use convert::Converter;
pub use fetch::Fetcher;
pub use resolve::resolve;

use crate::config::Config;
use crate::error::Result;
use crate::models::{FiledDocument, Source};
use crate::store::DocStore;

#[derive(Debug, Clone)]
pub struct Learner {
    fetcher: Fetcher,
    converter: Converter,
}

impl Learner {
    pub fn new(config: Config) -> Self {
        Self {
            converter: Converter::new(config.pandoc.clone()),
            fetcher: Fetcher::new(config),
        }
    }

    /// Fetch `source` and file it as `<project_root>/.smarts/<topic>/<subtopic>.md`.
    ///
    /// Nothing is written unless both fetch and conversion succeed.
    pub async fn learn(
        &self,
        source: &Source,
        topic: &str,
        subtopic: &str,
        project_root: impl AsRef<Path>,
    ) -> Result<FiledDocument> {
        let store = DocStore::for_project(project_root)?;

        let plan = resolve(source);
        tracing::debug!(kind = %source.kind, ?plan, "resolved source");

        let raw = self.fetcher.fetch(&plan).await?;
        let markdown = self.converter.to_markdown(raw).await?;

        store.file(topic, subtopic, &markdown)
    }
}

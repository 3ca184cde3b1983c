//! Content fetching over HTTP or through external commands.

use std::path::Path;

use reqwest::Client;

use crate::config::Config;
use crate::error::Result;
use crate::models::{FetchPlan, RawContent};

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: Config,
}

impl Fetcher {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Retrieve the content a plan points at. Failures propagate unchanged,
    /// except a failed `go doc` run, which falls back to the web page.
    pub async fn fetch(&self, plan: &FetchPlan) -> Result<RawContent> {
        match plan {
            FetchPlan::Web { url } => self.get_html(url).await,
            FetchPlan::ManPage { name } => self.man_source(name).await,
            FetchPlan::GoDoc {
                module,
                fallback_url,
            } => match self.config.go.run(&["doc", "-all", module.as_str()], None).await {
                Ok(stdout) => Ok(RawContent::Plain(
                    String::from_utf8_lossy(&stdout).into_owned(),
                )),
                Err(e) if e.is_command_failure() => {
                    tracing::warn!(module = %module, error = %e, "go doc failed, fetching {}", fallback_url);
                    self.get_html(fallback_url).await
                }
                Err(e) => Err(e),
            },
        }
    }

    /// GET `url`, following redirects; non-success statuses are errors.
    pub async fn get_html(&self, url: &str) -> Result<RawContent> {
        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(RawContent::Html(response.text().await?))
    }

    async fn man_source(&self, name: &str) -> Result<RawContent> {
        let located = self.config.man.run(&["-w", name], None).await?;
        let located = String::from_utf8_lossy(&located);
        let path = located.trim();
        tracing::debug!(page = name, path, "located man page");
        self.read_man_file(Path::new(path)).await
    }

    /// Read a man page source file, decompressing `.gz` files.
    pub async fn read_man_file(&self, path: &Path) -> Result<RawContent> {
        let bytes = if path.extension().is_some_and(|ext| ext == "gz") {
            let path = path.to_string_lossy();
            self.config.gzip.run(&["-dc", &*path], None).await?
        } else {
            tokio::fs::read(path).await?
        };
        Ok(RawContent::ManSource(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    }
}

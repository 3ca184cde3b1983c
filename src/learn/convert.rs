//! Markdown normalization via an external converter (pandoc).

use crate::error::Result;
use crate::models::RawContent;
use crate::process::CommandSpec;

/// Output dialect: GitHub Flavored Markdown.
pub const TARGET_FORMAT: &str = "gfm";

#[derive(Debug, Clone)]
pub struct Converter {
    command: CommandSpec,
}

impl Converter {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }

    /// Convert fetched content to markdown. Plain text passes through unchanged.
    pub async fn to_markdown(&self, content: RawContent) -> Result<String> {
        let Some(format) = content.converter_format() else {
            return Ok(content.into_text());
        };

        let output = self
            .command
            .run(
                &["-f", format, "-t", TARGET_FORMAT, "--wrap=none"],
                Some(content.text().as_bytes()),
            )
            .await?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

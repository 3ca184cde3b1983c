//! MCP server exposing documentation fetching as agent tools.
//!
//! All tools here are also available as direct CLI commands.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};

use crate::config::Config;
use crate::learn::Learner;
use crate::models::{Source, SourceKind};
use crate::smarts;

/// Name reported in the MCP handshake.
pub const SERVER_NAME: &str = "smarty-mcfly";

#[derive(Clone)]
pub struct McpServer {
    config: Config,
    learner: Learner,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(config: Config) -> Self {
        Self {
            learner: Learner::new(config.clone()),
            config,
            tool_router: Self::tool_router(),
        }
    }

    async fn learn(
        &self,
        kind: SourceKind,
        identifier: String,
        topic: &str,
        subtopic: &str,
        project_root: &str,
    ) -> Result<CallToolResult, McpError> {
        let source = Source::new(kind, identifier);
        let filed = self
            .learner
            .learn(&source, topic, subtopic, project_root)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(
            filed.to_string(),
        )]))
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "Clone the shared .smarts documentation directory into the project if it doesn't exist. Safe to call multiple times: an existing .smarts/ directory is left untouched."
    )]
    async fn setup_smarts(
        &self,
        params: Parameters<SetupSmartsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let status = smarts::ensure_smarts(&req.project_root, &self.config)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(
            status.to_string(),
        )]))
    }

    #[tool(
        description = "Fetch a web page and save it as markdown documentation in .smarts/<topic>/<subtopic>.md. Converts the HTML to GitHub Flavored Markdown with pandoc and adds the page to .smarts/MANIFEST.md."
    )]
    async fn learn_from_url(
        &self,
        params: Parameters<LearnFromUrlRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        self.learn(SourceKind::Url, req.url, &req.topic, &req.subtopic, &req.project_root)
            .await
    }

    #[tool(
        description = "Convert a man page to markdown and save it in .smarts/<topic>/<subtopic>.md. Locates the page source with 'man -w', converts it with pandoc and adds it to .smarts/MANIFEST.md."
    )]
    async fn learn_from_man(
        &self,
        params: Parameters<LearnFromManRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        self.learn(
            SourceKind::Man,
            req.man_page,
            &req.topic,
            &req.subtopic,
            &req.project_root,
        )
        .await
    }

    #[tool(
        description = "Fetch JavaDoc and save it as markdown in .smarts/. package_id can be a full URL or a Maven coordinate (group:artifact:version, version defaults to latest) resolved on javadoc.io. Updates .smarts/MANIFEST.md."
    )]
    async fn learn_from_javadoc(
        &self,
        params: Parameters<LearnFromJavadocRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        self.learn(
            SourceKind::Javadoc,
            req.package_id,
            &req.topic,
            &req.subtopic,
            &req.project_root,
        )
        .await
    }

    #[tool(
        description = "Fetch Python Sphinx docs and save them as markdown in .smarts/. package_id can be a full URL or a project name fetched from ReadTheDocs. Updates .smarts/MANIFEST.md."
    )]
    async fn learn_from_sphinx(
        &self,
        params: Parameters<LearnFromSphinxRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        self.learn(
            SourceKind::Sphinx,
            req.package_id,
            &req.topic,
            &req.subtopic,
            &req.project_root,
        )
        .await
    }

    #[tool(
        description = "Fetch Go documentation and save it as markdown in .smarts/. module can be a full URL or a Go module path; module paths use 'go doc -all' and fall back to pkg.go.dev if that fails. Updates .smarts/MANIFEST.md."
    )]
    async fn learn_from_godoc(
        &self,
        params: Parameters<LearnFromGodocRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        self.learn(
            SourceKind::Godoc,
            req.module,
            &req.topic,
            &req.subtopic,
            &req.project_root,
        )
        .await
    }

    #[tool(
        description = "Fetch Rust documentation and save it as markdown in .smarts/. crate can be a full URL or a crate name fetched from docs.rs. Updates .smarts/MANIFEST.md."
    )]
    async fn learn_from_rustdoc(
        &self,
        params: Parameters<LearnFromRustdocRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        self.learn(
            SourceKind::Rustdoc,
            req.crate_name,
            &req.topic,
            &req.subtopic,
            &req.project_root,
        )
        .await
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"smarty-mcfly keeps software documentation as markdown in a project's .smarts/ directory.

BEFORE ANSWERING questions about a tool, library, API or CLI command:
1. Read .smarts/MANIFEST.md
2. For a matching topic, read every linked markdown file in that section
3. Base the answer on those files rather than training knowledge

ADDING DOCUMENTATION:
- setup_smarts: clone the shared documentation set into .smarts/ (once per project)
- learn_from_url / learn_from_man / learn_from_javadoc / learn_from_sphinx /
  learn_from_godoc / learn_from_rustdoc: fetch a source and file it as
  .smarts/<topic>/<subtopic>.md; MANIFEST.md is updated automatically

Filing the same topic and subtopic again overwrites the document."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(config: Config) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(config);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}

//! Request types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::Deserialize;

fn default_project_root() -> String {
    ".".to_string()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetupSmartsRequest {
    #[schemars(description = "Project directory that should contain .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LearnFromUrlRequest {
    #[schemars(description = "Topic the documentation belongs to, e.g. 'python'")]
    pub topic: String,
    #[schemars(description = "Subtopic name, used as the file name, e.g. 'requests'")]
    pub subtopic: String,
    #[schemars(description = "Web page to fetch")]
    pub url: String,
    #[schemars(description = "Project directory containing .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LearnFromManRequest {
    #[schemars(description = "Topic the documentation belongs to, e.g. 'unix'")]
    pub topic: String,
    #[schemars(description = "Subtopic name, used as the file name, e.g. 'ls'")]
    pub subtopic: String,
    #[schemars(description = "Man page name, e.g. 'ls' or 'git-rebase'")]
    pub man_page: String,
    #[schemars(description = "Project directory containing .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LearnFromJavadocRequest {
    #[schemars(description = "Topic the documentation belongs to, e.g. 'java'")]
    pub topic: String,
    #[schemars(description = "Subtopic name, used as the file name")]
    pub subtopic: String,
    #[schemars(description = "JavaDoc URL or Maven coordinate 'group:artifact[:version]'")]
    pub package_id: String,
    #[schemars(description = "Project directory containing .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LearnFromSphinxRequest {
    #[schemars(description = "Topic the documentation belongs to, e.g. 'python'")]
    pub topic: String,
    #[schemars(description = "Subtopic name, used as the file name")]
    pub subtopic: String,
    #[schemars(description = "Sphinx docs URL or ReadTheDocs project name")]
    pub package_id: String,
    #[schemars(description = "Project directory containing .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LearnFromGodocRequest {
    #[schemars(description = "Topic the documentation belongs to, e.g. 'go'")]
    pub topic: String,
    #[schemars(description = "Subtopic name, used as the file name")]
    pub subtopic: String,
    #[schemars(description = "Go docs URL or module path, e.g. 'golang.org/x/sync/errgroup'")]
    pub module: String,
    #[schemars(description = "Project directory containing .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LearnFromRustdocRequest {
    #[schemars(description = "Topic the documentation belongs to, e.g. 'rust'")]
    pub topic: String,
    #[schemars(description = "Subtopic name, used as the file name")]
    pub subtopic: String,
    #[schemars(description = "docs.rs URL or crate name, e.g. 'serde-json'")]
    #[serde(rename = "crate")]
    pub crate_name: String,
    #[schemars(description = "Project directory containing .smarts/ (default: current directory)")]
    #[serde(default = "default_project_root")]
    pub project_root: String,
}

//! Fetch software documentation from heterogeneous sources, normalize it to
//! GitHub Flavored Markdown, and file it into a per-project `.smarts/` store
//! indexed by `MANIFEST.md`.

pub mod config;
pub mod error;
pub mod install;
pub mod learn;
pub mod mcp;
pub mod models;
pub mod process;
pub mod smarts;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};

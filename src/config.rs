//! Runtime configuration.
//!
//! External collaborators are located through environment variables, each
//! holding a command line whose first word is the program:
//! - `SMARTY_MCFLY_PANDOC` - markdown converter (default: `pandoc`)
//! - `SMARTY_MCFLY_MAN` - man page locator (default: `man`)
//! - `SMARTY_MCFLY_GO` - go documentation generator (default: `go`)
//! - `SMARTY_MCFLY_GZIP` - decompressor for `.gz` man sources (default: `gzip`)
//! - `SMARTY_MCFLY_GIT` - git client used by `smarts` (default: `git`)
//! - `SMARTY_MCFLY_REPO_URL` - repository cloned by `smarts`

use crate::process::CommandSpec;

/// Default repository holding the shared `smarts/` documentation directory.
pub const DEFAULT_REPO_URL: &str = "git@github.com:bayne/smarty-mcfly.git";

#[derive(Debug, Clone)]
pub struct Config {
    pub pandoc: CommandSpec,
    pub man: CommandSpec,
    pub go: CommandSpec,
    pub gzip: CommandSpec,
    pub git: CommandSpec,
    pub repo_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pandoc: CommandSpec::new("pandoc"),
            man: CommandSpec::new("man"),
            go: CommandSpec::new("go"),
            gzip: CommandSpec::new("gzip"),
            git: CommandSpec::new("git"),
            repo_url: DEFAULT_REPO_URL.to_string(),
        }
    }
}

impl Config {
    /// Build configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pandoc: command_from_env("SMARTY_MCFLY_PANDOC").unwrap_or(defaults.pandoc),
            man: command_from_env("SMARTY_MCFLY_MAN").unwrap_or(defaults.man),
            go: command_from_env("SMARTY_MCFLY_GO").unwrap_or(defaults.go),
            gzip: command_from_env("SMARTY_MCFLY_GZIP").unwrap_or(defaults.gzip),
            git: command_from_env("SMARTY_MCFLY_GIT").unwrap_or(defaults.git),
            repo_url: std::env::var("SMARTY_MCFLY_REPO_URL").unwrap_or(defaults.repo_url),
        }
    }
}

fn command_from_env(key: &str) -> Option<CommandSpec> {
    std::env::var(key).ok().and_then(|v| CommandSpec::parse(&v))
}

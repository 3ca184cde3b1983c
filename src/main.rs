use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smarty_mcfly::install::{self, Console};
use smarty_mcfly::learn::Learner;
use smarty_mcfly::models::{Source, SourceKind};
use smarty_mcfly::{mcp, smarts, Config};

#[derive(Parser)]
#[command(name = "smarty-mcfly")]
#[command(about = "CLI tool and MCP server for managing software documentation as markdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch documentation from a source, convert to markdown, and store in .smarts/
    Learn(LearnArgs),
    /// Clone the .smarts documentation directory into the project if it doesn't exist
    Smarts {
        /// Project directory to bootstrap
        #[arg(default_value = ".")]
        project_root: PathBuf,
    },
    /// Install MCP server configuration or agent rules into settings files
    Install {
        #[command(subcommand)]
        target: InstallTarget,
    },
    /// Start the MCP server via stdio (for Claude Desktop, VS Code, etc.)
    Serve,
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).multiple(false)))]
struct LearnArgs {
    /// Topic the documentation belongs to, e.g. "python"
    topic: String,
    /// Subtopic name, used as the file name, e.g. "requests"
    subtopic: String,

    /// Fetch a web page and convert via pandoc
    #[arg(long, group = "source", value_name = "URL")]
    url: Option<String>,
    /// Convert a man page via pandoc
    #[arg(long, group = "source", value_name = "PAGE")]
    man: Option<String>,
    /// Fetch JavaDoc (URL or Maven coordinate group:artifact[:version])
    #[arg(long, group = "source", value_name = "ID")]
    javadoc: Option<String>,
    /// Fetch Sphinx docs (URL or ReadTheDocs project name)
    #[arg(long, group = "source", value_name = "PKG")]
    sphinx: Option<String>,
    /// Fetch Go docs (URL or module path via go doc / pkg.go.dev)
    #[arg(long, group = "source", value_name = "MOD")]
    godoc: Option<String>,
    /// Fetch Rust docs (URL or crate name via docs.rs)
    #[arg(long, group = "source", value_name = "CRATE")]
    rustdoc: Option<String>,

    /// Project directory containing .smarts/
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
}

impl LearnArgs {
    /// The source flag given on the command line; the `source` group
    /// guarantees exactly one.
    fn source(&self) -> Option<Source> {
        [
            (SourceKind::Url, &self.url),
            (SourceKind::Man, &self.man),
            (SourceKind::Javadoc, &self.javadoc),
            (SourceKind::Sphinx, &self.sphinx),
            (SourceKind::Godoc, &self.godoc),
            (SourceKind::Rustdoc, &self.rustdoc),
        ]
        .into_iter()
        .find_map(|(kind, value)| value.as_deref().map(|v| Source::new(kind, v)))
    }
}

#[derive(Subcommand)]
enum InstallTarget {
    /// Install the MCP server into a settings.json file (Claude Desktop or VS Code format)
    Mcp {
        /// Settings file to update
        settings_file: PathBuf,
    },
    /// Append agent rules to a rules file (e.g. CLAUDE.md, .cursorrules)
    Rules {
        /// Rules file to update (created if missing)
        rules_file: PathBuf,
    },
}

/// Initialize tracing on stderr; stdout carries command results and, under
/// `serve`, the MCP protocol.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "smarty_mcfly=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();

    match cli.command {
        Commands::Learn(args) => {
            let source = args
                .source()
                .ok_or_else(|| anyhow::anyhow!("no source flag given"))?;
            let filed = Learner::new(config)
                .learn(&source, &args.topic, &args.subtopic, &args.project_root)
                .await?;
            println!("{}", filed);
        }
        Commands::Smarts { project_root } => {
            let status = smarts::ensure_smarts(&project_root, &config).await?;
            println!("{}", status);
        }
        Commands::Install { target } => {
            let mut console = Console::stdio();
            let outcome = match target {
                InstallTarget::Mcp { settings_file } => {
                    install::install_mcp(&settings_file, &mut console)?
                }
                InstallTarget::Rules { rules_file } => {
                    install::install_rules(&rules_file, &mut console)?
                }
            };
            console.say(outcome)?;
        }
        Commands::Serve => {
            mcp::run_stdio_server(config).await?;
        }
    }

    Ok(())
}

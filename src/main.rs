use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_modernizer::{analysis, api, config::ServerConfig, guides, mcp, render};

#[derive(Parser)]
#[command(name = "modernizer")]
#[command(about = "Modernize Semantic Kernel and AutoGen agent code to Microsoft Agent Framework")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (REST API and MCP over streamable HTTP)
    Serve {
        /// Port for HTTP server (defaults to MODERNIZER_PORT or 8087)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start MCP server via stdio (for editor and agent integration)
    Mcp,
    /// Detect the framework and idioms used by a source file
    Analyze {
        /// Source file to analyze (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Print the classification as JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },
    /// Generate Agent Framework code from a source file
    Generate {
        /// Source framework: semantic_kernel (sk) or autogen
        #[arg(short, long)]
        framework: String,

        /// Source file to modernize (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the migration guide for a framework
    Guide {
        /// Source framework: semantic_kernel (sk) or autogen
        framework: String,
    },
}

/// Initialize tracing with output to stderr (for MCP mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "agent_modernizer=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn read_source(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = api::create_router(&config);
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Modernizer server listening on http://{}", address);
    tracing::info!("MCP endpoint available at http://{}/mcp", address);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Only the HTTP server logs to stdout; every other mode prints its
    // result there.
    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let config = ServerConfig::from_env();

    match cli.command {
        Some(Commands::Serve { port }) => {
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            serve(config).await?;
        }
        Some(Commands::Mcp) => {
            mcp::run_stdio_server().await?;
        }
        Some(Commands::Analyze { file, json }) => {
            let source = read_source(file)?;
            let result = analysis::classify(&source);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", result);
            }
        }
        Some(Commands::Generate { framework, file }) => {
            let source = read_source(file)?;
            print!("{}", render::generate_modernized_code(&source, &framework));
        }
        Some(Commands::Guide { framework }) => {
            print!("{}", guides::get_migration_guide(&framework));
        }
        None => {
            serve(config).await?;
        }
    }

    Ok(())
}

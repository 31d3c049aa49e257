//! Morsel developer CLI
//!
//! Issues raw query/mutation calls against a Morsel backend by wire name,
//! with JSON input from the command line. Useful for poking at endpoints
//! without building the app.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use morsel_rpc::{ApiError, HttpTransport, NoAuth, StaticAuth};
use reqwest::Method;
use serde_json::Value;

/// Morsel developer CLI
#[derive(Parser)]
#[command(name = "morsel")]
#[command(about = "Call Morsel backend procedures from the command line")]
#[command(version)]
#[command(after_help = "\
Examples:
  morsel query posts.getRecentPosts --input '{\"limit\":20,\"page\":1}'
  morsel query users.getMe --token $MORSEL_TOKEN
  morsel mutate posts.likePost --input '{\"postId\":\"abc\"}' --token $MORSEL_TOKEN
")]
struct Cli {
    /// Backend base URL
    #[arg(
        long,
        global = true,
        env = "MORSEL_API_URL",
        default_value = "https://api.morsel.app"
    )]
    base_url: String,

    /// Bearer token for authenticated procedures
    #[arg(long, global = true, env = "MORSEL_TOKEN")]
    token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a read procedure (GET)
    Query {
        /// Wire name, e.g. posts.getRecentPosts
        procedure: String,
        /// JSON input object
        #[arg(long, default_value = "{}")]
        input: String,
    },
    /// Call a state-changing procedure (POST)
    Mutate {
        /// Wire name, e.g. posts.likePost
        procedure: String,
        /// JSON input object
        #[arg(long, default_value = "{}")]
        input: String,
    },
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_transport(cli: &Cli) -> Result<HttpTransport> {
    let timeout = Duration::from_secs(cli.timeout);
    let transport = match &cli.token {
        Some(token) => HttpTransport::with_timeout(
            cli.base_url.as_str(),
            Arc::new(StaticAuth::bearer(token.clone())),
            timeout,
        ),
        None => HttpTransport::with_timeout(cli.base_url.as_str(), Arc::new(NoAuth), timeout),
    };
    transport.context("failed to build HTTP client")
}

async fn run_call(cli: &Cli, procedure: &str, input: &str, method: Method) -> Result<()> {
    if procedure.is_empty() {
        bail!("procedure name must not be empty");
    }

    let input: Value = serde_json::from_str(input)
        .with_context(|| format!("--input is not valid JSON: {input}"))?;

    let transport = build_transport(cli)?;
    match transport.execute(procedure, method, input).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            tracing::debug!("call failed: {err:?}");
            report_api_error(procedure, &err)
        }
    }
}

fn report_api_error(procedure: &str, err: &ApiError) -> Result<()> {
    eprintln!("{}: {}", err.analytics_code(), err.description());
    if let Some(suggestion) = err.recovery_suggestion() {
        eprintln!("hint: {suggestion}");
    }
    bail!("{procedure} failed: {err}")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Query { procedure, input } => {
            run_call(&cli, procedure, input, Method::GET).await
        }
        Commands::Mutate { procedure, input } => {
            run_call(&cli, procedure, input, Method::POST).await
        }
    }
}

//! Sample CI/CD pipeline service entry point.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sample_app::api::AppState;
use sample_app::config::Config;
use sample_app::server;
use sample_app::utils::shutdown_signal;

/// Sample HTTP service with health, welcome, and build info endpoints.
#[derive(Parser, Debug)]
#[command(name = "sample-app")]
#[command(about = "Sample HTTP service for exercising a Tekton CI/CD pipeline")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Listening port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Print the resolved configuration and exit.
    CheckConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    init_tracing(args.verbose, args.log_format);

    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = args.port {
        config.port = port;
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_tracing(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("sample_app=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// Print the resolved configuration.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SAMPLE APP - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  Port:        {}", config.port);
    println!("  Environment: {}", config.environment());
    println!("  Pod Name:    {}", config.pod_name);
    println!("  Version:     {}", config.app_version);
    println!("  Build Time:  {}", config.build_time);
    println!("  Commit Hash: {}", config.commit_hash);
    println!("======================================================================");

    Ok(())
}

/// Bind the listener and serve until shutdown.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    let listener = server::bind(config.port).await.map_err(|e| {
        error!("{}", e);
        e
    })?;

    let port = listener.local_addr()?.port();
    info!("Server is running on port {}", port);
    info!("Environment: {}", config.environment());

    server::serve(listener, AppState::new(config), shutdown_signal()).await?;

    Ok(())
}

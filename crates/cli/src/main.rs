use clap::Parser;
use pagevisits_domain::CliOverrides;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "pagevisits")]
#[command(version)]
#[command(about = "Page Visits - records and serves browsing history for the sidepanel extension")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Page Visits API v{}", env!("CARGO_PKG_VERSION"));
    match bootstrap::config_source(cli.config.as_deref()) {
        Some(source) => info!(config_file = %source, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let (write_pool, read_pool) =
        bootstrap::init_database(&config.database.path, &config.database).await?;

    let repos = di::Repositories::new(write_pool, read_pool);
    let use_cases = di::UseCases::new(&repos, &config.visits, env!("CARGO_PKG_VERSION"));
    let app_state = use_cases.into_app_state(&config);

    if let Some(limiters) = &app_state.rate_limiters {
        limiters
            .clone()
            .spawn_pruning(Duration::from_secs(config.rate_limit.prune_interval_secs));
        info!(
            trust_forwarded_for = config.rate_limit.trust_forwarded_for,
            "Rate limiting enabled"
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    server::start_web_server(addr, app_state, &config.server.cors_allowed_origins).await?;

    info!("Server shutdown complete");
    Ok(())
}

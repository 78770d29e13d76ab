use clap::Parser;
use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonehost_domain::CliOverrides;
use zonehost_infrastructure::dns::DnsRequestHandler;
use zonehost_jobs::{JobRunner, StatsReportJob, ZoneReloadJob};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "zonehost")]
#[command(version)]
#[command(about = "Zonehost - authoritative DNS server with optional recursion")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver for names outside the loaded zones (ip or ip:port)
    #[arg(long, value_name = "ADDR")]
    recurse_to: Option<String>,

    /// Zone file to serve, in addition to the configured ones (repeatable)
    #[arg(long = "zone", value_name = "FILE")]
    zones: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        recurse_to: cli.recurse_to,
        zone_files: cli.zones,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Zonehost v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&dns_services);

    let zone_count = use_cases.reload_zones.execute().await?;
    info!(zones = zone_count, "Initial zone load complete");
    if zone_count == 0 {
        info!("No zones configured; every query will be refused or recursed");
    }

    let shutdown = CancellationToken::new();

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.zones.reload_interval_secs > 0 {
        jobs = jobs.with_zone_reload(ZoneReloadJob::new(
            use_cases.reload_zones.clone(),
            config.zones.reload_interval_secs,
        ));
    }
    if config.stats.report_interval_secs > 0 {
        jobs = jobs.with_stats_report(StatsReportJob::new(
            use_cases.get_stats.clone(),
            config.stats.report_interval_secs,
        ));
    }
    jobs.start().await;

    let handler = Arc::new(DnsRequestHandler::new(use_cases.resolve_query.clone()));
    let dns_addr = config.server.listen_address();

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        ctrl_c_token.cancel();
    });

    server::start_dns_server(dns_addr, handler, &config.server, shutdown).await?;

    let stats = use_cases.get_stats.execute();
    info!(total_queries = stats.total_queries, "Server shutdown complete");
    Ok(())
}

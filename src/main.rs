use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_proxy::{
    cache::NewsCache,
    config::UpstreamConfig,
    http::{self, AppState},
    news::SerpApiClient,
    refresh::Refresher,
    scheduler::Scheduler,
};

#[derive(Parser)]
#[command(name = "news-proxy")]
#[command(about = "Cached crypto and gold news, refreshed on a timer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, default_value = "8787")]
    port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Age at which cached news is refetched, and period of the refresh timer
    #[arg(long, default_value = "7200", value_parser = clap::value_parser!(u64).range(1..))]
    refresh_interval_secs: u64,

    /// Only refresh at startup and through POST /scheduled
    #[arg(long)]
    no_timer: bool,

    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("news_proxy={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let upstream =
        UpstreamConfig::from_env().context("failed to load upstream configuration")?;
    info!("using news API at {}", upstream.base_url);

    let refresher = Arc::new(Refresher::new(
        Arc::new(NewsCache::new()),
        Arc::new(SerpApiClient::new(upstream)),
        Duration::from_secs(args.refresh_interval_secs),
    ));

    let scheduler = Scheduler::spawn(Arc::clone(&refresher), !args.no_timer);

    let app = http::router(AppState::new(refresher));

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    info!("news proxy started on {}", bind_addr);
    info!(
        "refreshing every {}s{}",
        args.refresh_interval_secs,
        if args.no_timer { " (timer disabled)" } else { "" }
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    scheduler.shutdown().await;
    info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

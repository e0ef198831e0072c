use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::config::Settings;

mod auth;
mod error;
mod handlers;
mod response;
mod routes;


#[derive(Debug, Parser)]
#[command(name = "glide_api")]
struct Args {
    /// Listen port. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Root of the JSON data tree. Overrides DATA_DIR.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut settings = Settings::from_env()?;
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }

    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    if settings.api_key().is_none() {
        tracing::warn!("API_KEY is not set; every keyed endpoint will answer 403");
    }

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));
    let data_dir = settings.data_dir.display().to_string();
    let app = routes::build_router(routes::AppState::new(settings));

    tracing::info!(%addr, %data_dir, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

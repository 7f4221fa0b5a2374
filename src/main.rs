//! The life briefing site's edge router server.

use briefing_edge::{app, Assets, Config, Env, Mirror};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    let env = Env {
        assets: Assets::from_dir(&config.assets_dir),
        mirror: Mirror::new(config.mirror_origin)?,
    };

    tracing::info!(
        assets_dir = %config.assets_dir.display(),
        mirror_origin = %env.mirror.origin(),
        "Listening on {}...",
        config.address,
    );

    let listener = TcpListener::bind(&config.address).await?;

    axum::serve(listener, app(env))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Initializes the `tracing` subscriber, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("briefing_edge=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

/// Resolves once the process is asked to stop (Ctrl-C). Never resolves if Ctrl-C can't be listened
/// for.
async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down...");
}

/*
 * Responsibility
 * - load Config -> init tracing / panic hook -> assemble Router
 * - apply middleware (CORS, request id, trace, limits)
 * - axum::serve() until Ctrl+C / SIGTERM
 */
use std::{panic, process};

use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware;

fn init_tracing() {
    // RUST_LOG wins when set, e.g.
    // RUST_LOG=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

/// Runs the server until Ctrl+C / SIGTERM.
///
/// Panics are logged through tracing. Outside production the process then aborts;
/// in production the default hook prints and the server keeps serving.
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    let config = Config::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "failed to load configuration");
    })?;

    init_panic_hook(!config.app_env.is_production());

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        "server running in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    let router = api::routes();
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

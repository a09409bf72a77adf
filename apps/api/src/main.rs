mod env;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::prelude::*;

use api::AppState;
use env::env;
use lexo_storage::RecordStore;

fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = env();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let records = match &env.data_dir {
                Some(dir) => RecordStore::new(dir),
                None => RecordStore::default_base().expect("no usable data directory"),
            };
            tracing::info!(base = %records.base().display(), "record_store_ready");

            let state = AppState::connect(
                records,
                &env.transcribe_api_base,
                &env.transcribe_api_key,
                &env.translate_api_base,
                env.tts_api_base.as_deref(),
            )
            .expect("failed to wire application state");

            let addr = SocketAddr::from(([0, 0, 0, 0], env.port));
            tracing::info!(addr = %addr, "server_listening");

            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, api::app(Arc::new(state)))
                .with_graceful_shutdown(shutdown_signal())
                .await
                .unwrap();
        });

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    tracing::info!("shutdown_signal_received");
}

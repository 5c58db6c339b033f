/*
 * Responsibility
 * - Config loading → tracing / panic hook → route registration
 * - Hand the DispatchManager to the listener (blocks until the server stops)
 */
use std::any::Any;
use std::{panic, process};

use anyhow::Result;

use crate::api;
use crate::config::{AppEnv, Config};
use crate::dispatch::DispatchManager;

// used when RUST_LOG is unset, e.g. RUST_LOG=debug,tower_http=trace for route-level detail
const DEFAULT_LOG_FILTER: &str = "info,api_dispatch=info,tower_http=info";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Routes panics from handlers through tracing. Development aborts so the failure is noticed;
/// production falls back to the previous hook and the server keeps serving.
fn install_panic_hook(app_env: AppEnv) {
    let previous = panic::take_hook();
    let abort = !app_env.is_production();

    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(
            panic = panic_message(info.payload()),
            location = %location,
            ?app_env,
            "handler panicked"
        );

        if abort {
            process::abort();
        }
        previous(info);
    }))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    install_panic_hook(config.app_env);

    tracing::info!(
        "starting dispatch layer in {:?} mode on {}",
        config.app_env,
        config.listen_addr
    );

    let manager = build_manager(&config);
    manager.listen_on(&config.listen_addr).await?;
    Ok(())
}

fn build_manager(config: &Config) -> DispatchManager {
    let mut manager = DispatchManager::new().with_body_limit(config.body_limit_bytes);
    api::v1::register(&mut manager);
    manager
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nsquota::config::Config;
use nsquota::kubernetes::create_client;
use nsquota::quota::{fetch, RequestContext};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the JSON response
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, quota={}",
        config.namespace, config.quota_name
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let mut ctx = RequestContext::new();
    if let Some(timeout) = config.request_timeout {
        ctx = ctx.with_timeout(timeout);
    }

    let cancel = ctx.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            cancel.cancel();
        }
    });

    let response = fetch(&ctx, &client, &config.namespace, &config.quota_name)
        .await
        .with_context(|| {
            format!(
                "Failed to fetch resource quota {}/{}",
                config.namespace, config.quota_name
            )
        })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

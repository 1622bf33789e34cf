// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{QuotaError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client,
};
use std::path::Path;
use tracing::{info, instrument};

/// Create a Kubernetes client, from an explicit kubeconfig when configured
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig_path {
        Some(path) => {
            info!("Loading kubeconfig from {}", path.display());
            let kubeconfig = read_kubeconfig(path)?;
            create_client_from_kubeconfig(&kubeconfig, config.kube_context.as_deref()).await
        }
        None => Client::try_default()
            .await
            .map_err(|e| QuotaError::KubeconfigError(format!("Failed to infer config: {}", e))),
    }
}

fn read_kubeconfig(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        QuotaError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn create_client_from_kubeconfig(
    kubeconfig: &str,
    context: Option<&str>,
) -> Result<Client> {
    let kubeconfig_parsed = parse_kubeconfig(kubeconfig)?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let client_config = kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &options)
        .await
        .map_err(|e| QuotaError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| QuotaError::KubeconfigError(format!("Failed to create client: {}", e)))
}

fn parse_kubeconfig(kubeconfig: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(kubeconfig)
        .map_err(|e| QuotaError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}

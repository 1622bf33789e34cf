// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_REQUEST_TIMEOUT_SECS};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub namespace: String,
    pub quota_name: String,
    /// None when the deadline is disabled
    pub request_timeout: Option<Duration>,
    pub kubeconfig_path: Option<PathBuf>,
    pub kube_context: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            let value = lookup(key)
                .with_context(|| format!("{} environment variable not set", key))?;
            if value.is_empty() {
                bail!("{} environment variable is empty", key);
            }
            Ok(value)
        };

        let namespace = required(vars::NAMESPACE)?;
        let quota_name = required(vars::NAME)?;

        let timeout_secs = match lookup(vars::REQUEST_TIMEOUT_SECS) {
            Some(raw) => raw.parse::<u64>().with_context(|| {
                format!(
                    "{} must be a whole number of seconds, got '{}'",
                    vars::REQUEST_TIMEOUT_SECS,
                    raw
                )
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        let request_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Config {
            namespace,
            quota_name,
            request_timeout,
            kubeconfig_path: lookup(vars::KUBECONFIG_PATH)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            kube_context: lookup(vars::KUBE_CONTEXT).filter(|c| !c.is_empty()),
        })
    }
}

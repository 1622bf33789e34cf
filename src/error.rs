// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::quota::quantity::QuantityError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotaError {
    #[error("Failed to get resource quota {namespace}/{name}: {source}")]
    QuotaLookupFailed {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Resource quota request cancelled")]
    Cancelled,

    #[error("Resource quota request exceeded its deadline of {0:?}")]
    DeadlineExceeded(Duration),

    #[error("Invalid quota request: {0}")]
    InvalidRequest(String),

    #[error("Invalid quantity for resource {resource}: {source}")]
    InvalidQuantity {
        resource: String,
        #[source]
        source: QuantityError,
    },

    #[error("Failed to build Kubernetes client: {0}")]
    KubeconfigError(String),
}

impl QuotaError {
    /// HTTP status code reported by the API server, if the lookup got that far
    pub fn api_status_code(&self) -> Option<u16> {
        match self {
            QuotaError::QuotaLookupFailed {
                source: kube::Error::Api(resp),
                ..
            } => Some(resp.code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.api_status_code() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, QuotaError>;

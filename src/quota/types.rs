// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{QuotaError, Result};
use serde::{Deserialize, Serialize};

/// Identifies a ResourceQuota object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaRequest {
    namespace: String,
    name: String,
}

impl QuotaRequest {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let name = name.into();

        if namespace.is_empty() {
            return Err(QuotaError::InvalidRequest(
                "namespace must not be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(QuotaError::InvalidRequest(
                "quota name must not be empty".to_string(),
            ));
        }

        Ok(Self { namespace, name })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single resource limit of a quota
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuotaElement {
    pub name: String,
    pub hard: i64,
    pub used: i64,
}

/// Flattened view of a ResourceQuota.
///
/// Element order follows the resource names and carries no meaning.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuotaResponse {
    pub name: String,
    pub elements: Vec<QuotaElement>,
}

impl QuotaResponse {
    pub fn element(&self, resource: &str) -> Option<&QuotaElement> {
        self.elements.iter().find(|e| e.name == resource)
    }
}

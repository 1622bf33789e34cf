// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ResourceQuota lookups against the cluster API

use async_trait::async_trait;
use k8s_openapi::api::core::v1::ResourceQuota;
use kube::{api::GetParams, Api, Client};
use tracing::{debug, instrument};

/// The single cluster-API call the quota fetcher depends on.
///
/// Implementations do no retries or caching; errors are returned as reported.
#[async_trait]
pub trait QuotaClient: Send + Sync {
    async fn get_resource_quota(
        &self,
        namespace: &str,
        name: &str,
        params: &GetParams,
    ) -> kube::Result<ResourceQuota>;
}

#[async_trait]
impl QuotaClient for Client {
    #[instrument(skip(self, params))]
    async fn get_resource_quota(
        &self,
        namespace: &str,
        name: &str,
        params: &GetParams,
    ) -> kube::Result<ResourceQuota> {
        let quotas: Api<ResourceQuota> = Api::namespaced(self.clone(), namespace);
        debug!("Getting resource quota {}/{}", namespace, name);
        quotas.get_with(name, params).await
    }
}

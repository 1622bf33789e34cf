// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetches a ResourceQuota and flattens it into a QuotaResponse

use crate::error::{QuotaError, Result};
use crate::kubernetes::QuotaClient;
use crate::quota::context::RequestContext;
use crate::quota::quantity::quantity_value;
use crate::quota::types::{QuotaElement, QuotaRequest, QuotaResponse};
use k8s_openapi::api::core::v1::ResourceQuota;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::api::GetParams;
use tracing::{debug, info, instrument, warn};

/// Fetch the quota `namespace/name` and convert it
pub async fn fetch<C>(
    ctx: &RequestContext,
    client: &C,
    namespace: &str,
    name: &str,
) -> Result<QuotaResponse>
where
    C: QuotaClient + ?Sized,
{
    let request = QuotaRequest::new(namespace, name)?;
    fetch_resource_quota(ctx, client, &request).await
}

#[instrument(
    skip(ctx, client, request),
    fields(namespace = %request.namespace(), name = %request.name())
)]
pub async fn fetch_resource_quota<C>(
    ctx: &RequestContext,
    client: &C,
    request: &QuotaRequest,
) -> Result<QuotaResponse>
where
    C: QuotaClient + ?Sized,
{
    if ctx.is_cancelled() {
        return Err(QuotaError::Cancelled);
    }

    let params = GetParams::default();
    let lookup = client.get_resource_quota(request.namespace(), request.name(), &params);

    let quota = tokio::select! {
        biased;
        _ = ctx.cancelled() => {
            warn!("Resource quota request cancelled");
            return Err(QuotaError::Cancelled);
        }
        _ = ctx.deadline_elapsed() => {
            let timeout = ctx.timeout().unwrap_or_default();
            warn!("Resource quota request timed out after {:?}", timeout);
            return Err(QuotaError::DeadlineExceeded(timeout));
        }
        result = lookup => result.map_err(|source| QuotaError::QuotaLookupFailed {
            namespace: request.namespace().to_string(),
            name: request.name().to_string(),
            source,
        })?,
    };

    let response = to_quota_response(&quota)?;
    info!(
        "Fetched resource quota with {} elements",
        response.elements.len()
    );
    Ok(response)
}

/// Flatten a ResourceQuota into one element per hard limit.
///
/// Only the enforced limits in the status are reported; a quota whose
/// status has not been filled in yet has no elements.
pub fn to_quota_response(quota: &ResourceQuota) -> Result<QuotaResponse> {
    let status = quota.status.as_ref();
    let hard = status.and_then(|s| s.hard.as_ref());
    let used = status.and_then(|s| s.used.as_ref());

    let mut elements = Vec::with_capacity(hard.map_or(0, |h| h.len()));
    for (resource, hard_quantity) in hard.into_iter().flatten() {
        let decode = |q: &Quantity| {
            quantity_value(q).map_err(|source| QuotaError::InvalidQuantity {
                resource: resource.clone(),
                source,
            })
        };

        let used_value = match used.and_then(|u| u.get(resource)) {
            Some(q) => decode(q)?,
            None => {
                debug!("No usage reported for {}, assuming 0", resource);
                0
            }
        };

        elements.push(QuotaElement {
            name: resource.clone(),
            hard: decode(hard_quantity)?,
            used: used_value,
        });
    }

    Ok(QuotaResponse {
        name: quota.metadata.name.clone().unwrap_or_default(),
        elements,
    })
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ResourceQuota fetching and conversion to the flat response model.

pub mod context;
pub mod fetcher;
pub mod quantity;
pub mod types;

pub use context::RequestContext;
pub use fetcher::{fetch, fetch_resource_quota, to_quota_response};
pub use quantity::{quantity_value, QuantityError};
pub use types::{QuotaElement, QuotaRequest, QuotaResponse};

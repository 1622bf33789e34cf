// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction and the ResourceQuota lookup capability.

pub mod client;
pub mod quota;

pub use client::create_client;
pub use quota::QuotaClient;

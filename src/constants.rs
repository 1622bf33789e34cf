// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by the CLI
pub mod env {
    /// Namespace holding the ResourceQuota (required)
    pub const NAMESPACE: &str = "QUOTA_NAMESPACE";
    /// Name of the ResourceQuota object (required)
    pub const NAME: &str = "QUOTA_NAME";
    /// Per-request deadline in seconds, 0 disables it
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Explicit kubeconfig file, otherwise the client config is inferred
    pub const KUBECONFIG_PATH: &str = "KUBECONFIG_PATH";
    /// Context to select from KUBECONFIG_PATH
    pub const KUBE_CONTEXT: &str = "KUBE_CONTEXT";
}

/// Default per-request deadline
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Quantity suffix multipliers
pub mod quantity {
    /// Binary SI suffixes and their power of 1024
    pub const BINARY_SUFFIXES: [(&str, u32); 6] =
        [("Ki", 1), ("Mi", 2), ("Gi", 3), ("Ti", 4), ("Pi", 5), ("Ei", 6)];

    /// Decimal SI suffixes and their power of 10
    pub const DECIMAL_SUFFIXES: [(&str, i32); 10] = [
        ("n", -9),
        ("u", -6),
        ("m", -3),
        ("", 0),
        ("k", 3),
        ("M", 6),
        ("G", 9),
        ("T", 12),
        ("P", 15),
        ("E", 18),
    ];
}

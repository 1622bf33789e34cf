// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for the cluster API and ResourceQuota builders.

use crate::kubernetes::QuotaClient;
use async_trait::async_trait;
use http::{Request, Response};
use k8s_openapi::api::core::v1::{ResourceQuota, ResourceQuotaStatus};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::api::{GetParams, ObjectMeta};
use kube::client::Body;
use kube::core::ErrorResponse;
use kube::Client;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self.find_response(&method, &path).unwrap_or_else(|| {
            let name = path.rsplit('/').next().unwrap_or_default();
            (404, not_found_json("resourcequotas", name))
        });

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

enum FakeBehaviour {
    Return(ResourceQuota),
    Fail { code: u16, reason: String },
    Hang,
}

/// In-memory QuotaClient that records every lookup it receives
pub struct FakeQuotaClient {
    behaviour: FakeBehaviour,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakeQuotaClient {
    fn with(behaviour: FakeBehaviour) -> Self {
        Self {
            behaviour,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(quota: ResourceQuota) -> Self {
        Self::with(FakeBehaviour::Return(quota))
    }

    /// Fail every lookup with an API status error
    pub fn failing(code: u16, reason: &str) -> Self {
        Self::with(FakeBehaviour::Fail {
            code,
            reason: reason.to_string(),
        })
    }

    /// Never answer, for cancellation and deadline tests
    pub fn hanging() -> Self {
        Self::with(FakeBehaviour::Hang)
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuotaClient for FakeQuotaClient {
    async fn get_resource_quota(
        &self,
        namespace: &str,
        name: &str,
        _params: &GetParams,
    ) -> kube::Result<ResourceQuota> {
        self.requests
            .lock()
            .unwrap()
            .push((namespace.to_string(), name.to_string()));

        match &self.behaviour {
            FakeBehaviour::Return(quota) => Ok(quota.clone()),
            FakeBehaviour::Fail { code, reason } => Err(kube::Error::Api(ErrorResponse {
                status: "Failure".to_string(),
                message: format!("resourcequotas \"{}\" {}", name, reason),
                reason: reason.clone(),
                code: *code,
            })),
            FakeBehaviour::Hang => std::future::pending().await,
        }
    }
}

fn resource_list(items: &[(&str, &str)]) -> BTreeMap<String, Quantity> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), Quantity(v.to_string())))
        .collect()
}

/// Build a ResourceQuota with the given status hard/used limits
pub fn make_resource_quota(
    name: Option<&str>,
    hard: &[(&str, &str)],
    used: &[(&str, &str)],
) -> ResourceQuota {
    ResourceQuota {
        metadata: ObjectMeta {
            name: name.map(str::to_string),
            ..Default::default()
        },
        spec: None,
        status: Some(ResourceQuotaStatus {
            hard: Some(resource_list(hard)),
            used: Some(resource_list(used)),
        }),
    }
}

/// Create a mock ResourceQuota JSON response
pub fn resource_quota_json(
    name: &str,
    namespace: &str,
    hard: &[(&str, &str)],
    used: &[(&str, &str)],
) -> String {
    let to_map = |items: &[(&str, &str)]| -> serde_json::Map<String, serde_json::Value> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
            .collect()
    };

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ResourceQuota",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": { "hard": to_map(hard) },
        "status": {
            "hard": to_map(hard),
            "used": to_map(used)
        }
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

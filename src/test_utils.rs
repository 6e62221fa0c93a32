// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a canned-response HTTP service wrapped in a
//! `kube::Client`, plus Crossplane JSON fixtures. Unmatched requests
//! get a Kubernetes-style 404 Status, so "object not found" paths need
//! no explicit routes.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

#[derive(Clone)]
struct Route {
    method: String,
    path: String,
    status: u16,
    body: String,
}

/// Routes requests to canned responses by method and path. Exact path
/// matches win over prefix matches.
#[derive(Clone, Default)]
pub struct MockCluster {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl MockCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for GET requests to `path`
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.routes.lock().unwrap().push(Route {
            method: "GET".to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
        self
    }

    /// Build a kube Client backed by this mock
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn respond(&self, method: &str, path: &str) -> (u16, String) {
        let routes = self.routes.lock().unwrap();

        if let Some(r) = routes
            .iter()
            .find(|r| r.method == method && r.path == path)
        {
            return (r.status, r.body.clone());
        }
        if let Some(r) = routes
            .iter()
            .find(|r| r.method == method && path.starts_with(r.path.as_str()))
        {
            return (r.status, r.body.clone());
        }

        (404, not_found_json(path))
    }
}

impl Service<Request<Body>> for MockCluster {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let (status, body) = self.respond(req.method().as_str(), req.uri().path());

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Kubernetes-style NotFound Status body
pub fn not_found_json(path: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("the server could not find the requested resource at {}", path),
        "reason": "NotFound",
        "code": 404,
    })
    .to_string()
}

/// A Composition document with the given pipeline, declaring
/// `example.org/v1, XPostgreSQLInstance` as its composite type
pub fn composition_json(name: &str, pipeline: Value) -> String {
    json!({
        "apiVersion": "apiextensions.crossplane.io/v1",
        "kind": "Composition",
        "metadata": { "name": name },
        "spec": {
            "compositeTypeRef": {
                "apiVersion": "example.org/v1",
                "kind": "XPostgreSQLInstance",
            },
            "mode": "Pipeline",
            "pipeline": pipeline,
        },
    })
    .to_string()
}

/// An installed Function document
pub fn function_json(name: &str) -> String {
    json!({
        "apiVersion": "pkg.crossplane.io/v1",
        "kind": "Function",
        "metadata": { "name": name },
        "spec": {
            "package": format!("xpkg.upbound.io/crossplane-contrib/{}:v0.1.0", name),
        },
    })
    .to_string()
}

/// An APIGroupList response serving a single group/version, as returned
/// by `GET /apis`
pub fn api_group_list_json(group: &str, version: &str) -> String {
    let group_version = format!("{}/{}", group, version);
    json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": [{
            "name": group,
            "versions": [{ "groupVersion": group_version, "version": version }],
            "preferredVersion": { "groupVersion": group_version, "version": version },
        }],
    })
    .to_string()
}

/// An APIResourceList response serving a single resource, as returned
/// by `GET /apis/<group>/<version>`
pub fn api_resource_list_json(
    group_version: &str,
    kind: &str,
    plural: &str,
    namespaced: bool,
) -> String {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": group_version,
        "resources": [{
            "name": plural,
            "singularName": plural.trim_end_matches('s'),
            "namespaced": namespaced,
            "kind": kind,
            "verbs": ["get", "list", "watch"],
        }],
    })
    .to_string()
}

/// A list response for the given items
pub fn object_list_json(api_version: &str, kind: &str, items: Vec<Value>) -> String {
    json!({
        "apiVersion": api_version,
        "kind": format!("{}List", kind),
        "metadata": { "resourceVersion": "1" },
        "items": items,
    })
    .to_string()
}

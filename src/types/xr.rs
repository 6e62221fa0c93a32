// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::XR_STRIPPED_METADATA_FIELDS;
use serde_json::Value;

/// How the sample composite resource is obtained. Explicit coordinates
/// win; otherwise the cluster is searched for an instance of the
/// declared composite type, and a template is synthesized when none
/// exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrStrategy {
    Explicit {
        kind: String,
        name: String,
        namespace: Option<String>,
    },
    Discover,
}

impl XrStrategy {
    /// Pick the strategy from the optional CLI coordinates. Explicit
    /// fetching needs both a kind and a name; anything less falls back
    /// to discovery.
    pub fn from_args(
        xr_kind: Option<&str>,
        xr_name: Option<&str>,
        namespace: Option<&str>,
    ) -> Self {
        match (xr_kind, xr_name) {
            (Some(kind), Some(name)) => XrStrategy::Explicit {
                kind: kind.to_string(),
                name: name.to_string(),
                namespace: namespace.map(str::to_string),
            },
            _ => XrStrategy::Discover,
        }
    }
}

/// Remove server-assigned fields from a fetched XR so the document is
/// valid desired-state input for a local render: top-level `status`
/// plus the metadata fields in `XR_STRIPPED_METADATA_FIELDS`. Other
/// fields are left untouched.
pub fn strip_server_fields(doc: &mut Value) {
    if let Some(obj) = doc.as_object_mut() {
        obj.remove("status");
        if let Some(meta) = obj.get_mut("metadata").and_then(Value::as_object_mut) {
            for field in XR_STRIPPED_METADATA_FIELDS {
                meta.remove(*field);
            }
        }
    }
}

/// Build a skeleton XR manifest for the declared composite type. Written
/// by hand rather than through serde so the leading comment survives.
pub fn synthesize_template(api_version: &str, kind: &str) -> String {
    format!(
        "# Sample {kind} composite resource. Fill in spec fields before rendering.\n\
         apiVersion: {api_version}\n\
         kind: {kind}\n\
         metadata:\n\
         \x20 name: example\n\
         spec: {{}}\n"
    )
}

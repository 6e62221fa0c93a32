// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{annotations, gvk};
use crate::error::Result;
use kube::core::DynamicObject;
use serde_json::{json, Value};

/// Outcome of resolving one pipeline function against the cluster.
/// A function that cannot be fetched is replaced by a placeholder so
/// that the bundle still names every pipeline function exactly once;
/// `crossplane render` pulls placeholders from the registry.
#[derive(Clone, Debug)]
pub enum FunctionDoc {
    Found(DynamicObject),
    Placeholder(String),
}

impl FunctionDoc {
    pub fn name(&self) -> &str {
        match self {
            FunctionDoc::Found(obj) => obj.metadata.name.as_deref().unwrap_or_default(),
            FunctionDoc::Placeholder(name) => name,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, FunctionDoc::Placeholder(_))
    }

    /// Render this function as a YAML document (without a separator)
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = match self {
            FunctionDoc::Found(obj) => serde_yaml::to_string(obj)?,
            FunctionDoc::Placeholder(name) => serde_yaml::to_string(&placeholder_document(name))?,
        };
        Ok(yaml)
    }
}

/// Synthesize a minimal Function manifest carrying the default runtime
/// annotation
fn placeholder_document(name: &str) -> Value {
    json!({
        "apiVersion": format!("{}/{}", gvk::FUNCTION_GROUP, gvk::FUNCTION_VERSION),
        "kind": gvk::FUNCTION_KIND,
        "metadata": {
            "name": name,
            "annotations": {
                annotations::RUNTIME: annotations::RUNTIME_DEFAULT,
            },
        },
    })
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::KCL_FUNCTION_NAME;
use crate::error::{ExtractError, Result};
use kube::core::DynamicObject;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// The slice of a Composition's spec the extractor cares about. The
/// full object is persisted verbatim as a `DynamicObject`; this view is
/// only used for deriving the function list, the composite type, and
/// any inline KCL source.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSpec {
    pub composite_type_ref: CompositeTypeRef,
    #[serde(default)]
    pub pipeline: Vec<PipelineStep>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompositeTypeRef {
    pub api_version: String,
    pub kind: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStep {
    #[serde(default)]
    pub step: Option<String>,
    pub function_ref: FunctionRef,
    #[serde(default)]
    pub input: Option<Value>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FunctionRef {
    pub name: String,
}

impl CompositionSpec {
    /// Parse the spec view out of a fetched Composition object
    pub fn from_object(obj: &DynamicObject, composition_name: &str) -> Result<Self> {
        let spec = obj
            .data
            .get("spec")
            .ok_or_else(|| ExtractError::InvalidComposition {
                name: composition_name.to_string(),
                reason: "missing spec".to_string(),
            })?;

        serde_json::from_value(spec.clone()).map_err(|e| ExtractError::InvalidComposition {
            name: composition_name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Names of all functions referenced by the pipeline, deduplicated
    /// and sorted so that bundle output is reproducible
    pub fn function_names(&self) -> Vec<String> {
        self.pipeline
            .iter()
            .map(|s| s.function_ref.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Inline KCL source carried by a `function-kcl` pipeline step, if
    /// any. Looks for `input.source` (current KCLInput shape) and falls
    /// back to `input.spec.source` (older shape).
    pub fn kcl_inline_source(&self) -> Option<&str> {
        self.pipeline
            .iter()
            .filter(|s| s.function_ref.name == KCL_FUNCTION_NAME)
            .find_map(|s| {
                let input = s.input.as_ref()?;
                input
                    .get("source")
                    .or_else(|| input.get("spec").and_then(|spec| spec.get("source")))
                    .and_then(Value::as_str)
            })
    }
}

impl CompositeTypeRef {
    /// Split `apiVersion` into (group, version). A bare version means
    /// the core group, which no real XR uses but costs nothing to
    /// handle.
    pub fn group_version(&self) -> (&str, &str) {
        match self.api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", self.api_version.as_str()),
        }
    }
}

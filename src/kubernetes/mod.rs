// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API plumbing: dynamic Api handles for the Crossplane
//! package types and discovery-based resolution of composite kinds.

pub mod resources;

pub use resources::{composition_api, function_api, resolve_composite_api};

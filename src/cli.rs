// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;

/// Extract a Crossplane Composition and its pipeline Functions from a
/// cluster into a local debug bundle suitable for `crossplane render`.
#[derive(Parser, Debug, Clone)]
#[command(name = "extract-composition", version)]
pub struct Cli {
    /// Name of the Composition to extract
    pub composition_name: String,

    /// Kind of a composite resource to include as the render input
    pub xr_kind: Option<String>,

    /// Name of the composite resource to fetch
    pub xr_name: Option<String>,

    /// Namespace of the composite resource, for namespaced XRs
    pub namespace: Option<String>,
}

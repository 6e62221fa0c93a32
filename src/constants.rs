// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Crossplane API coordinates the extractor reads from
pub mod gvk {
    pub const COMPOSITION_GROUP: &str = "apiextensions.crossplane.io";
    pub const COMPOSITION_VERSION: &str = "v1";
    pub const COMPOSITION_KIND: &str = "Composition";
    pub const COMPOSITION_PLURAL: &str = "compositions";

    pub const FUNCTION_GROUP: &str = "pkg.crossplane.io";
    pub const FUNCTION_VERSION: &str = "v1";
    pub const FUNCTION_KIND: &str = "Function";
    pub const FUNCTION_PLURAL: &str = "functions";
}

/// File names inside a debug bundle
pub mod bundle {
    pub const COMPOSITION_FILE: &str = "composition.yaml";
    pub const FUNCTIONS_FILE: &str = "functions.yaml";
    pub const KCL_SOURCE_FILE: &str = "kcl-source.k";
    pub const XR_FILE: &str = "xr.yaml";
    /// Prefix for the bundle directory, followed by the composition name
    pub const DIR_PREFIX: &str = "debug-";
    /// YAML document separator appended after every function document
    pub const DOC_SEPARATOR: &str = "---\n";
}

/// Annotation telling `crossplane render` how to run a function
pub mod annotations {
    pub const RUNTIME: &str = "render.crossplane.io/runtime";
    /// Applied to placeholder Function documents so render pulls them
    /// from the registry
    pub const RUNTIME_DEFAULT: &str = "Default";
    pub const RUNTIME_DEVELOPMENT: &str = "Development";
}

/// Pipeline step function whose inline source is extracted to disk
pub const KCL_FUNCTION_NAME: &str = "function-kcl";

/// Server-assigned metadata fields stripped from a fetched XR before it
/// is reused as a desired-state render input. Top-level `status` is
/// stripped as well.
pub const XR_STRIPPED_METADATA_FIELDS: &[&str] = &[
    "resourceVersion",
    "uid",
    "generation",
    "creationTimestamp",
    "managedFields",
    "finalizers",
    "ownerReferences",
];

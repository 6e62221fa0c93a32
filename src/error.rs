// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Composition '{name}' not found: {reason}")]
    CompositionNotFound { name: String, reason: String },

    #[error("Composition '{name}' is malformed: {reason}")]
    InvalidComposition { name: String, reason: String },

    #[error("Failed to write bundle file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize document: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Failed to convert document: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

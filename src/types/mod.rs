// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views over the Crossplane documents the extractor reads.

pub mod composition;
pub mod function;
pub mod xr;

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Debug bundle directory management and file writers

use crate::constants::bundle;
use crate::error::Result;
use crate::types::function::FunctionDoc;
use kube::core::DynamicObject;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A freshly created `debug-<composition>` directory plus the record of
/// files written into it. Creating a bundle wipes any prior bundle for
/// the same composition; invocations never merge.
pub struct DebugBundle {
    dir: PathBuf,
    files: Vec<String>,
}

impl DebugBundle {
    pub fn create(output_root: &Path, composition_name: &str) -> Result<Self> {
        let dir = output_root.join(format!("{}{}", bundle::DIR_PREFIX, composition_name));
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        debug!("Created bundle directory {}", dir.display());

        Ok(DebugBundle {
            dir,
            files: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of the files written so far, in write order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Persist the fetched Composition verbatim
    pub fn write_composition(&mut self, composition: &DynamicObject) -> Result<()> {
        let yaml = serde_yaml::to_string(composition)?;
        self.write(bundle::COMPOSITION_FILE, &yaml)
    }

    /// Concatenate function documents, each followed by a `---`
    /// separator. Callers skip this entirely for empty pipelines.
    pub fn write_functions(&mut self, docs: &[FunctionDoc]) -> Result<()> {
        let mut out = String::new();
        for doc in docs {
            out.push_str(&doc.to_yaml()?);
            out.push_str(bundle::DOC_SEPARATOR);
        }
        self.write(bundle::FUNCTIONS_FILE, &out)
    }

    /// Persist inline KCL source verbatim
    pub fn write_kcl_source(&mut self, source: &str) -> Result<()> {
        self.write(bundle::KCL_SOURCE_FILE, source)
    }

    /// Persist a fetched-and-cleaned XR document
    pub fn write_xr_document(&mut self, doc: &Value) -> Result<()> {
        let yaml = serde_yaml::to_string(doc)?;
        self.write(bundle::XR_FILE, &yaml)
    }

    /// Persist a synthesized XR template (already YAML text, so its
    /// leading comment survives)
    pub fn write_xr_template(&mut self, template: &str) -> Result<()> {
        self.write(bundle::XR_FILE, template)
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        fs::write(self.dir.join(name), contents)?;
        debug!("Wrote {}/{}", self.dir.display(), name);
        self.files.push(name.to_string());
        Ok(())
    }
}

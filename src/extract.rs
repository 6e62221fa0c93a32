// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The extraction sequence: fetch the Composition, bundle its pipeline
//! functions, pull out inline KCL source, and resolve a sample XR.
//! Everything runs sequentially; a failed Composition fetch is fatal,
//! everything after it degrades with a warning instead of failing.

use crate::bundle::DebugBundle;
use crate::cli::Cli;
use crate::config::Config;
use crate::constants::{annotations, bundle as bundle_files};
use crate::error::{ExtractError, Result};
use crate::kubernetes::{composition_api, function_api, resolve_composite_api};
use crate::types::composition::{CompositeTypeRef, CompositionSpec};
use crate::types::function::FunctionDoc;
use crate::types::xr::{strip_server_fields, synthesize_template, XrStrategy};
use kube::{api::ListParams, core::DynamicObject, Client, ResourceExt};
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

pub struct Extractor {
    client: Client,
    config: Config,
}

impl Extractor {
    pub fn new(client: Client, config: Config) -> Self {
        Extractor { client, config }
    }

    #[instrument(skip(self, args), fields(composition = %args.composition_name))]
    pub async fn run(&self, args: &Cli) -> Result<Summary> {
        let name = &args.composition_name;
        let mut bundle = DebugBundle::create(&self.config.output_root, name)?;

        let composition = self.fetch_composition(name).await?;
        bundle.write_composition(&composition)?;
        info!("Fetched Composition '{}'", name);

        let spec = CompositionSpec::from_object(&composition, name)?;

        let function_names = spec.function_names();
        if function_names.is_empty() {
            info!("Composition '{}' declares no pipeline functions", name);
        } else {
            let mut docs = Vec::with_capacity(function_names.len());
            for function_name in &function_names {
                docs.push(self.fetch_function(function_name).await);
            }
            bundle.write_functions(&docs)?;
        }

        if let Some(source) = spec.kcl_inline_source() {
            bundle.write_kcl_source(source)?;
            info!("Extracted inline KCL source");
        }

        let strategy = XrStrategy::from_args(
            args.xr_kind.as_deref(),
            args.xr_name.as_deref(),
            args.namespace.as_deref(),
        );
        self.resolve_xr(&mut bundle, &spec, strategy).await?;

        Ok(Summary::from_bundle(bundle))
    }

    async fn fetch_composition(&self, name: &str) -> Result<DynamicObject> {
        composition_api(self.client.clone())
            .get(name)
            .await
            .map_err(|e| ExtractError::CompositionNotFound {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Fetch one pipeline function, degrading to a placeholder when the
    /// Function object is not installed. Rendering still works in that
    /// case because the default runtime pulls the package from its
    /// registry.
    #[instrument(skip(self))]
    async fn fetch_function(&self, name: &str) -> FunctionDoc {
        match function_api(self.client.clone()).get(name).await {
            Ok(obj) => {
                info!("Fetched Function '{}'", name);
                FunctionDoc::Found(obj)
            }
            Err(e) => {
                warn!(
                    "Function '{}' could not be fetched ({}), writing a placeholder",
                    name, e
                );
                FunctionDoc::Placeholder(name.to_string())
            }
        }
    }

    /// Resolve the sample XR by priority: explicit coordinates, then a
    /// discovered instance of the declared composite type, then a
    /// synthesized template. Fetched documents are stripped of
    /// server-assigned fields before being written.
    async fn resolve_xr(
        &self,
        bundle: &mut DebugBundle,
        spec: &CompositionSpec,
        strategy: XrStrategy,
    ) -> Result<()> {
        let type_ref = &spec.composite_type_ref;

        match strategy {
            XrStrategy::Explicit {
                kind,
                name,
                namespace,
            } => {
                let api =
                    resolve_composite_api(&self.client, type_ref, &kind, namespace.as_deref())
                        .await?;
                match api.get(&name).await {
                    Ok(obj) => {
                        self.write_cleaned_xr(bundle, &obj)?;
                        info!("Fetched XR {} '{}'", kind, name);
                    }
                    Err(e) => {
                        warn!(
                            "Could not fetch XR {} '{}' ({}); the bundle has no xr.yaml, \
                             supply your own when rendering",
                            kind, name, e
                        );
                    }
                }
            }
            XrStrategy::Discover => match self.discover_xr(type_ref).await {
                Some(obj) => {
                    let name = obj.name_any();
                    self.write_cleaned_xr(bundle, &obj)?;
                    info!("Using existing {} '{}' as the sample XR", type_ref.kind, name);
                }
                None => {
                    info!(
                        "No {} instance found, writing a template XR",
                        type_ref.kind
                    );
                    bundle.write_xr_template(&synthesize_template(
                        &type_ref.api_version,
                        &type_ref.kind,
                    ))?;
                }
            },
        }

        Ok(())
    }

    /// Find an existing instance of the composite type. Multiple
    /// instances are sorted by name and the first is taken, with a
    /// warning about the ambiguity.
    async fn discover_xr(&self, type_ref: &CompositeTypeRef) -> Option<DynamicObject> {
        let api = resolve_composite_api(&self.client, type_ref, &type_ref.kind, None)
            .await
            .ok()?;

        match api.list(&ListParams::default()).await {
            Ok(list) => {
                let mut items = list.items;
                if items.is_empty() {
                    return None;
                }
                items.sort_by_key(|o| o.name_any());
                if items.len() > 1 {
                    warn!(
                        "{} {} instances exist, using '{}' (first by name)",
                        items.len(),
                        type_ref.kind,
                        items[0].name_any()
                    );
                }
                Some(items.swap_remove(0))
            }
            Err(e) => {
                warn!(
                    "Could not list {} instances ({}), falling back to a template",
                    type_ref.kind, e
                );
                None
            }
        }
    }

    fn write_cleaned_xr(&self, bundle: &mut DebugBundle, obj: &DynamicObject) -> Result<()> {
        let mut doc = serde_json::to_value(obj)?;
        strip_server_fields(&mut doc);
        bundle.write_xr_document(&doc)
    }
}

/// What an invocation produced, for the closing stdout report
#[derive(Debug)]
pub struct Summary {
    pub bundle_dir: PathBuf,
    pub files: Vec<String>,
}

impl Summary {
    fn from_bundle(bundle: DebugBundle) -> Self {
        Summary {
            bundle_dir: bundle.dir().to_path_buf(),
            files: bundle.files().to_vec(),
        }
    }

    fn has(&self, file: &str) -> bool {
        self.files.iter().any(|f| f == file)
    }

    /// Print the bundle listing and the follow-up render instructions
    pub fn print(&self) {
        let dir = self.bundle_dir.display();

        println!("Debug bundle written to {}/", dir);
        for file in &self.files {
            let size = fs::metadata(self.bundle_dir.join(file))
                .map(|m| m.len())
                .unwrap_or(0);
            println!("  {} ({} bytes)", file, size);
        }

        let xr_arg = if self.has(bundle_files::XR_FILE) {
            format!("{}/{}", dir, bundle_files::XR_FILE)
        } else {
            "<your-xr>.yaml".to_string()
        };
        let mut render = format!(
            "crossplane render {} {}/{}",
            xr_arg,
            dir,
            bundle_files::COMPOSITION_FILE
        );
        if self.has(bundle_files::FUNCTIONS_FILE) {
            render.push_str(&format!(" {}/{}", dir, bundle_files::FUNCTIONS_FILE));
        }

        println!();
        println!("Render locally with:");
        println!("  {}", render);
        println!();
        println!("To run a pipeline function locally instead of pulling it from the registry,");
        println!(
            "set the {} annotation to {} on its entry in {},",
            annotations::RUNTIME,
            annotations::RUNTIME_DEVELOPMENT,
            bundle_files::FUNCTIONS_FILE
        );
        println!("then start the function with --insecure --address localhost:9443.");
    }
}

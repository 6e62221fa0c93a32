// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Dynamic Api construction for the resources the extractor reads

use crate::constants::gvk;
use crate::error::Result;
use crate::types::composition::CompositeTypeRef;
use kube::{
    core::{ApiResource, DynamicObject, GroupVersionKind},
    discovery::{Discovery, Scope},
    Api, Client,
};
use tracing::{debug, warn};

/// Api handle for `apiextensions.crossplane.io/v1` Compositions
pub fn composition_api(client: Client) -> Api<DynamicObject> {
    let gvk = GroupVersionKind::gvk(
        gvk::COMPOSITION_GROUP,
        gvk::COMPOSITION_VERSION,
        gvk::COMPOSITION_KIND,
    );
    let ar = ApiResource::from_gvk_with_plural(&gvk, gvk::COMPOSITION_PLURAL);
    Api::all_with(client, &ar)
}

/// Api handle for `pkg.crossplane.io/v1` Functions
pub fn function_api(client: Client) -> Api<DynamicObject> {
    let gvk = GroupVersionKind::gvk(
        gvk::FUNCTION_GROUP,
        gvk::FUNCTION_VERSION,
        gvk::FUNCTION_KIND,
    );
    let ar = ApiResource::from_gvk_with_plural(&gvk, gvk::FUNCTION_PLURAL);
    Api::all_with(client, &ar)
}

/// Resolve an Api handle for a composite kind in the group declared by
/// the Composition's `compositeTypeRef`. Goes through API discovery to
/// get the served plural and scope; when discovery cannot answer (the
/// XRD may not be installed), falls back to the conventional plural so
/// the caller can still attempt the read.
pub async fn resolve_composite_api(
    client: &Client,
    type_ref: &CompositeTypeRef,
    kind: &str,
    namespace: Option<&str>,
) -> Result<Api<DynamicObject>> {
    let (group, version) = type_ref.group_version();
    let gvk = GroupVersionKind::gvk(group, version, kind);

    match find_api_resource(client, &gvk).await {
        Ok(Some((ar, namespaced))) => {
            debug!(
                "Discovered {}/{} {} (plural '{}', namespaced={})",
                group, version, kind, ar.plural, namespaced
            );
            Ok(make_api(client, &ar, namespaced, namespace))
        }
        Ok(None) => {
            warn!(
                "Kind {} not served in group {}/{}, guessing its resource name",
                kind, group, version
            );
            let ar = ApiResource::from_gvk(&gvk);
            Ok(make_api(client, &ar, namespace.is_some(), namespace))
        }
        Err(e) => {
            warn!(
                "API discovery for group {} failed ({}), guessing the resource name for {}",
                group, e, kind
            );
            let ar = ApiResource::from_gvk(&gvk);
            Ok(make_api(client, &ar, namespace.is_some(), namespace))
        }
    }
}

fn make_api(
    client: &Client,
    ar: &ApiResource,
    namespaced: bool,
    namespace: Option<&str>,
) -> Api<DynamicObject> {
    if namespaced {
        match namespace {
            Some(ns) => Api::namespaced_with(client.clone(), ns, ar),
            None => Api::all_with(client.clone(), ar),
        }
    } else {
        Api::all_with(client.clone(), ar)
    }
}

/// Walk discovery output for the requested group looking for the kind
async fn find_api_resource(
    client: &Client,
    gvk: &GroupVersionKind,
) -> Result<Option<(ApiResource, bool)>> {
    let discovery = Discovery::new(client.clone())
        .filter(&[gvk.group.as_str()])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() != gvk.group {
            continue;
        }
        for (ar, caps) in group.recommended_resources() {
            if ar.kind == gvk.kind && ar.version == gvk.version {
                let namespaced = matches!(caps.scope, Scope::Namespaced);
                return Ok(Some((ar.clone(), namespaced)));
            }
        }
    }

    Ok(None)
}

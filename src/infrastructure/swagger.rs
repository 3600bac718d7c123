//! Endpoint Catalog
//!
//! Reads a Swagger API description and produces one endpoint per
//! (path, verb) operation that declares a classification tag. The first
//! tag names the generated interface the operation lives on; operations
//! without tags have no derivable owning interface and are skipped.

use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Value;

use crate::domain::method::{Api, ApiId, MethodRef, Route};
use crate::ports::EndpointSource;

/// The operation fields the catalog cares about; everything else in the
/// description (parameters, responses, ...) is ignored.
#[derive(Debug, Deserialize)]
struct OperationSpec {
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(rename = "operationId")]
    operation_id: Option<String>,
}

/// Return a string with its first character capitalized.
fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse endpoints out of a Swagger YAML document.
pub fn parse_endpoints(source: &str, api: &Api, id: ApiId) -> Result<Vec<MethodRef>> {
    let root: Value = serde_yaml::from_str(source)
        .with_context(|| format!("{} is not valid YAML", api.spec_path.display()))?;
    let paths = root
        .get("paths")
        .and_then(Value::as_mapping)
        .with_context(|| format!("{} has no paths section", api.spec_path.display()))?;

    let mut endpoints = Vec::new();
    for (path_key, path_item) in paths {
        let Some(path) = path_key.as_str() else {
            continue;
        };
        let Some(verbs) = path_item.as_mapping() else {
            continue;
        };
        for (verb_key, operation) in verbs {
            let Some(verb) = verb_key.as_str() else {
                continue;
            };
            // Path items also hold non-operation keys whose values are
            // not mappings (e.g. a shared `parameters` list).
            if !operation.is_mapping() {
                continue;
            }
            let op: OperationSpec = serde_yaml::from_value(operation.clone())
                .with_context(|| {
                    format!(
                        "malformed operation {} {} in {}",
                        verb,
                        path,
                        api.spec_path.display()
                    )
                })?;
            let Some(first_tag) = op.tags.as_deref().unwrap_or_default().first() else {
                // Can't derive an owning interface without a tag.
                continue;
            };
            let operation_id = op.operation_id.with_context(|| {
                format!(
                    "operation {} {} in {} has no operationId",
                    verb,
                    path,
                    api.spec_path.display()
                )
            })?;
            endpoints.push(MethodRef::endpoint(
                format!("{}.{}Api", api.package, capitalized(first_tag)),
                operation_id,
                Route {
                    verb: verb.to_string(),
                    path: path.to_string(),
                    api: id,
                },
            ));
        }
    }
    Ok(endpoints)
}

/// Endpoint source backed by Swagger YAML files on disk.
pub struct SwaggerEndpointSource;

impl EndpointSource for SwaggerEndpointSource {
    fn endpoints(&self, api: &Api, id: ApiId) -> Result<Vec<MethodRef>> {
        let text = fs::read_to_string(&api.spec_path).with_context(|| {
            format!(
                "Failed to read the {} API description {}",
                api.name,
                api.spec_path.display()
            )
        })?;
        let endpoints = parse_endpoints(&text, api, id)?;
        log::debug!(
            "{}: {} endpoints from {}",
            api.name,
            endpoints.len(),
            api.spec_path.display()
        );
        Ok(endpoints)
    }
}

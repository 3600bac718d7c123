//! Analysis Orchestration
//!
//! Wires the endpoint catalog, the synthetic linker, the call-graph
//! parser, the reachability search, and the report renderer into the
//! single batch pass the tool performs.

use anyhow::{Context, Result};

use crate::domain::calltree::CallTree;
use crate::domain::graph::CallGraph;
use crate::domain::linker::{self, EndpointIndex};
use crate::domain::method::{Api, ApiId, MethodRef};
use crate::domain::path::Path;
use crate::domain::search::search;
use crate::ports::{csv_report, EdgeSource, EndpointSource};

pub struct DialedEndpointsUsecase<'a> {
    pub endpoint_source: &'a dyn EndpointSource,
    pub edge_source: &'a dyn EdgeSource,
}

impl DialedEndpointsUsecase<'_> {
    /// Run the analysis over `apis` (position 0 is the origin surface,
    /// the rest are dial targets) and return the rendered report.
    pub fn run(&self, apis: &[Api]) -> Result<String> {
        let (origin_api, target_apis) = apis.split_first().context("no APIs configured")?;

        let origin_endpoints = self.endpoint_source.endpoints(origin_api, ApiId(0))?;
        let mut target_endpoints = Vec::new();
        for (offset, api) in target_apis.iter().enumerate() {
            target_endpoints.extend(self.endpoint_source.endpoints(api, ApiId(offset + 1))?);
        }
        log::info!(
            "catalogued {} origin and {} target endpoints",
            origin_endpoints.len(),
            target_endpoints.len()
        );

        let linker_edges: Vec<_> = origin_endpoints
            .iter()
            .chain(&target_endpoints)
            .flat_map(linker::generated_edges)
            .collect();
        let known = EndpointIndex::new(origin_endpoints.iter().chain(&target_endpoints));
        let callgraph_edges = self.edge_source.edges(&known)?;
        log::info!("parsed {} call-graph edges", callgraph_edges.len());

        let graph = CallGraph::from_edges(callgraph_edges.into_iter().chain(linker_edges));
        log::info!(
            "merged graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let mut found = Vec::new();
        for origin in &origin_endpoints {
            for target in &target_endpoints {
                if let Some(path) = search(&graph, origin, target) {
                    found.push(path);
                }
            }
        }
        log::info!("{} endpoint pairs connected", found.len());

        Ok(csv_report::render(apis, &group_by_origin(&found)))
    }
}

/// Fold the in-order path list into consecutive groups sharing an
/// originating endpoint, merging each group into one call tree.
fn group_by_origin(paths: &[Path]) -> Vec<(MethodRef, CallTree)> {
    let mut groups: Vec<(MethodRef, CallTree)> = Vec::new();
    for path in paths {
        let Some(first) = path.first_method().cloned() else {
            continue;
        };
        match groups.last_mut() {
            Some((key, tree)) if *key == first => tree.insert(path),
            _ => {
                let mut tree = CallTree::default();
                tree.insert(path);
                groups.push((first, tree));
            }
        }
    }
    groups
}

//! Generated Interface Linker
//!
//! A Swagger codegen pipeline fans each declared REST operation out into
//! several generated classes (delegate, controller, combined
//! controller). The raw call graph sees those classes as unrelated
//! nodes, so this module derives their identities per endpoint, links
//! the endpoint to them with synthetic edges, and builds the lookup
//! that normalizes any of those identities back to the canonical
//! endpoint node.

use std::collections::HashMap;

use crate::domain::graph::Edge;
use crate::domain::method::MethodRef;

/// Class-name suffixes produced by the generator, applied after
/// stripping the interface's trailing `Api`.
const GENERATED_SUFFIXES: [&str; 3] = ["ApiDelegate", "Controller", "ApiController"];

/// Synthetic edges carry this fixed order, distinguishing them from the
/// naturally numbered call-graph edges.
const GENERATED_EDGE_ORDER: u32 = 1;

/// Identities of the generated classes serving one endpoint, with the
/// same method name.
pub fn generated_methods(endpoint: &MethodRef) -> Vec<MethodRef> {
    let class_prefix = match endpoint.class_name.rfind("Api") {
        Some(at) => &endpoint.class_name[..at],
        None => endpoint.class_name.as_str(),
    };
    GENERATED_SUFFIXES
        .iter()
        .map(|suffix| MethodRef::plain(format!("{class_prefix}{suffix}"), endpoint.method.clone()))
        .collect()
}

/// Directed edges from an endpoint to each of its generated classes, so
/// the search can step from an interface-level operation into the
/// generated code the call graph actually observed.
pub fn generated_edges(endpoint: &MethodRef) -> Vec<Edge> {
    generated_methods(endpoint)
        .into_iter()
        .map(|method| Edge::new(endpoint.clone(), method, GENERATED_EDGE_ORDER))
        .collect()
}

/// Canonical-endpoint lookup supplied to the call-graph builder.
///
/// Maps every endpoint identity, and every generated-class identity
/// derived from it, to the catalogued endpoint node, so the same logical
/// operation discovered under different names unifies to one graph node.
#[derive(Debug, Default)]
pub struct EndpointIndex {
    canonical: HashMap<MethodRef, MethodRef>,
}

impl EndpointIndex {
    pub fn new<'a>(endpoints: impl IntoIterator<Item = &'a MethodRef>) -> Self {
        let mut canonical = HashMap::new();
        for endpoint in endpoints {
            canonical.insert(endpoint.clone(), endpoint.clone());
            for derived in generated_methods(endpoint) {
                canonical.insert(derived, endpoint.clone());
            }
        }
        EndpointIndex { canonical }
    }

    /// Resolve an identity to its catalogued endpoint, or hand it back
    /// unchanged when no endpoint matches.
    pub fn resolve(&self, method: MethodRef) -> MethodRef {
        match self.canonical.get(&method) {
            Some(endpoint) => endpoint.clone(),
            None => method,
        }
    }
}

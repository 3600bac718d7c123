use anyhow::Result;

use crate::domain::graph::Edge;
use crate::domain::linker::EndpointIndex;
use crate::domain::method::{Api, ApiId, MethodRef};

pub mod csv_report;

/// Supplies the catalogued endpoints of one described API.
pub trait EndpointSource {
    fn endpoints(&self, api: &Api, id: ApiId) -> Result<Vec<MethodRef>>;
}

/// Supplies raw call-graph edges, with node identities normalized
/// against the known endpoints.
pub trait EdgeSource {
    fn edges(&self, known: &EndpointIndex) -> Result<Vec<Edge>>;
}

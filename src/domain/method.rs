//! Method Identities and API Descriptors
//!
//! A call-graph node is a (class, method) pair. Endpoints are the same
//! pair carrying REST routing metadata, so an endpoint discovered in an
//! API description and the bare identity observed in the call graph
//! unify to one node.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Index of an API within the run's API list. Position 0 is the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiId(pub usize);

/// REST routing metadata attached to an endpoint node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// HTTP verb as declared in the description (lowercase in Swagger).
    pub verb: String,
    /// URL path template, e.g. `/v1/workspaces/{id}`.
    pub path: String,
    /// The API this endpoint belongs to.
    pub api: ApiId,
}

/// A node in the call graph: an owning class name plus a method name,
/// optionally carrying the REST route it implements.
///
/// Equality, hashing, and ordering use only the `(class_name, method)`
/// identity. Route metadata never participates, so a plain identity
/// parsed out of a call-graph record compares equal to the catalogued
/// endpoint for the same method.
#[derive(Debug, Clone)]
pub struct MethodRef {
    pub class_name: String,
    pub method: String,
    pub route: Option<Route>,
}

impl MethodRef {
    /// A bare identity with no routing metadata.
    pub fn plain(class_name: impl Into<String>, method: impl Into<String>) -> Self {
        MethodRef {
            class_name: class_name.into(),
            method: method.into(),
            route: None,
        }
    }

    /// An endpoint: identity plus the route it serves.
    pub fn endpoint(
        class_name: impl Into<String>,
        method: impl Into<String>,
        route: Route,
    ) -> Self {
        MethodRef {
            class_name: class_name.into(),
            method: method.into(),
            route: Some(route),
        }
    }

    pub fn is_endpoint(&self) -> bool {
        self.route.is_some()
    }
}

impl PartialEq for MethodRef {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name && self.method == other.method
    }
}

impl Eq for MethodRef {}

impl Hash for MethodRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class_name.hash(state);
        self.method.hash(state);
    }
}

impl PartialOrd for MethodRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MethodRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class_name
            .cmp(&other.class_name)
            .then_with(|| self.method.cmp(&other.method))
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.method)
    }
}

/// A described API: a display name, the location of its operation
/// catalog, and the package prefix its endpoint classes live in.
#[derive(Debug, Clone)]
pub struct Api {
    pub name: String,
    pub spec_path: PathBuf,
    pub package: String,
}

impl Api {
    pub fn new(
        name: impl Into<String>,
        spec_path: impl Into<PathBuf>,
        package: impl Into<String>,
    ) -> Self {
        Api {
            name: name.into(),
            spec_path: spec_path.into(),
            package: package.into(),
        }
    }
}

/// End-to-end pipeline tests: Swagger descriptions and a call-graph
/// record file on disk, through the usecase, down to the CSV report.
use std::fs;
use std::path::Path;

use crosscall::application::DialedEndpointsUsecase;
use crosscall::domain::method::Api;
use crosscall::infrastructure::{CallGraphFile, SwaggerEndpointSource};
use tempfile::tempdir;

/// Write a minimal one-operation Swagger description.
fn write_description(dir: &Path, file: &str, path: &str, tag: &str, operation_id: &str) {
    let description = format!(
        r#"swagger: "2.0"
paths:
  {path}:
    get:
      tags:
        - {tag}
      operationId: {operation_id}
      responses:
        "200":
          description: OK
"#
    );
    fs::write(dir.join(file), description).unwrap();
}

fn run(apis: &[Api], callgraph: &Path) -> String {
    let endpoint_source = SwaggerEndpointSource;
    let edge_source = CallGraphFile::new(callgraph);
    let usecase = DialedEndpointsUsecase {
        endpoint_source: &endpoint_source,
        edge_source: &edge_source,
    };
    usecase.run(apis).unwrap()
}

#[test]
fn test_connected_endpoints_are_reported_under_their_api_column() {
    let dir = tempdir().unwrap();
    write_description(dir.path(), "org.yaml", "/me", "org", "getMe");
    write_description(dir.path(), "target.yaml", "/status", "target", "getStatus");

    // The origin's generated controller dials the target's generated
    // controller; both normalize back to their endpoints.
    let callgraph = dir.path().join("callgraph.txt");
    fs::write(
        &callgraph,
        "M:com.example.portal.api.OrgApiController:getMe() \
         (M)com.example.remote.api.TargetApiController:getStatus()\n",
    )
    .unwrap();

    let apis = vec![
        Api::new("Org", dir.path().join("org.yaml"), "com.example.portal.api"),
        Api::new(
            "Target",
            dir.path().join("target.yaml"),
            "com.example.remote.api",
        ),
    ];
    assert_eq!(run(&apis, &callgraph), "Org,Target\n/me\n,/status\n");
}

#[test]
fn test_disconnected_graph_reports_the_header_only() {
    let dir = tempdir().unwrap();
    write_description(dir.path(), "org.yaml", "/me", "org", "getMe");
    write_description(dir.path(), "target.yaml", "/status", "target", "getStatus");

    // A call graph with activity, none of it connecting the two APIs.
    let callgraph = dir.path().join("callgraph.txt");
    fs::write(
        &callgraph,
        "M:com.example.portal.api.OrgApiController:getMe() \
         (M)com.example.portal.WorkspaceService:list()\n",
    )
    .unwrap();

    let apis = vec![
        Api::new("Org", dir.path().join("org.yaml"), "com.example.portal.api"),
        Api::new(
            "Target",
            dir.path().join("target.yaml"),
            "com.example.remote.api",
        ),
    ];
    assert_eq!(run(&apis, &callgraph), "Org,Target\n");
}

#[test]
fn test_column_index_follows_the_full_api_list() {
    let dir = tempdir().unwrap();
    write_description(dir.path(), "org.yaml", "/me", "org", "getMe");
    write_description(dir.path(), "status.yaml", "/status", "status", "getStatus");
    write_description(dir.path(), "audit.yaml", "/audit", "audit", "postAudit");

    // The origin controller dials both targets through their client
    // interfaces, in bytecode order.
    let callgraph = dir.path().join("callgraph.txt");
    fs::write(
        &callgraph,
        "M:com.example.portal.api.OrgApiController:getMe() \
         (M)com.example.status.api.StatusApi:getStatus()\n\
         M:com.example.portal.api.OrgApiController:getMe() \
         (M)com.example.audit.api.AuditApi:postAudit()\n",
    )
    .unwrap();

    let apis = vec![
        Api::new("Org", dir.path().join("org.yaml"), "com.example.portal.api"),
        Api::new(
            "Status",
            dir.path().join("status.yaml"),
            "com.example.status.api",
        ),
        Api::new(
            "Audit",
            dir.path().join("audit.yaml"),
            "com.example.audit.api",
        ),
    ];
    assert_eq!(
        run(&apis, &callgraph),
        "Org,Status,Audit\n/me\n,/status\n,,/audit\n"
    );
}

#[test]
fn test_impl_dispatch_bridges_an_abstract_service_boundary() {
    let dir = tempdir().unwrap();
    write_description(dir.path(), "org.yaml", "/me", "org", "getMe");
    write_description(dir.path(), "target.yaml", "/status", "target", "getStatus");

    // The controller calls the UserService interface; only the concrete
    // UserServiceImpl dials the remote API. The derived base→impl edge
    // completes the chain.
    let callgraph = dir.path().join("callgraph.txt");
    fs::write(
        &callgraph,
        "M:com.example.portal.api.OrgApiController:getMe() \
         (M)com.example.portal.UserService:load()\n\
         M:com.example.portal.UserServiceImpl:load() \
         (M)com.example.remote.api.TargetApi:getStatus()\n",
    )
    .unwrap();

    let apis = vec![
        Api::new("Org", dir.path().join("org.yaml"), "com.example.portal.api"),
        Api::new(
            "Target",
            dir.path().join("target.yaml"),
            "com.example.remote.api",
        ),
    ];
    assert_eq!(run(&apis, &callgraph), "Org,Target\n/me\n,/status\n");
}

#[test]
fn test_missing_description_file_is_a_fatal_error() {
    let dir = tempdir().unwrap();
    let callgraph = dir.path().join("callgraph.txt");
    fs::write(&callgraph, "").unwrap();

    let apis = vec![
        Api::new("Org", dir.path().join("nope.yaml"), "com.example.portal.api"),
        Api::new(
            "Target",
            dir.path().join("also-nope.yaml"),
            "com.example.remote.api",
        ),
    ];
    let endpoint_source = SwaggerEndpointSource;
    let edge_source = CallGraphFile::new(&callgraph);
    let usecase = DialedEndpointsUsecase {
        endpoint_source: &endpoint_source,
        edge_source: &edge_source,
    };
    assert!(usecase.run(&apis).is_err());
}

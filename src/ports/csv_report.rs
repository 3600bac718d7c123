//! Ragged CSV Report
//!
//! First line: comma-joined API names, origin first. Then, per
//! originating endpoint, the origin's path on its own line followed by
//! one line per reachable target path, indented with as many commas as
//! the target API's index so every path lands under its API's header
//! column.

use crate::domain::calltree::CallTree;
use crate::domain::method::{Api, MethodRef};

/// Render the per-origin call trees into the report text.
pub fn render(apis: &[Api], groups: &[(MethodRef, CallTree)]) -> String {
    let mut out = String::new();
    let names: Vec<&str> = apis.iter().map(|api| api.name.as_str()).collect();
    out.push_str(&names.join(","));
    out.push('\n');

    for (origin, tree) in groups {
        // Written once, ahead of the group's first discovered endpoint.
        let mut origin_emitted = false;
        tree.traverse(&mut |method, _depth, is_leaf| {
            if !is_leaf {
                return;
            }
            let Some(route) = &method.route else {
                return;
            };
            if !origin_emitted {
                if let Some(origin_route) = &origin.route {
                    out.push_str(&origin_route.path);
                    out.push('\n');
                }
                origin_emitted = true;
            }
            out.push_str(&",".repeat(route.api.0));
            out.push_str(&route.path);
            out.push('\n');
        });
    }
    out
}

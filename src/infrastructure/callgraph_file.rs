//! Call Graph Record Parser
//!
//! Consumes the text output of a bytecode call-graph extractor. Each
//! method-level record names a caller and a callee; anything else in
//! the stream (class-level records, warnings, blank lines) is skipped.
//! Besides the direct edge, two families of derived edges model control
//! flow the extractor cannot see: dynamic dispatch into `*Impl` classes
//! and entry into compiler-synthesized `lambda$...` methods.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::graph::Edge;
use crate::domain::linker::EndpointIndex;
use crate::domain::method::MethodRef;
use crate::ports::EdgeSource;

/// Suffix that marks a concrete implementation of an abstract service.
const IMPL_SUFFIX: &str = "Impl";

/// Parser for method-level call records of the form
/// `M:<caller-class>:<caller-method>(<args>) (<kind>)<callee-class>:<callee-method>(...)`.
pub struct CallGraphParser {
    record: Regex,
    lambda: Regex,
}

impl CallGraphParser {
    pub fn new() -> Result<Self> {
        Ok(CallGraphParser {
            record: Regex::new(r"^M:([^:]+):([^(]+)\([^)]*\) \(\w\)([^:]+):([^(]+)")?,
            lambda: Regex::new(r"^lambda\$([^$]+)\$")?,
        })
    }

    /// Parse a stream of records into edges.
    ///
    /// The `order` counter numbers consecutive records sharing a caller
    /// (the extractor emits call sites in bytecode order), resetting to
    /// zero whenever the raw caller identity changes. Identities are
    /// normalized through `known` so catalogued endpoints keep a single
    /// graph node regardless of the name they were observed under.
    pub fn parse_records<I>(&self, lines: I, known: &EndpointIndex) -> Vec<Edge>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut edges = Vec::new();
        let mut order: u32 = 0;
        let mut prev_caller: Option<(String, String)> = None;

        for line in lines {
            let Some(caps) = self.record.captures(line.as_ref()) else {
                continue;
            };
            let src_class = &caps[1];
            let src_method = &caps[2];
            let dst_class = &caps[3];
            let dst_method = &caps[4];

            order = match &prev_caller {
                Some((class, method)) if class == src_class && method == src_method => order + 1,
                _ => 0,
            };
            prev_caller = Some((src_class.to_string(), src_method.to_string()));

            let caller = known.resolve(MethodRef::plain(src_class, src_method));
            let callee = known.resolve(MethodRef::plain(dst_class, dst_method));
            edges.push(Edge::new(caller, callee, order));

            if let Some(base_class) = src_class.strip_suffix(IMPL_SUFFIX) {
                // Dynamic dispatch: the abstract operation on the base
                // type reaches this concrete implementation. The base
                // identity is emitted whether or not it appears
                // elsewhere in the stream.
                edges.push(Edge::new(
                    known.resolve(MethodRef::plain(base_class, src_method)),
                    known.resolve(MethodRef::plain(src_class, src_method)),
                    0,
                ));
            }

            if let Some(lambda_caps) = self.lambda.captures(src_method) {
                // The enclosing method flows into the synthesized
                // lambda body it created.
                edges.push(Edge::new(
                    known.resolve(MethodRef::plain(src_class, &lambda_caps[1])),
                    known.resolve(MethodRef::plain(src_class, src_method)),
                    0,
                ));
            }
        }
        edges
    }
}

/// Edge source backed by a call-graph record file on disk.
pub struct CallGraphFile {
    path: PathBuf,
}

impl CallGraphFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CallGraphFile { path: path.into() }
    }
}

impl EdgeSource for CallGraphFile {
    fn edges(&self, known: &EndpointIndex) -> Result<Vec<Edge>> {
        let text = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read call-graph file {}", self.path.display())
        })?;
        let parser = CallGraphParser::new()?;
        Ok(parser.parse_records(text.lines(), known))
    }
}

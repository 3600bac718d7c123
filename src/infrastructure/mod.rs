// Infrastructure adapters for crosscall: the two input file formats.

pub mod callgraph_file;
pub mod swagger;

pub use callgraph_file::{CallGraphFile, CallGraphParser};
pub use swagger::SwaggerEndpointSource;

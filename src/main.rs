// Command-line entry point for crosscall.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crosscall::application::DialedEndpointsUsecase;
use crosscall::domain::method::Api;
use crosscall::infrastructure::{CallGraphFile, SwaggerEndpointSource};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root of the platform checkout; the API descriptions are located
    /// at fixed paths beneath it
    project_root: PathBuf,

    /// Call-graph record file produced by the bytecode extractor
    callgraph: PathBuf,
}

/// The platform's API surfaces. Portal is the caller-facing origin;
/// every other API is a dial target.
fn platform_apis(root: &Path) -> Vec<Api> {
    let resources = root.join("api/src/main/resources");
    vec![
        Api::new(
            "Portal",
            resources.join("portal.yaml"),
            "org.lumen.portal.api",
        ),
        Api::new(
            "Directory",
            resources.join("directory.yaml"),
            "org.lumen.directory.api",
        ),
        Api::new(
            "Notebooks",
            resources.join("notebooks.yaml"),
            "org.lumen.notebooks.api",
        ),
        Api::new(
            "Tickets",
            resources.join("tickets.yaml"),
            "org.lumen.tickets.api",
        ),
        Api::new(
            "Mailer",
            resources.join("mailer.yaml"),
            "org.lumen.mailer.api",
        ),
        Api::new(
            "Training",
            resources.join("training.yaml"),
            "org.lumen.training.api",
        ),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let apis = platform_apis(&cli.project_root);
    let endpoint_source = SwaggerEndpointSource;
    let edge_source = CallGraphFile::new(&cli.callgraph);
    let usecase = DialedEndpointsUsecase {
        endpoint_source: &endpoint_source,
        edge_source: &edge_source,
    };

    print!("{}", usecase.run(&apis)?);
    Ok(())
}

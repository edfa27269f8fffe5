//! Skillmatch CLI.
//!
//! Operational surface for the skill graph: bulk-load the adjacency
//! datasets, register candidates and projects, introspect the graph, and
//! score candidate/project compatibility.

use anyhow::Result;
use clap::Parser;

mod commands;
mod output;

use commands::Cli;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "skillmatch=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::parse().execute().await
}

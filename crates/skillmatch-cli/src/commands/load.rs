//! Dataset bootstrap command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct LoadArgs {
    /// Skill nodes dataset (name,group,nodesize)
    #[arg(long, default_value = "data/stack_network_nodes.csv")]
    pub nodes: PathBuf,

    /// Skill adjacency dataset (source,target,value)
    #[arg(long, default_value = "data/stack_network_links.csv")]
    pub links: PathBuf,
}

pub async fn execute(args: LoadArgs, config: &Path) -> Result<()> {
    let store = super::open_store(config).await?;

    println!("{}", "Loading skill graph datasets...".bold());
    let result = skillmatch_graph::load_skill_graph(&store, &args.nodes, &args.links).await?;

    println!("\n{}", "Load complete:".green().bold());
    println!("  Skills merged: {}", result.skills);
    println!("  Links merged:  {}", result.links);
    if result.self_loops_skipped > 0 {
        println!(
            "  Self-loops skipped: {}",
            result.self_loops_skipped.to_string().yellow()
        );
    }

    Ok(())
}

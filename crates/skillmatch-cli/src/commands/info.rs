//! Graph introspection commands.

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use skillmatch_graph::{GraphClient, GraphConfig, GraphStore};

use crate::output;

#[derive(Subcommand)]
pub enum ListCommands {
    /// List all skill names
    Skills,

    /// List the node group labels present in the graph
    Groups,

    /// List the relationship types present in the graph
    Links,
}

pub async fn execute(cmd: ListCommands, config: &Path) -> Result<()> {
    let store = super::open_store(config).await?;

    match cmd {
        ListCommands::Skills => {
            output::print_name_list("Skills", &store.list_skill_names().await?)
        }
        ListCommands::Groups => {
            output::print_name_list("Node groups", &store.list_node_groups().await?)
        }
        ListCommands::Links => {
            output::print_name_list("Link types", &store.list_link_types().await?)
        }
    }

    Ok(())
}

/// Show connection target and node/link counts.
pub async fn status(config_path: &Path) -> Result<()> {
    let config = GraphConfig::load_from(config_path)?;
    let client = GraphClient::connect(&config).await?;

    println!("{}", "Skill Graph Status".bold());
    println!("{}", "─".repeat(40));
    println!("  Graph:  {}", config.uri.cyan());

    let counts = client.counts().await?;
    println!("  Nodes:  {}", counts.nodes.to_string().cyan());
    println!("  Links:  {}", counts.links.to_string().cyan());
    println!("{}", "─".repeat(40));

    Ok(())
}

//! CLI command definitions and handlers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use skillmatch_graph::{GraphClient, GraphConfig, Neo4jStore};

pub mod entity;
pub mod info;
pub mod load;
pub mod matching;

/// Skillmatch - candidate/project compatibility over a skill graph
#[derive(Parser)]
#[command(name = "skillmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "skillmatch.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bulk-load the skill-adjacency datasets
    Load(load::LoadArgs),

    /// Register a candidate with one declared skill
    AddCandidate {
        /// Candidate name (normalized to lowercase)
        name: String,
        /// Skill name (normalized to lowercase)
        skill: String,
    },

    /// Register a project with one needed skill
    AddProject {
        /// Project name (normalized to lowercase)
        name: String,
        /// Needed skill name (normalized to lowercase)
        skill: String,
    },

    /// Delete a node by name, with every link touching it
    Delete {
        /// Node name, any group
        name: String,
    },

    /// Introspect the graph
    #[command(subcommand)]
    List(info::ListCommands),

    /// Score every candidate against every project
    Match(matching::MatchArgs),

    /// Show graph status
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Load(args) => load::execute(args, &self.config).await,
            Commands::AddCandidate { name, skill } => {
                entity::add_candidate(&name, &skill, &self.config).await
            }
            Commands::AddProject { name, skill } => {
                entity::add_project(&name, &skill, &self.config).await
            }
            Commands::Delete { name } => entity::delete(&name, &self.config).await,
            Commands::List(cmd) => info::execute(cmd, &self.config).await,
            Commands::Match(args) => matching::execute(args, &self.config).await,
            Commands::Status => info::status(&self.config).await,
        }
    }
}

/// Build the injected storage handle: config, then a verified connection.
pub(crate) async fn open_store(config_path: &Path) -> Result<Neo4jStore> {
    let config = GraphConfig::load_from(config_path)?;
    let client = GraphClient::connect(&config).await?;
    Ok(Neo4jStore::new(client))
}

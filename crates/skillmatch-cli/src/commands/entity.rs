//! Candidate/project mutation commands.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use skillmatch_core::normalize_name;

pub async fn add_candidate(name: &str, skill: &str, config: &Path) -> Result<()> {
    let store = super::open_store(config).await?;
    let added = skillmatch_graph::add_candidate(&store, name, skill).await?;

    println!(
        "{} candidate {} {} skill {}",
        "Merged".green().bold(),
        added.cyan(),
        "→".dimmed(),
        normalize_name(skill).yellow()
    );
    Ok(())
}

pub async fn add_project(name: &str, skill: &str, config: &Path) -> Result<()> {
    let store = super::open_store(config).await?;
    let added = skillmatch_graph::add_project(&store, name, skill).await?;

    println!(
        "{} project {} {} needed skill {}",
        "Merged".green().bold(),
        added.cyan(),
        "→".dimmed(),
        normalize_name(skill).yellow()
    );
    Ok(())
}

pub async fn delete(name: &str, config: &Path) -> Result<()> {
    let store = super::open_store(config).await?;
    let deleted = skillmatch_graph::remove_node(&store, name).await?;

    println!(
        "{} node {} and all its links",
        "Deleted".red().bold(),
        deleted.cyan()
    );
    Ok(())
}

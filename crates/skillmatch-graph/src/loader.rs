//! Bulk bootstrap of the skill-adjacency datasets.
//!
//! The skill graph ships as two CSV files: one row per skill node
//! (`name,group,nodesize`) and one row per weighted co-occurrence link
//! (`source,target,value`). Rows are parsed here and merged through the
//! store as parameterized requests; nothing is deleted or overwritten, so
//! loading is safe to repeat.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use skillmatch_core::{normalize_name, NodeGroup, SkillMatchError};

use crate::store::{link_skills, GraphStore, DEFAULT_NODE_SIZE};

/// One row of the skill-nodes dataset. The file carries an extra cluster-id
/// column which is ignored.
#[derive(Debug, Deserialize)]
struct NodeRow {
    name: String,
    nodesize: f64,
}

/// One row of the adjacency dataset.
#[derive(Debug, Deserialize)]
struct LinkRow {
    source: String,
    target: String,
    value: f64,
}

/// Counters reported after a bulk load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadResult {
    pub skills: usize,
    pub links: usize,
    pub self_loops_skipped: usize,
}

/// Load both datasets from disk into the store.
pub async fn load_skill_graph(
    store: &impl GraphStore,
    nodes_path: &Path,
    links_path: &Path,
) -> Result<LoadResult> {
    let nodes_file = File::open(nodes_path)
        .with_context(|| format!("opening nodes dataset {}", nodes_path.display()))?;
    let links_file = File::open(links_path)
        .with_context(|| format!("opening links dataset {}", links_path.display()))?;

    let result = load_from_readers(store, nodes_file, links_file).await?;

    info!(
        skills = result.skills,
        links = result.links,
        self_loops_skipped = result.self_loops_skipped,
        "Skill graph datasets loaded"
    );
    Ok(result)
}

/// Load datasets from arbitrary readers.
///
/// The datasets are fixed and trusted, so malformed rows and empty names are
/// hard errors rather than skips. The one tolerated irregularity is a
/// self-loop row, which is counted and dropped.
pub async fn load_from_readers<R1: Read, R2: Read>(
    store: &impl GraphStore,
    nodes: R1,
    links: R2,
) -> Result<LoadResult> {
    let node_rows = parse_nodes(nodes)?;
    let link_rows = parse_links(links)?;

    let mut result = LoadResult::default();

    for row in node_rows {
        let name = normalize_name(&row.name);
        if name.is_empty() {
            return Err(SkillMatchError::EmptyName(row.name).into());
        }
        store
            .merge_node(NodeGroup::Language, &name, row.nodesize)
            .await?;
        result.skills += 1;
    }

    for row in link_rows {
        let source = normalize_name(&row.source);
        let target = normalize_name(&row.target);
        if source.is_empty() {
            return Err(SkillMatchError::EmptyName(row.source).into());
        }
        if target.is_empty() {
            return Err(SkillMatchError::EmptyName(row.target).into());
        }
        if source == target {
            result.self_loops_skipped += 1;
            continue;
        }

        // A link row may name a skill the nodes file missed; merge the
        // endpoints first so the edge always finds both.
        store
            .merge_node(NodeGroup::Language, &source, DEFAULT_NODE_SIZE)
            .await?;
        store
            .merge_node(NodeGroup::Language, &target, DEFAULT_NODE_SIZE)
            .await?;
        link_skills(store, &source, &target, row.value).await?;
        result.links += 1;
    }

    Ok(result)
}

fn parse_nodes<R: Read>(reader: R) -> Result<Vec<NodeRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record.context("malformed row in nodes dataset")?);
    }
    Ok(rows)
}

fn parse_links<R: Read>(reader: R) -> Result<Vec<LinkRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record.context("malformed row in links dataset")?);
    }
    Ok(rows)
}

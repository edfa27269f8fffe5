//! Abstract graph-storage interface and the operations built on it.
//!
//! Every backend exposes the same small capability set: merge a node, merge
//! an edge, detach-delete a node, and a handful of typed read queries. The
//! mutation operations layer on top of those capabilities and never see a
//! query language, so the scorer and the CLI stay decoupled from Neo4j.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use skillmatch_core::{
    normalize_name, score_snapshot, CompatibilityRecord, GraphSnapshot, NodeGroup, SkillMatchError,
};

/// Display size given to nodes created on demand.
pub(crate) const DEFAULT_NODE_SIZE: f64 = 1.0;

/// Capability set every graph backend provides.
///
/// Mutations are merge-based so the operations stay idempotent. All inputs
/// are expected to be normalized already; the operation functions below take
/// care of that.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Merge a node by name, creating it with the given group and display
    /// size when missing. Existing nodes are left untouched.
    async fn merge_node(&self, group: NodeGroup, name: &str, size: f64) -> Result<()>;

    /// Merge a directed `link` edge between two existing named nodes.
    /// `weight` carries the co-occurrence strength of skill-adjacency edges
    /// and is absent for has-skill/needs-skill edges. A missing endpoint
    /// makes this a no-op.
    async fn merge_edge(&self, from: &str, to: &str, weight: Option<f64>) -> Result<()>;

    /// Delete the node with the given name and every edge touching it.
    /// Deleting an unknown name is a no-op.
    async fn delete_node(&self, name: &str) -> Result<()>;

    /// Names of all skill nodes, sorted.
    async fn list_skill_names(&self) -> Result<Vec<String>>;

    /// Distinct node group labels present in the graph, sorted.
    async fn list_node_groups(&self) -> Result<Vec<String>>;

    /// Distinct relationship types present in the graph, sorted.
    async fn list_link_types(&self) -> Result<Vec<String>>;

    /// Degree-1/degree-2 skill sets for every candidate and project,
    /// sorted by name.
    async fn snapshot(&self) -> Result<GraphSnapshot>;
}

/// Idempotently register a candidate together with one declared skill.
///
/// Returns the candidate's normalized name, which is its identity in the
/// graph: re-adding the same name merges into the existing node.
pub async fn add_candidate(store: &impl GraphStore, name: &str, skill: &str) -> Result<String> {
    let name = validated(name)?;
    let skill = validated(skill)?;

    store
        .merge_node(NodeGroup::Candidate, &name, DEFAULT_NODE_SIZE)
        .await?;
    store
        .merge_node(NodeGroup::Language, &skill, DEFAULT_NODE_SIZE)
        .await?;
    store.merge_edge(&name, &skill, None).await?;

    info!(candidate = %name, skill = %skill, "Candidate skill registered");
    Ok(name)
}

/// Idempotently register a project together with one needed skill.
pub async fn add_project(store: &impl GraphStore, name: &str, needed_skill: &str) -> Result<String> {
    let name = validated(name)?;
    let skill = validated(needed_skill)?;

    store
        .merge_node(NodeGroup::Project, &name, DEFAULT_NODE_SIZE)
        .await?;
    store
        .merge_node(NodeGroup::Language, &skill, DEFAULT_NODE_SIZE)
        .await?;
    store.merge_edge(&name, &skill, None).await?;

    info!(project = %name, skill = %skill, "Project skill requirement registered");
    Ok(name)
}

/// Merge a weighted adjacency edge between two skills.
///
/// Self-loops are rejected: a skill never links to itself.
pub async fn link_skills(
    store: &impl GraphStore,
    source: &str,
    target: &str,
    weight: f64,
) -> Result<()> {
    let source = validated(source)?;
    let target = validated(target)?;
    if source == target {
        return Err(SkillMatchError::SelfLoop(source).into());
    }

    store.merge_edge(&source, &target, Some(weight)).await?;
    Ok(())
}

/// Delete a node by name, regardless of its group, with all its edges.
pub async fn remove_node(store: &impl GraphStore, name: &str) -> Result<String> {
    let name = validated(name)?;
    store.delete_node(&name).await?;

    info!(node = %name, "Node deleted");
    Ok(name)
}

/// Take a snapshot and score every eligible candidate/project pair.
///
/// Read-only: the snapshot is extracted once and the scorer runs over that
/// immutable view, so concurrent mutations are never observed mid-pass.
pub async fn score_matches(store: &impl GraphStore) -> Result<Vec<CompatibilityRecord>> {
    let snapshot = store.snapshot().await?;
    Ok(score_snapshot(&snapshot))
}

fn validated(raw: &str) -> Result<String> {
    let name = normalize_name(raw);
    if name.is_empty() {
        return Err(SkillMatchError::EmptyName(raw.to_string()).into());
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn test_add_candidate_normalizes_and_merges() {
        let store = MemoryStore::new();

        let first = add_candidate(&store, "  Alice ", "Python").await.unwrap();
        let second = add_candidate(&store, "alice", "SQL").await.unwrap();
        assert_eq!(first, "alice");
        assert_eq!(second, "alice");

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.candidates.len(), 1);
        assert_eq!(snapshot.candidates[0].name, "alice");
        assert_eq!(snapshot.candidates[0].skills1.len(), 2);
    }

    #[tokio::test]
    async fn test_add_project_is_idempotent() {
        let store = MemoryStore::new();
        add_project(&store, "webshop", "python").await.unwrap();
        add_project(&store, "webshop", "python").await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.projects.len(), 1);
        assert_eq!(snapshot.projects[0].skills1.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_names_are_rejected() {
        let store = MemoryStore::new();
        assert!(add_candidate(&store, "   ", "python").await.is_err());
        assert!(add_candidate(&store, "alice", "").await.is_err());
        assert!(remove_node(&store, " ").await.is_err());
    }

    #[tokio::test]
    async fn test_link_skills_rejects_self_loops() {
        let store = MemoryStore::new();
        store
            .merge_node(NodeGroup::Language, "python", DEFAULT_NODE_SIZE)
            .await
            .unwrap();

        // Normalization applies before the self-loop check.
        let err = link_skills(&store, "python", " Python ", 3.0)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("self-loop"));
    }

    #[tokio::test]
    async fn test_remove_node_detaches_any_group() {
        let store = MemoryStore::new();
        add_candidate(&store, "alice", "python").await.unwrap();
        add_project(&store, "webshop", "python").await.unwrap();

        remove_node(&store, "Python").await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert!(snapshot.candidates[0].skills1.is_empty());
        assert!(snapshot.projects[0].skills1.is_empty());
        assert!(store.list_skill_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_introspection_lists() {
        let store = MemoryStore::new();
        add_candidate(&store, "alice", "python").await.unwrap();
        add_project(&store, "webshop", "go").await.unwrap();

        assert_eq!(
            store.list_skill_names().await.unwrap(),
            vec!["go", "python"]
        );
        assert_eq!(
            store.list_node_groups().await.unwrap(),
            vec!["candidate", "language", "project"]
        );
        assert_eq!(store.list_link_types().await.unwrap(), vec!["link"]);
    }

    #[tokio::test]
    async fn test_score_matches_end_to_end() {
        let store = MemoryStore::new();

        add_candidate(&store, "alice", "python").await.unwrap();
        add_candidate(&store, "alice", "sql").await.unwrap();
        add_project(&store, "webshop", "python").await.unwrap();
        add_project(&store, "webshop", "go").await.unwrap();

        for skill in ["java", "bash", "c"] {
            store
                .merge_node(NodeGroup::Language, skill, DEFAULT_NODE_SIZE)
                .await
                .unwrap();
        }
        link_skills(&store, "python", "java", 5.0).await.unwrap();
        link_skills(&store, "sql", "bash", 1.0).await.unwrap();
        link_skills(&store, "go", "c", 2.0).await.unwrap();

        let records = score_matches(&store).await.unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.candidate, "alice");
        assert_eq!(record.project, "webshop");
        // skills1: {python,sql} vs {go,python} -> 1/2, kept fractional.
        assert_eq!(record.first_degree_compatibility, 0.5);
        // skills2: {java,bash} vs {java,c} -> 1/2, rounded half-to-even.
        assert_eq!(record.second_degree_compatibility, 0);
        assert!(record.match_skills1.contains("python"));
        assert!(record.match_skills2.contains("java"));
    }
}

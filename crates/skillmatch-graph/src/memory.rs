//! In-memory graph store.
//!
//! Reference implementation of [`GraphStore`]: whatever this store does, a
//! database backend must do too. Backs the test suite and offline runs.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use skillmatch_core::{EntitySkills, GraphSnapshot, NodeGroup};

use crate::store::GraphStore;

#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    group: NodeGroup,
    size: f64,
}

#[derive(Debug, Default)]
struct MemoryState {
    nodes: BTreeMap<String, NodeRecord>,
    /// Directed edges keyed by (from, to); the value is the adjacency weight
    /// for skill links and `None` for has-skill links.
    edges: BTreeMap<(String, String), Option<f64>>,
}

impl MemoryState {
    /// Skill nodes reachable over one outgoing `link` edge.
    fn linked_skills(&self, from: &str) -> BTreeSet<String> {
        self.edges
            .keys()
            .filter(|(source, target)| {
                source == from
                    && self
                        .nodes
                        .get(target)
                        .is_some_and(|record| record.group == NodeGroup::Language)
            })
            .map(|(_, target)| target.clone())
            .collect()
    }

    fn entities(&self, group: NodeGroup) -> Vec<EntitySkills> {
        self.nodes
            .iter()
            .filter(|(_, record)| record.group == group)
            .map(|(name, _)| {
                let skills1 = self.linked_skills(name);
                let mut skills2 = BTreeSet::new();
                for skill in &skills1 {
                    skills2.extend(self.linked_skills(skill));
                }
                EntitySkills {
                    name: name.clone(),
                    skills1,
                    skills2,
                }
            })
            .collect()
    }
}

/// Graph store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a node with this name exists.
    pub async fn contains_node(&self, name: &str) -> bool {
        self.state.read().await.nodes.contains_key(name)
    }

    /// Display size stored for a node, if present.
    pub async fn node_size(&self, name: &str) -> Option<f64> {
        self.state
            .read()
            .await
            .nodes
            .get(name)
            .map(|record| record.size)
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn merge_node(&self, group: NodeGroup, name: &str, size: f64) -> Result<()> {
        let mut state = self.state.write().await;
        state
            .nodes
            .entry(name.to_string())
            .or_insert(NodeRecord { group, size });
        Ok(())
    }

    async fn merge_edge(&self, from: &str, to: &str, weight: Option<f64>) -> Result<()> {
        let mut state = self.state.write().await;
        // Both endpoints must already exist, matching the MATCH+MERGE
        // statement the database backend runs.
        if !state.nodes.contains_key(from) || !state.nodes.contains_key(to) {
            return Ok(());
        }

        let entry = state
            .edges
            .entry((from.to_string(), to.to_string()))
            .or_insert(None);
        if weight.is_some() {
            *entry = weight;
        }
        Ok(())
    }

    async fn delete_node(&self, name: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.nodes.remove(name);
        state
            .edges
            .retain(|(from, to), _| from != name && to != name);
        Ok(())
    }

    async fn list_skill_names(&self) -> Result<Vec<String>> {
        let state = self.state.read().await;
        Ok(state
            .nodes
            .iter()
            .filter(|(_, record)| record.group == NodeGroup::Language)
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn list_node_groups(&self) -> Result<Vec<String>> {
        let state = self.state.read().await;
        let groups: BTreeSet<&'static str> = state
            .nodes
            .values()
            .map(|record| record.group.as_str())
            .collect();
        Ok(groups.into_iter().map(String::from).collect())
    }

    async fn list_link_types(&self) -> Result<Vec<String>> {
        let state = self.state.read().await;
        if state.edges.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec!["link".to_string()])
        }
    }

    async fn snapshot(&self) -> Result<GraphSnapshot> {
        let state = self.state.read().await;
        Ok(GraphSnapshot {
            candidates: state.entities(NodeGroup::Candidate),
            projects: state.entities(NodeGroup::Project),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{add_candidate, link_skills};

    #[tokio::test]
    async fn test_merge_node_keeps_existing() {
        let store = MemoryStore::new();
        store
            .merge_node(NodeGroup::Language, "python", 8.5)
            .await
            .unwrap();
        store
            .merge_node(NodeGroup::Language, "python", 1.0)
            .await
            .unwrap();

        assert_eq!(store.node_size("python").await, Some(8.5));
        assert_eq!(store.list_skill_names().await.unwrap(), vec!["python"]);
    }

    #[tokio::test]
    async fn test_merge_edge_requires_both_endpoints() {
        let store = MemoryStore::new();
        store
            .merge_node(NodeGroup::Language, "python", 1.0)
            .await
            .unwrap();

        store.merge_edge("ghost", "python", None).await.unwrap();
        assert!(store.list_link_types().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_node_and_touching_edges() {
        let store = MemoryStore::new();
        add_candidate(&store, "alice", "python").await.unwrap();

        store.delete_node("alice").await.unwrap();

        assert!(!store.contains_node("alice").await);
        assert!(store.contains_node("python").await);
        assert!(store.list_link_types().await.unwrap().is_empty());

        // Deleting an unknown name is a no-op.
        store.delete_node("nobody").await.unwrap();
    }

    #[tokio::test]
    async fn test_snapshot_degree2_is_deduplicated() {
        let store = MemoryStore::new();
        add_candidate(&store, "alice", "python").await.unwrap();
        add_candidate(&store, "alice", "sql").await.unwrap();
        store
            .merge_node(NodeGroup::Language, "java", 1.0)
            .await
            .unwrap();
        link_skills(&store, "python", "java", 2.0).await.unwrap();
        link_skills(&store, "sql", "java", 1.5).await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.candidates.len(), 1);

        let alice = &snapshot.candidates[0];
        assert_eq!(alice.skills1.len(), 2);
        // Both degree-1 skills reach java; it appears once.
        assert_eq!(alice.skills2.len(), 1);
        assert!(alice.skills2.contains("java"));
    }

    #[tokio::test]
    async fn test_snapshot_includes_entities_without_adjacency() {
        let store = MemoryStore::new();
        add_candidate(&store, "bob", "cobol").await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        let bob = &snapshot.candidates[0];
        assert_eq!(bob.skills1.len(), 1);
        assert!(bob.skills2.is_empty());
    }

    #[tokio::test]
    async fn test_degree2_only_reaches_skill_nodes() {
        let store = MemoryStore::new();
        add_candidate(&store, "alice", "python").await.unwrap();
        add_candidate(&store, "bob", "go").await.unwrap();
        // An edge out of python to a candidate node must not leak into the
        // degree-2 set; only language nodes count.
        store.merge_edge("python", "bob", None).await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        let alice = &snapshot.candidates[0];
        assert_eq!(alice.name, "alice");
        assert!(alice.skills2.is_empty());
    }
}

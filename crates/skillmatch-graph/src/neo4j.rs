//! Neo4j-backed graph store.
//!
//! Graph shape: node labels `language`, `candidate` and `project` (mirrored
//! in a `group` property), a single relationship type `link`, and a `value`
//! property carrying the adjacency weight. Every statement is parameterized;
//! user input never reaches the query text.

use std::collections::BTreeSet;

use anyhow::Result;
use async_trait::async_trait;
use neo4rs::Query;

use skillmatch_core::{EntitySkills, GraphSnapshot, NodeGroup};

use crate::client::GraphClient;
use crate::store::GraphStore;

/// Graph store backed by a Neo4j database.
#[derive(Clone)]
pub struct Neo4jStore {
    client: GraphClient,
}

/// Degree-1/degree-2 extraction per group. Labels cannot be parameterized,
/// so each group gets its own constant statement. The second hop is
/// optional: a declared skill with no adjacency edges still belongs to the
/// degree-1 set.
const CANDIDATE_SNAPSHOT: &str = "MATCH (c:candidate)
     OPTIONAL MATCH (c)-[:link]->(s1:language)
     OPTIONAL MATCH (s1)-[:link]->(s2:language)
     WITH c, collect(DISTINCT s1.name) AS skills1,
             collect(DISTINCT s2.name) AS skills2
     RETURN c.name AS name, skills1, skills2
     ORDER BY name";

const PROJECT_SNAPSHOT: &str = "MATCH (p:project)
     OPTIONAL MATCH (p)-[:link]->(s1:language)
     OPTIONAL MATCH (s1)-[:link]->(s2:language)
     WITH p, collect(DISTINCT s1.name) AS skills1,
             collect(DISTINCT s2.name) AS skills2
     RETURN p.name AS name, skills1, skills2
     ORDER BY name";

impl Neo4jStore {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    async fn entity_snapshot(&self, cypher: &str) -> Result<Vec<EntitySkills>> {
        let rows = self.client.fetch(Query::new(cypher.to_string())).await?;

        let mut entities = Vec::new();
        for row in rows {
            let name: String = row.get("name").unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let skills1: Vec<String> = row.get("skills1").unwrap_or_default();
            let skills2: Vec<String> = row.get("skills2").unwrap_or_default();
            entities.push(EntitySkills {
                name,
                skills1: skills1.into_iter().collect::<BTreeSet<_>>(),
                skills2: skills2.into_iter().collect::<BTreeSet<_>>(),
            });
        }
        Ok(entities)
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn merge_node(&self, group: NodeGroup, name: &str, size: f64) -> Result<()> {
        let cypher = match group {
            NodeGroup::Language => {
                "MERGE (n:language {name: $name})
                 ON CREATE SET n.group = $group, n.nodesize = $size"
            }
            NodeGroup::Candidate => {
                "MERGE (n:candidate {name: $name})
                 ON CREATE SET n.group = $group, n.nodesize = $size"
            }
            NodeGroup::Project => {
                "MERGE (n:project {name: $name})
                 ON CREATE SET n.group = $group, n.nodesize = $size"
            }
        };

        let query = Query::new(cypher.to_string())
            .param("name", name)
            .param("group", group.as_str())
            .param("size", size);

        self.client.execute(query).await
    }

    async fn merge_edge(&self, from: &str, to: &str, weight: Option<f64>) -> Result<()> {
        let query = match weight {
            Some(value) => Query::new(
                "MATCH (a {name: $from})
                 MATCH (b {name: $to})
                 MERGE (a)-[l:link]->(b)
                 SET l.value = $value"
                    .to_string(),
            )
            .param("from", from)
            .param("to", to)
            .param("value", value),
            None => Query::new(
                "MATCH (a {name: $from})
                 MATCH (b {name: $to})
                 MERGE (a)-[:link]->(b)"
                    .to_string(),
            )
            .param("from", from)
            .param("to", to),
        };

        self.client.execute(query).await
    }

    async fn delete_node(&self, name: &str) -> Result<()> {
        let query = Query::new("MATCH (n {name: $name}) DETACH DELETE n".to_string())
            .param("name", name);
        self.client.execute(query).await
    }

    async fn list_skill_names(&self) -> Result<Vec<String>> {
        let query = Query::new(
            "MATCH (n:language) RETURN n.name AS name ORDER BY name".to_string(),
        );
        let rows = self.client.fetch(query).await?;

        let mut names = Vec::new();
        for row in rows {
            let name: String = row.get("name").unwrap_or_default();
            if !name.is_empty() {
                names.push(name);
            }
        }
        Ok(names)
    }

    async fn list_node_groups(&self) -> Result<Vec<String>> {
        let query = Query::new(
            "MATCH (n)
             UNWIND labels(n) AS label
             RETURN DISTINCT label
             ORDER BY label"
                .to_string(),
        );
        let rows = self.client.fetch(query).await?;

        let mut groups = Vec::new();
        for row in rows {
            let label: String = row.get("label").unwrap_or_default();
            if !label.is_empty() {
                groups.push(label);
            }
        }
        Ok(groups)
    }

    async fn list_link_types(&self) -> Result<Vec<String>> {
        let query = Query::new(
            "MATCH ()-[l]-()
             RETURN DISTINCT type(l) AS link_type
             ORDER BY link_type"
                .to_string(),
        );
        let rows = self.client.fetch(query).await?;

        let mut types = Vec::new();
        for row in rows {
            let link_type: String = row.get("link_type").unwrap_or_default();
            if !link_type.is_empty() {
                types.push(link_type);
            }
        }
        Ok(types)
    }

    async fn snapshot(&self) -> Result<GraphSnapshot> {
        let candidates = self.entity_snapshot(CANDIDATE_SNAPSHOT).await?;
        let projects = self.entity_snapshot(PROJECT_SNAPSHOT).await?;
        Ok(GraphSnapshot {
            candidates,
            projects,
        })
    }
}

//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;

use crate::config::GraphConfig;

/// Thin wrapper around a neo4rs connection pool.
///
/// Constructed once at startup and injected into the store; the pool is
/// dropped (and its connections closed) when the last clone goes away.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j and verify the connection.
    ///
    /// neo4rs pools lazily: `Graph::connect` only builds the pool object, so
    /// a cheap `RETURN 1` runs here to force the bolt handshake and surface
    /// an unreachable database at startup instead of on the first query.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(4)
            .fetch_size(50)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .with_context(|| format!("Neo4j at {} is not responding", config.uri))?;

        Ok(Self { graph })
    }

    /// Execute a Cypher statement, discarding any results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph
            .run(query)
            .await
            .context("Neo4j statement execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and collect all result rows.
    pub async fn fetch(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Ok(Some(row)) = result.next().await {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return one scalar field from the first row.
    pub async fn fetch_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> Result<Option<T>> {
        let rows = self.fetch(query).await?;
        match rows.into_iter().next() {
            Some(row) => {
                let value: T = row
                    .get(field)
                    .map_err(|e| anyhow::anyhow!("Failed to read field '{}': {:?}", field, e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Node and link counts for status display.
    pub async fn counts(&self) -> Result<GraphCounts> {
        let nodes: i64 = self
            .fetch_scalar(
                Query::new("MATCH (n) RETURN count(n) AS total".to_string()),
                "total",
            )
            .await?
            .unwrap_or(0);
        let links: i64 = self
            .fetch_scalar(
                Query::new("MATCH ()-[l]->() RETURN count(l) AS total".to_string()),
                "total",
            )
            .await?
            .unwrap_or(0);

        Ok(GraphCounts {
            nodes: nodes as usize,
            links: links as usize,
        })
    }
}

/// Node and link counts.
#[derive(Debug, Clone, Copy)]
pub struct GraphCounts {
    pub nodes: usize,
    pub links: usize,
}

//! # Skillmatch Graph
//!
//! Graph storage for skillmatch: the abstract [`store::GraphStore`]
//! interface, a Neo4j backend, an in-memory reference backend, and the
//! bulk loader for the skill-adjacency datasets.

pub mod client;
pub mod config;
pub mod loader;
pub mod memory;
pub mod neo4j;
pub mod store;

pub use client::{GraphClient, GraphCounts};
pub use config::GraphConfig;
pub use loader::{load_skill_graph, LoadResult};
pub use memory::MemoryStore;
pub use neo4j::Neo4jStore;
pub use store::{
    add_candidate, add_project, link_skills, remove_node, score_matches, GraphStore,
};

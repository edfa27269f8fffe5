//! Graph connection configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Connection settings for the Neo4j backend.
///
/// Loaded from a TOML file when one exists, otherwise defaulted, with
/// `SKILLMATCH_GRAPH_*` environment variables taking precedence either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}
fn default_user() -> String {
    "neo4j".to_string()
}
fn default_password() -> String {
    "neo4j".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
        }
    }
}

impl GraphConfig {
    /// Load config from a path, falling back to defaults when the file is
    /// missing, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(uri) = std::env::var("SKILLMATCH_GRAPH_URI") {
            self.uri = uri;
        }
        if let Ok(user) = std::env::var("SKILLMATCH_GRAPH_USER") {
            self.user = user;
        }
        if let Ok(password) = std::env::var("SKILLMATCH_GRAPH_PASSWORD") {
            self.password = password;
        }
    }
}

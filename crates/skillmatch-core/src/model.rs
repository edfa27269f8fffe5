//! Skill graph domain models.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Group label attached to every node in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    /// A skill/language node, bulk-loaded or merged on demand.
    Language,
    Candidate,
    Project,
}

impl NodeGroup {
    /// The group string as stored on the node (`group` property / label).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeGroup::Language => "language",
            NodeGroup::Candidate => "candidate",
            NodeGroup::Project => "project",
        }
    }
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a node name before storage or lookup.
///
/// Identity in the graph is the trimmed, lowercased name; re-adding a
/// normalized name merges into the existing node instead of duplicating it.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Degree-1 and degree-2 skill sets for one candidate or project.
///
/// `skills1` holds the directly-declared skills; `skills2` holds every skill
/// reachable over one adjacency hop from a degree-1 skill, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySkills {
    pub name: String,
    pub skills1: BTreeSet<String>,
    pub skills2: BTreeSet<String>,
}

/// Read-only view of the graph consumed by the scorer.
///
/// Stores return candidates and projects sorted by name so that scoring a
/// fixed graph state always produces the same output in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub candidates: Vec<EntitySkills>,
    pub projects: Vec<EntitySkills>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Python "), "python");
        assert_eq!(normalize_name("C#"), "c#");
        assert_eq!(normalize_name("ALICE"), "alice");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_node_group_strings() {
        assert_eq!(NodeGroup::Language.as_str(), "language");
        assert_eq!(NodeGroup::Candidate.to_string(), "candidate");
        assert_eq!(NodeGroup::Project.to_string(), "project");
    }
}

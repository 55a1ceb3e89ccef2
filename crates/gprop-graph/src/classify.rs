//! Tree and forest classification.

use crate::graph::GraphStore;
use serde::{Deserialize, Serialize};

/// What counts as a forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForestPolicy {
    /// Acyclic with more than one component. A tree is never a forest.
    #[default]
    Disconnected,
    /// Any acyclic graph, so every tree is also a forest.
    Acyclic,
}

impl std::fmt::Display for ForestPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForestPolicy::Disconnected => write!(f, "disconnected"),
            ForestPolicy::Acyclic => write!(f, "acyclic"),
        }
    }
}

/// Tree and forest verdicts for one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tree: bool,
    pub forest: bool,
}

impl Classification {
    /// Derives both verdicts from a cycle count and connectivity.
    pub fn new(cycle_count: usize, connected: bool, policy: ForestPolicy) -> Self {
        let acyclic = cycle_count == 0;
        let forest = match policy {
            ForestPolicy::Disconnected => acyclic && !connected,
            ForestPolicy::Acyclic => acyclic,
        };
        Self {
            tree: acyclic && connected,
            forest,
        }
    }
}

impl<K> GraphStore<K> {
    /// Acyclic and connected.
    pub fn is_tree(&self) -> bool {
        self.classify(ForestPolicy::Disconnected).tree
    }

    /// Acyclic and disconnected.
    pub fn is_forest(&self) -> bool {
        self.is_forest_with(ForestPolicy::Disconnected)
    }

    pub fn is_forest_with(&self, policy: ForestPolicy) -> bool {
        self.classify(policy).forest
    }

    /// Computes both verdicts with a single cycle enumeration.
    pub fn classify(&self, policy: ForestPolicy) -> Classification {
        Classification::new(self.cycle_count(), self.is_connected(), policy)
    }
}

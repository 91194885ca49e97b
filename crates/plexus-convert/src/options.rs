use std::fmt::{self, Display};
use std::str::FromStr;

use plexus_core::PlexusError;
use serde::{Deserialize, Serialize};

/// Which containment arcs an encapsulation DAG keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relations {
    /// Every containment pair, i.e. the full transitive closure.
    #[default]
    #[serde(alias = "all")]
    Inclusion,
    /// Covering pairs only: the transitive reduction of [`Relations::Inclusion`].
    Immediate,
    /// For each edge, only its encapsulators of the smallest size.
    Empirical,
}

impl Relations {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relations::Inclusion => "inclusion",
            Relations::Immediate => "immediate",
            Relations::Empirical => "empirical",
        }
    }
}

impl Display for Relations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relations {
    type Err = PlexusError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "inclusion" | "all" => Ok(Relations::Inclusion),
            "immediate" => Ok(Relations::Immediate),
            "empirical" => Ok(Relations::Empirical),
            other => Err(PlexusError::invalid_relation_mode(other)),
        }
    }
}

/// How edges with identical node sets relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The edge with the lower id is encapsulated by the one with the higher id.
    #[default]
    LowerIntoHigher,
    /// Equal node sets are not related at all.
    Ignore,
}

/// Options for the encapsulation DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncapsulationOptions {
    /// Relation semantics.
    pub relations: Relations,
    /// Tie rule for equal node sets.
    pub duplicates: DuplicatePolicy,
}

impl EncapsulationOptions {
    /// Options with the given semantics and the default tie rule.
    pub fn new(relations: Relations) -> Self {
        Self {
            relations,
            ..Self::default()
        }
    }
}

/// Options for [`to_line_graph`](crate::to_line_graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineGraphOptions {
    /// Minimum number of shared nodes for two hyperedges to be linked.
    pub s: usize,
    /// Record intersection sizes as weights.
    pub weighted: bool,
    /// Divide weights by the size of the smaller hyperedge.
    pub normalize_weights: bool,
}

impl Default for LineGraphOptions {
    fn default() -> Self {
        Self {
            s: 1,
            weighted: false,
            normalize_weights: false,
        }
    }
}

//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::DEPOT;
use crate::search::Strategy;

/// Directory name under the platform config dir
pub const CONFIG_DIR: &str = "medroute";

/// File name looked up inside the config dir
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides the config directory (used by tests)
pub const CONFIG_DIR_ENV_VAR: &str = "MEDROUTE_CONFIG_DIR";

/// Mission configuration
///
/// Every section is optional. An empty `edges` list means the built-in
/// hospital layout; an empty `heuristics` map means the built-in estimate
/// tables when the layout is built in, and no estimates otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Where missions start and end
    #[serde(default = "default_depot")]
    pub depot: String,

    /// Strategy used when none is given on the command line
    #[serde(default)]
    pub strategy: Strategy,

    /// Custom layout replacing the hospital graph
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeConfig>,

    /// Per-goal estimate tables: goal -> location -> estimate
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub heuristics: BTreeMap<String, BTreeMap<String, u32>>,

    /// Location descriptions, applied over the layout's own
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub descriptions: BTreeMap<String, String>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            depot: default_depot(),
            strategy: Strategy::default(),
            edges: Vec::new(),
            heuristics: BTreeMap::new(),
            descriptions: BTreeMap::new(),
        }
    }
}

/// One `[[edges]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub distance: u32,

    /// One-way edge; connections are two-way unless set
    #[serde(default)]
    pub directed: bool,
}

fn default_depot() -> String {
    DEPOT.to_string()
}

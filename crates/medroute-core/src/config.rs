//! Mission configuration for medroute
//!
//! Looked up in order: an explicit `--config` path, then
//! `$MEDROUTE_CONFIG_DIR/config.toml`, then `<config dir>/medroute/config.toml`.
//! With none of those present the built-in defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, RouteError};
use crate::graph::heuristic::{HeuristicSet, HeuristicTable};
use crate::graph::weighted::WeightedGraph;
use crate::bail_config;

pub use types::{EdgeConfig, MissionConfig, CONFIG_DIR, CONFIG_DIR_ENV_VAR, CONFIG_FILE};

impl MissionConfig {
    /// Path of the implicit config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RouteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RouteError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config: MissionConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), edges = config.edges.len(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. The implicit file is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(&path),
            Ok(path) => {
                debug!(path = %path.display(), "config_absent_using_defaults");
                Ok(Self::default())
            }
            Err(e) => {
                debug!(error = %e, "config_dir_unavailable_using_defaults");
                Ok(Self::default())
            }
        }
    }

    /// Whether the built-in hospital layout is in use
    pub fn uses_builtin_layout(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build the graph described by this configuration
    pub fn build_graph(&self) -> Result<WeightedGraph> {
        let mut graph = if self.uses_builtin_layout() {
            WeightedGraph::hospital()
        } else {
            let mut graph = WeightedGraph::new();
            for edge in &self.edges {
                if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
                    bail_config!("edge endpoints must be named: {:?} -> {:?}", edge.from, edge.to);
                }
                if edge.directed {
                    graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.distance);
                } else {
                    graph.connect(edge.from.as_str(), edge.to.as_str(), edge.distance);
                }
            }
            graph
        };

        for (location, text) in &self.descriptions {
            graph.set_description(location.as_str(), text.as_str());
        }

        Ok(graph)
    }

    /// Build the estimate tables described by this configuration
    pub fn build_heuristics(&self) -> HeuristicSet {
        if self.heuristics.is_empty() {
            return if self.uses_builtin_layout() {
                HeuristicSet::hospital()
            } else {
                HeuristicSet::new()
            };
        }

        let mut set = HeuristicSet::new();
        for (goal, estimates) in &self.heuristics {
            let table: HeuristicTable = estimates
                .iter()
                .map(|(location, estimate)| (location.as_str(), *estimate))
                .collect();
            set.insert(goal.as_str(), table);
        }
        set
    }

    /// Check the configuration against the graph it builds.
    ///
    /// The depot must be a location. Heuristic goals and described
    /// locations that are not in the graph only produce warnings.
    pub fn validate(&self) -> Result<()> {
        if self.depot.trim().is_empty() {
            bail_config!("depot must be named");
        }

        let graph = self.build_graph()?;
        if !graph.contains(&self.depot) {
            bail_config!("depot {} is not a location in the graph", self.depot);
        }

        for goal in self.heuristics.keys() {
            if !graph.contains(goal) {
                warn!(goal = %goal, "heuristic_goal_not_in_graph");
            }
        }
        for location in self.descriptions.keys() {
            if !graph.contains(location) {
                warn!(location = %location, "description_for_unknown_location");
            }
        }

        Ok(())
    }
}

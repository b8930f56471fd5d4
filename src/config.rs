//! Graph configuration
//!
//! Selects the storage strategy and orientation of a graph. A configuration
//! can be built in code or read from JSON:
//!
//! ```json
//! { "strategy": "adjacency_matrix", "directed": true }
//! ```
//!
//! Missing fields fall back to [`GraphConfig::default`].

use crate::graph::{Graph, Strategy, UnknownStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Graph configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Storage strategy
    pub strategy: Strategy,
    /// Whether edge direction is meaningful
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AdjacencyMap,
            directed: false,
        }
    }
}

impl GraphConfig {
    pub fn new(strategy: Strategy, directed: bool) -> Self {
        Self { strategy, directed }
    }

    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!("Loaded graph config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Replace the strategy by name, e.g. `"matrix"` or `"edge_list"`
    pub fn with_strategy_name(mut self, name: &str) -> ConfigResult<Self> {
        self.strategy = name.parse()?;
        Ok(self)
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Build an empty graph as configured
    pub fn build<T, W>(&self) -> Box<dyn Graph<T, W>>
    where
        T: 'static,
        W: Clone + 'static,
    {
        tracing::debug!(
            "Building {} graph ({})",
            self.strategy,
            if self.directed { "directed" } else { "undirected" }
        );
        self.strategy.build(self.directed)
    }
}

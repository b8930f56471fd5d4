//! Graph ADT
//!
//! The graph abstract data type with four interchangeable storage strategies.
//! A client picks a strategy and an orientation once, then works only through
//! the [`Graph`] trait.
//!
//! # Storage strategies
//!
//! - [`EdgeListGraph`]: flat edge list, linear scans, keeps parallel edges
//! - [`AdjacencyListGraph`]: per-vertex neighbor lists
//! - [`AdjacencyMapGraph`]: per-vertex neighbor maps, constant-time lookups
//! - [`AdjacencyMatrixGraph`]: square matrix, suited to dense graphs
//!
//! Every vertex carries a surrogate identity, so two vertices with equal
//! payloads are always different vertices, whatever the storage.
//!
//! ## Example Usage
//!
//! ```rust
//! use graph_adt::{AdjacencyMapGraph, Direction, Graph};
//!
//! // Create a directed graph
//! let mut graph: AdjacencyMapGraph<&str, u32> = AdjacencyMapGraph::directed();
//!
//! // Create vertices
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//!
//! // Create edges
//! graph.insert_edge(&a, &b, Some(3)).unwrap();
//! graph.insert_edge(&a, &c, None).unwrap();
//!
//! assert_eq!(graph.degree(&a, Direction::Outgoing).unwrap(), 2);
//! assert_eq!(graph.degree(&b, Direction::Incoming).unwrap(), 1);
//! assert!(graph.get_edge(&b, &a).unwrap().is_none());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyListGraph, AdjacencyMapGraph, AdjacencyMatrixGraph, Direction, Edge, EdgeId,
    EdgeListGraph, Graph, GraphError, GraphResult, GraphStatistics, Incident, Strategy,
    UnknownStrategy, Vertex, VertexId,
};

pub use config::{ConfigError, ConfigResult, GraphConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}

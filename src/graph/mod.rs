//! Graph abstract data type
//!
//! This module implements:
//! - Vertices with surrogate identities over shared payloads
//! - Optionally weighted edges, directed or undirected per graph
//! - The [`Graph`] contract shared by every storage strategy
//! - Four storages: edge list, adjacency list, adjacency map, adjacency matrix

pub mod adt;
pub mod edge;
pub mod storage;
pub mod types;
pub mod vertex;

// Re-export main types
pub use adt::{Graph, GraphError, GraphResult, GraphStatistics, Incident};
pub use edge::Edge;
pub use storage::{
    AdjacencyListGraph, AdjacencyMapGraph, AdjacencyMatrixGraph, EdgeListGraph, Strategy,
    UnknownStrategy,
};
pub use types::{Direction, EdgeId, VertexId};
pub use vertex::Vertex;

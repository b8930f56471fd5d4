//! The graph abstract data type
//!
//! A graph is either directed or undirected, fixed when it is built. A mixed
//! graph can be modelled as a directed one by storing {u,v} as the pair of
//! directed edges (u,v) and (v,u).
//!
//! Every storage strategy in [`crate::graph::storage`] implements [`Graph`],
//! so clients can pick a representation for its trade-offs and then drive it
//! only through this trait.

use super::edge::Edge;
use super::storage::Strategy;
use super::types::{Direction, EdgeId, VertexId};
use super::vertex::Vertex;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Invalid edge: origin vertex {0} does not exist")]
    MissingOrigin(VertexId),

    #[error("Invalid edge: destination vertex {0} does not exist")]
    MissingDestination(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Lazy sequence of edges borrowed from a graph
pub type Incident<'a, T, W> = Box<dyn Iterator<Item = Edge<T, W>> + 'a>;

/// Snapshot of a graph's size, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub strategy: Strategy,
    pub directed: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// The shared contract of all storage strategies
///
/// Vertex absence is always an error ([`GraphError::VertexNotFound`]).
/// Edge absence between present vertices is never an error: lookups return
/// `None` or an empty vector.
pub trait Graph<T, W> {
    /// Storage strategy backing this graph
    fn strategy(&self) -> Strategy;

    /// True when edge direction is meaningful
    fn is_directed(&self) -> bool;

    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// All vertices
    fn vertices(&self) -> Vec<Vertex<T>>;

    /// Number of logical edges; an undirected edge counts once
    fn edge_count(&self) -> usize;

    /// All logical edges; an undirected edge appears once
    fn edges(&self) -> Vec<Edge<T, W>>;

    /// Check if `vertex` is part of this graph
    fn contains_vertex(&self, vertex: &Vertex<T>) -> bool;

    /// The edge from `u` to `v`, if one exists
    ///
    /// For undirected graphs `get_edge(u, v)` and `get_edge(v, u)` find the
    /// same edge, returned with the first argument as its origin.
    fn get_edge(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Option<Edge<T, W>>>;

    /// Every edge from `u` to `v`
    ///
    /// Only storages that keep parallel edges can return more than one.
    fn get_edges(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Vec<Edge<T, W>>> {
        Ok(self.get_edge(u, v)?.into_iter().collect())
    }

    /// Number of edges incident to `vertex`
    ///
    /// Directed graphs count outgoing or incoming edges as selected;
    /// undirected graphs ignore `direction`.
    fn degree(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<usize>;

    /// Edges incident to `vertex`, with the same direction rule as [`Graph::degree`]
    ///
    /// Undirected edges are returned with `vertex` as their origin.
    fn incident_edges(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<Incident<'_, T, W>>;

    /// Store `vertex`; returns false if it is already present
    fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool;

    /// Create and store an edge from `u` to `v`
    ///
    /// Undirected graphs store the edge in both directions.
    fn insert_edge(&mut self, u: &Vertex<T>, v: &Vertex<T>, weight: Option<W>) -> GraphResult<Edge<T, W>>;

    /// Remove `vertex` and all its incident edges
    ///
    /// Returns the number of logical edges removed with it.
    fn remove_vertex(&mut self, vertex: &Vertex<T>) -> GraphResult<usize>;

    /// Remove one logical edge; undirected graphs drop both directions
    fn remove_edge(&mut self, edge: &Edge<T, W>) -> GraphResult<()>;

    /// Wrap `value` in a new vertex, store it and return the handle
    fn add_vertex(&mut self, value: T) -> Vertex<T> {
        let vertex = Vertex::new(value);
        self.insert_vertex(vertex.clone());
        vertex
    }

    /// Store several vertices; returns how many were new
    fn insert_vertices(&mut self, vertices: &[Vertex<T>]) -> usize {
        vertices
            .iter()
            .filter(|v| self.insert_vertex((*v).clone()))
            .count()
    }

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            strategy: self.strategy(),
            directed: self.is_directed(),
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
        }
    }
}

//! Edge implementation for the graph ADT
//!
//! An edge is immutable once created: an identity, two endpoint handles and
//! an optional weight. Direction is a property of the graph that stores the
//! edge, so an undirected graph may hand out either orientation of the same
//! logical edge.

use super::types::{EdgeId, VertexId};
use super::vertex::Vertex;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An edge between two vertices
pub struct Edge<T, W> {
    /// Identity of the logical edge
    id: EdgeId,

    /// Origin vertex (edge goes FROM this vertex)
    origin: Vertex<T>,

    /// Destination vertex (edge goes TO this vertex)
    destination: Vertex<T>,

    /// Optional weight payload
    weight: Option<W>,
}

impl<T, W> Edge<T, W> {
    /// Create a new edge
    pub fn new(id: EdgeId, origin: Vertex<T>, destination: Vertex<T>, weight: Option<W>) -> Self {
        Edge {
            id,
            origin,
            destination,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Origin and destination, in that order
    pub fn endpoints(&self) -> (&Vertex<T>, &Vertex<T>) {
        (&self.origin, &self.destination)
    }

    pub fn origin(&self) -> &Vertex<T> {
        &self.origin
    }

    pub fn destination(&self) -> &Vertex<T> {
        &self.destination
    }

    /// The endpoint that is not `vertex`
    ///
    /// For a self-loop both endpoints are `vertex` and it is returned.
    pub fn opposite(&self, vertex: &Vertex<T>) -> &Vertex<T> {
        if *vertex == self.origin {
            &self.destination
        } else {
            &self.origin
        }
    }

    pub fn weight(&self) -> Option<&W> {
        self.weight.as_ref()
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.origin.id() == a && self.destination.id() == b)
            || (self.origin.id() == b && self.destination.id() == a)
    }

    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: VertexId) -> bool {
        self.origin.id() == vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: VertexId) -> bool {
        self.destination.id() == vertex
    }

    /// Check if either endpoint is `vertex`
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.starts_from(vertex) || self.ends_at(vertex)
    }

    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl<T, W: Clone> Edge<T, W> {
    /// The mirrored record of this edge, sharing its identity
    pub fn reversed(&self) -> Self {
        Edge {
            id: self.id,
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<T, W: Clone> Clone for Edge<T, W> {
    fn clone(&self) -> Self {
        Edge {
            id: self.id,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<T, W> PartialEq for Edge<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T, W> Eq for Edge<T, W> {}

impl<T, W> Hash for Edge<T, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for Edge<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id.as_u64())
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("weight", &self.weight)
            .finish()
    }
}

impl<T: fmt::Display, W: fmt::Display> fmt::Display for Edge<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.weight {
            Some(weight) => write!(f, "Edge({}, {}, {})", self.origin, self.destination, weight),
            None => write!(f, "Edge({}, {})", self.origin, self.destination),
        }
    }
}

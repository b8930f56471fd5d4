//! Adjacency map storage
//!
//! Every vertex maps each neighbor to the edge that joins them, so edge
//! lookup, insertion and removal are constant time on average.
//!
//! A directed graph keeps an outgoing and an incoming map per vertex. An
//! undirected graph keeps a single adjacency map and files each edge under
//! both endpoints.

use super::VertexMap;
use crate::graph::adt::{Graph, GraphError, GraphResult, Incident};
use crate::graph::edge::Edge;
use crate::graph::storage::Strategy;
use crate::graph::types::{Direction, EdgeId, VertexId};
use crate::graph::vertex::Vertex;
use tracing::{debug, trace};

/// Neighbor -> joining edge
type Secondary<T, W> = VertexMap<Edge<T, W>>;

#[derive(Debug)]
struct Adjacent<T, W> {
    vertex: Vertex<T>,
    edges: Secondary<T, W>,
}

#[derive(Debug)]
enum Index<T, W> {
    Directed {
        outgoing: VertexMap<Adjacent<T, W>>,
        incoming: VertexMap<Secondary<T, W>>,
    },
    Undirected {
        adjacent: VertexMap<Adjacent<T, W>>,
    },
}

/// Graph stored as nested vertex-keyed maps
#[derive(Debug)]
pub struct AdjacencyMapGraph<T, W> {
    index: Index<T, W>,
}

impl<T, W: Clone> AdjacencyMapGraph<T, W> {
    pub fn new(directed: bool) -> Self {
        let index = if directed {
            Index::Directed {
                outgoing: VertexMap::default(),
                incoming: VertexMap::default(),
            }
        } else {
            Index::Undirected {
                adjacent: VertexMap::default(),
            }
        };
        AdjacencyMapGraph {
            index,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// The map that owns the vertex handles
    fn primary(&self) -> &VertexMap<Adjacent<T, W>> {
        match &self.index {
            Index::Directed { outgoing, .. } => outgoing,
            Index::Undirected { adjacent } => adjacent,
        }
    }

    fn secondary(&self, vertex: VertexId, direction: Direction) -> GraphResult<&Secondary<T, W>> {
        let found = match (&self.index, direction) {
            (Index::Directed { incoming, .. }, Direction::Incoming) => incoming.get(&vertex),
            _ => self.primary().get(&vertex).map(|a| &a.edges),
        };
        found.ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Each undirected edge is filed under both endpoints; keep the copy
    /// filed under its origin
    fn is_primary_copy(owner: VertexId, edge: &Edge<T, W>) -> bool {
        edge.starts_from(owner)
    }

    /// An undirected edge as seen from `owner`: `owner` is its origin
    fn oriented(&self, owner: VertexId, edge: &Edge<T, W>) -> Edge<T, W> {
        if self.is_directed() || Self::is_primary_copy(owner, edge) {
            edge.clone()
        } else {
            edge.reversed()
        }
    }
}

impl<T, W: Clone> Default for AdjacencyMapGraph<T, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T, W: Clone> Graph<T, W> for AdjacencyMapGraph<T, W> {
    fn strategy(&self) -> Strategy {
        Strategy::AdjacencyMap
    }

    fn is_directed(&self) -> bool {
        matches!(self.index, Index::Directed { .. })
    }

    fn vertex_count(&self) -> usize {
        self.primary().len()
    }

    fn vertices(&self) -> Vec<Vertex<T>> {
        self.primary().values().map(|a| a.vertex.clone()).collect()
    }

    fn edge_count(&self) -> usize {
        match &self.index {
            Index::Directed { outgoing, .. } => outgoing.values().map(|a| a.edges.len()).sum(),
            Index::Undirected { adjacent } => adjacent
                .iter()
                .map(|(owner, a)| {
                    a.edges
                        .values()
                        .filter(|e| Self::is_primary_copy(*owner, e))
                        .count()
                })
                .sum(),
        }
    }

    fn edges(&self) -> Vec<Edge<T, W>> {
        let directed = self.is_directed();
        self.primary()
            .iter()
            .flat_map(|(owner, a)| {
                a.edges
                    .values()
                    .filter(move |e| directed || Self::is_primary_copy(*owner, e))
            })
            .cloned()
            .collect()
    }

    fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.primary().contains_key(&vertex.id())
    }

    fn get_edge(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Option<Edge<T, W>>> {
        let outgoing = self.secondary(u.id(), Direction::Outgoing)?;
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v.id()));
        }
        Ok(outgoing.get(&v.id()).map(|e| self.oriented(u.id(), e)))
    }

    fn degree(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<usize> {
        Ok(self.secondary(vertex.id(), direction)?.len())
    }

    fn incident_edges(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<Incident<'_, T, W>> {
        let owner = vertex.id();
        let edges = self.secondary(owner, direction)?;
        Ok(Box::new(edges.values().map(move |e| self.oriented(owner, e))))
    }

    fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool {
        if self.contains_vertex(&vertex) {
            return false;
        }
        debug!("Inserted vertex {} into adjacency map", vertex.id());
        let id = vertex.id();
        let entry = Adjacent {
            vertex,
            edges: Secondary::default(),
        };
        match &mut self.index {
            Index::Directed { outgoing, incoming } => {
                outgoing.insert(id, entry);
                incoming.insert(id, Secondary::default());
            }
            Index::Undirected { adjacent } => {
                adjacent.insert(id, entry);
            }
        }
        true
    }

    fn insert_edge(&mut self, u: &Vertex<T>, v: &Vertex<T>, weight: Option<W>) -> GraphResult<Edge<T, W>> {
        if !self.contains_vertex(u) {
            return Err(GraphError::MissingOrigin(u.id()));
        }
        if !self.contains_vertex(v) {
            return Err(GraphError::MissingDestination(v.id()));
        }

        let id = EdgeId::next();
        let edge = Edge::new(id, u.clone(), v.clone(), weight);

        match &mut self.index {
            Index::Directed { outgoing, incoming } => {
                if let Some(a) = outgoing.get_mut(&u.id()) {
                    a.edges.insert(v.id(), edge.clone());
                }
                if let Some(map) = incoming.get_mut(&v.id()) {
                    map.insert(u.id(), edge.clone());
                }
            }
            Index::Undirected { adjacent } => {
                if let Some(a) = adjacent.get_mut(&u.id()) {
                    a.edges.insert(v.id(), edge.clone());
                }
                if let Some(a) = adjacent.get_mut(&v.id()) {
                    a.edges.insert(u.id(), edge.clone());
                }
            }
        }

        debug!("Inserted edge {} from {} to {}", id, u.id(), v.id());
        Ok(edge)
    }

    fn remove_vertex(&mut self, vertex: &Vertex<T>) -> GraphResult<usize> {
        let id = vertex.id();
        let removed = match &mut self.index {
            Index::Directed { outgoing, incoming } => {
                let own = outgoing.shift_remove(&id).ok_or(GraphError::VertexNotFound(id))?;
                let into = incoming.shift_remove(&id).unwrap_or_default();

                for source in into.keys().filter(|s| **s != id) {
                    if let Some(a) = outgoing.get_mut(source) {
                        a.edges.swap_remove(&id);
                    }
                }
                for target in own.edges.keys().filter(|t| **t != id) {
                    if let Some(map) = incoming.get_mut(target) {
                        map.swap_remove(&id);
                    }
                }

                // A self-loop sits in both of the vertex's own maps
                let loops = usize::from(own.edges.contains_key(&id));
                own.edges.len() + into.len() - loops
            }
            Index::Undirected { adjacent } => {
                let own = adjacent.shift_remove(&id).ok_or(GraphError::VertexNotFound(id))?;
                for neighbor in own.edges.keys().filter(|n| **n != id) {
                    if let Some(a) = adjacent.get_mut(neighbor) {
                        a.edges.swap_remove(&id);
                    }
                }
                own.edges.len()
            }
        };

        trace!("Dropped {} edges incident to {}", removed, id);
        debug!("Removed vertex {} from adjacency map", id);
        Ok(removed)
    }

    fn remove_edge(&mut self, edge: &Edge<T, W>) -> GraphResult<()> {
        let (u, v) = (edge.origin().id(), edge.destination().id());
        let stored = self
            .primary()
            .get(&u)
            .and_then(|a| a.edges.get(&v))
            .map(|e| e.id());
        if stored != Some(edge.id()) {
            return Err(GraphError::EdgeNotFound(edge.id()));
        }

        match &mut self.index {
            Index::Directed { outgoing, incoming } => {
                if let Some(a) = outgoing.get_mut(&u) {
                    a.edges.swap_remove(&v);
                }
                if let Some(map) = incoming.get_mut(&v) {
                    map.swap_remove(&u);
                }
            }
            Index::Undirected { adjacent } => {
                if let Some(a) = adjacent.get_mut(&u) {
                    a.edges.swap_remove(&v);
                }
                if let Some(a) = adjacent.get_mut(&v) {
                    a.edges.swap_remove(&u);
                }
            }
        }
        debug!("Removed edge {}", edge.id());
        Ok(())
    }
}

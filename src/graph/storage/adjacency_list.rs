//! Adjacency list storage
//!
//! Each vertex owns a list of the edges leaving it. Neighbor records carry
//! the full edge, weight included. Undirected edges appear in both endpoint
//! lists as mirrored records with one shared [`EdgeId`].
//!
//! Only outgoing lists are kept, so incoming queries on a directed graph
//! scan every list.

use super::VertexMap;
use crate::graph::adt::{Graph, GraphError, GraphResult, Incident};
use crate::graph::edge::Edge;
use crate::graph::storage::Strategy;
use crate::graph::types::{Direction, EdgeId};
use crate::graph::vertex::Vertex;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

#[derive(Debug)]
struct Neighbors<T, W> {
    vertex: Vertex<T>,
    edges: Vec<Edge<T, W>>,
}

impl<T, W> Neighbors<T, W> {
    fn position_of(&self, destination: &Vertex<T>) -> Option<usize> {
        self.edges.iter().position(|e| e.ends_at(destination.id()))
    }

    /// Store `edge`, replacing any record with the same destination
    fn upsert(&mut self, edge: Edge<T, W>) {
        match self.position_of(edge.destination()) {
            Some(position) => self.edges[position] = edge,
            None => self.edges.push(edge),
        }
    }
}

/// Graph stored as per-vertex neighbor lists
#[derive(Debug)]
pub struct AdjacencyListGraph<T, W> {
    lists: VertexMap<Neighbors<T, W>>,
    directed: bool,
}

impl<T, W: Clone> AdjacencyListGraph<T, W> {
    pub fn new(directed: bool) -> Self {
        AdjacencyListGraph {
            lists: VertexMap::default(),
            directed,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn neighbors(&self, vertex: &Vertex<T>) -> GraphResult<&Neighbors<T, W>> {
        self.lists
            .get(&vertex.id())
            .ok_or(GraphError::VertexNotFound(vertex.id()))
    }

    /// Edges from every list that end at `vertex`
    fn incoming<'a>(&'a self, vertex: &Vertex<T>) -> impl Iterator<Item = &'a Edge<T, W>> + 'a {
        let id = vertex.id();
        self.lists
            .values()
            .flat_map(|n| n.edges.iter())
            .filter(move |e| e.ends_at(id))
    }
}

impl<T, W: Clone> Default for AdjacencyListGraph<T, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T, W: Clone> Graph<T, W> for AdjacencyListGraph<T, W> {
    fn strategy(&self) -> Strategy {
        Strategy::AdjacencyList
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn vertices(&self) -> Vec<Vertex<T>> {
        self.lists.values().map(|n| n.vertex.clone()).collect()
    }

    fn edge_count(&self) -> usize {
        let total: usize = self.lists.values().map(|n| n.edges.len()).sum();
        if self.directed {
            return total;
        }
        // Every undirected edge is stored twice, except self-loops
        let loops = self
            .lists
            .values()
            .flat_map(|n| n.edges.iter())
            .filter(|e| e.is_self_loop())
            .count();
        (total + loops) / 2
    }

    fn edges(&self) -> Vec<Edge<T, W>> {
        let mut seen: FxHashSet<EdgeId> = FxHashSet::default();
        self.lists
            .values()
            .flat_map(|n| n.edges.iter())
            .filter(|e| self.directed || seen.insert(e.id()))
            .cloned()
            .collect()
    }

    fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.lists.contains_key(&vertex.id())
    }

    fn get_edge(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Option<Edge<T, W>>> {
        let list = self.neighbors(u)?;
        self.neighbors(v)?;
        Ok(list.position_of(v).map(|position| list.edges[position].clone()))
    }

    fn degree(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<usize> {
        let list = self.neighbors(vertex)?;
        Ok(match direction.effective(self.directed) {
            Direction::Outgoing => list.edges.len(),
            Direction::Incoming => self.incoming(vertex).count(),
        })
    }

    fn incident_edges(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<Incident<'_, T, W>> {
        let list = self.neighbors(vertex)?;
        let edges: Incident<'_, T, W> = match direction.effective(self.directed) {
            Direction::Outgoing => Box::new(list.edges.iter().cloned()),
            Direction::Incoming => Box::new(self.incoming(vertex).cloned()),
        };
        Ok(edges)
    }

    fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool {
        if self.contains_vertex(&vertex) {
            return false;
        }
        debug!("Inserted vertex {} into adjacency list", vertex.id());
        self.lists.insert(
            vertex.id(),
            Neighbors {
                vertex,
                edges: Vec::new(),
            },
        );
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

        if let Some(list) = self.lists.get_mut(&u.id()) {
            list.upsert(edge.clone());
        }
        if !self.directed && u != v {
            if let Some(list) = self.lists.get_mut(&v.id()) {
                list.upsert(edge.reversed());
            }
        }

        debug!("Inserted edge {} from {} to {}", id, u.id(), v.id());
        Ok(edge)
    }

    fn remove_vertex(&mut self, vertex: &Vertex<T>) -> GraphResult<usize> {
        let id = vertex.id();
        let own = self
            .lists
            .shift_remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        let mut incoming = 0;
        for list in self.lists.values_mut() {
            let before = list.edges.len();
            list.edges.retain(|e| !e.ends_at(id));
            incoming += before - list.edges.len();
        }

        // Undirected mirrors were already counted in the vertex's own list
        let removed = if self.directed {
            own.edges.len() + incoming
        } else {
            own.edges.len()
        };
        trace!("Dropped {} edges incident to {}", removed, id);
        debug!("Removed vertex {} from adjacency list", id);
        Ok(removed)
    }

    fn remove_edge(&mut self, edge: &Edge<T, W>) -> GraphResult<()> {
        let (u, v) = edge.endpoints();
        let list = self
            .lists
            .get_mut(&u.id())
            .ok_or(GraphError::EdgeNotFound(edge.id()))?;
        let position = list
            .edges
            .iter()
            .position(|e| e.id() == edge.id() && e.ends_at(v.id()))
            .ok_or(GraphError::EdgeNotFound(edge.id()))?;
        list.edges.remove(position);

        if !self.directed && u != v {
            if let Some(list) = self.lists.get_mut(&v.id()) {
                list.edges.retain(|e| e.id() != edge.id());
            }
        }
        debug!("Removed edge {}", edge.id());
        Ok(())
    }
}

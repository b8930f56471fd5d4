//! Edge list storage
//!
//! A flat sequence of vertices and a flat sequence of edge records. There is
//! no index: every lookup scans all edges. Undirected edges are stored as two
//! mirrored records sharing one [`EdgeId`]; a self-loop is stored once.
//!
//! This is the only storage that keeps parallel edges and the only one that
//! inserts missing endpoints on [`Graph::insert_edge`].

use crate::graph::adt::{Graph, GraphError, GraphResult, Incident};
use crate::graph::edge::Edge;
use crate::graph::storage::Strategy;
use crate::graph::types::{Direction, EdgeId, VertexId};
use crate::graph::vertex::Vertex;
use tracing::{debug, trace};

/// One stored direction of an edge
#[derive(Debug)]
struct Record<T, W> {
    edge: Edge<T, W>,

    /// True for the reversed copy of an undirected edge
    mirrored: bool,
}

/// Graph stored as a list of edges
#[derive(Debug)]
pub struct EdgeListGraph<T, W> {
    vertices: Vec<Vertex<T>>,
    records: Vec<Record<T, W>>,
    directed: bool,
}

impl<T, W: Clone> EdgeListGraph<T, W> {
    pub fn new(directed: bool) -> Self {
        EdgeListGraph {
            vertices: Vec::new(),
            records: Vec::new(),
            directed,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn require(&self, vertex: &Vertex<T>) -> GraphResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(vertex.id()))
        }
    }

    /// Records seen from `vertex` in the given direction
    fn matches(&self, vertex: VertexId, direction: Direction) -> impl Fn(&Record<T, W>) -> bool {
        let direction = direction.effective(self.directed);
        move |record| match direction {
            Direction::Outgoing => record.edge.starts_from(vertex),
            Direction::Incoming => record.edge.ends_at(vertex),
        }
    }
}

impl<T, W: Clone> Default for EdgeListGraph<T, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T, W: Clone> Graph<T, W> for EdgeListGraph<T, W> {
    fn strategy(&self) -> Strategy {
        Strategy::EdgeList
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Vec<Vertex<T>> {
        self.vertices.clone()
    }

    fn edge_count(&self) -> usize {
        self.records.iter().filter(|r| !r.mirrored).count()
    }

    fn edges(&self) -> Vec<Edge<T, W>> {
        self.records
            .iter()
            .filter(|r| !r.mirrored)
            .map(|r| r.edge.clone())
            .collect()
    }

    fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.vertices.contains(vertex)
    }

    fn get_edge(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Option<Edge<T, W>>> {
        self.require(u)?;
        self.require(v)?;
        Ok(self
            .records
            .iter()
            .find(|r| r.edge.starts_from(u.id()) && r.edge.ends_at(v.id()))
            .map(|r| r.edge.clone()))
    }

    fn get_edges(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Vec<Edge<T, W>>> {
        self.require(u)?;
        self.require(v)?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.edge.starts_from(u.id()) && r.edge.ends_at(v.id()))
            .map(|r| r.edge.clone())
            .collect())
    }

    fn degree(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<usize> {
        self.require(vertex)?;
        let matches = self.matches(vertex.id(), direction);
        Ok(self.records.iter().filter(|&r| matches(r)).count())
    }

    fn incident_edges(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<Incident<'_, T, W>> {
        self.require(vertex)?;
        let matches = self.matches(vertex.id(), direction);
        Ok(Box::new(
            self.records
                .iter()
                .filter(move |&r| matches(r))
                .map(|r| r.edge.clone()),
        ))
    }

    fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool {
        if self.contains_vertex(&vertex) {
            return false;
        }
        debug!("Inserted vertex {} into edge list", vertex.id());
        self.vertices.push(vertex);
        true
    }

    fn insert_edge(&mut self, u: &Vertex<T>, v: &Vertex<T>, weight: Option<W>) -> GraphResult<Edge<T, W>> {
        // Endpoints are created on demand
        self.insert_vertex(u.clone());
        self.insert_vertex(v.clone());

        let id = EdgeId::next();

        let edge = Edge::new(id, u.clone(), v.clone(), weight);
        self.records.push(Record {
            edge: edge.clone(),
            mirrored: false,
        });
        if !self.directed && u != v {
            self.records.push(Record {
                edge: edge.reversed(),
                mirrored: true,
            });
        }

        debug!("Inserted edge {} from {} to {}", id, u.id(), v.id());
        Ok(edge)
    }

    fn remove_vertex(&mut self, vertex: &Vertex<T>) -> GraphResult<usize> {
        let position = self
            .vertices
            .iter()
            .position(|v| v == vertex)
            .ok_or(GraphError::VertexNotFound(vertex.id()))?;

        let id = vertex.id();
        let removed = self
            .records
            .iter()
            .filter(|r| !r.mirrored && r.edge.touches(id))
            .count();
        self.records.retain(|r| !r.edge.touches(id));
        self.vertices.remove(position);

        trace!("Dropped {} edges incident to {}", removed, id);
        debug!("Removed vertex {} from edge list", id);
        Ok(removed)
    }

    fn remove_edge(&mut self, edge: &Edge<T, W>) -> GraphResult<()> {
        let (u, v) = (edge.origin().id(), edge.destination().id());
        let before = self.records.len();
        self.records
            .retain(|r| !(r.edge.id() == edge.id() && r.edge.connects(u, v)));
        if self.records.len() == before {
            return Err(GraphError::EdgeNotFound(edge.id()));
        }
        debug!("Removed edge {}", edge.id());
        Ok(())
    }
}

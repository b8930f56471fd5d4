//! Adjacency matrix storage
//!
//! Vertices live in an ordered list; `matrix[i][j]` holds the edge from the
//! i-th to the j-th vertex, or nothing. A present cell records the edge
//! identity next to its weight, so an unweighted edge is still an edge.
//! Undirected edges occupy two symmetric cells.
//!
//! Mapping a vertex to its row is a linear scan, which dominates every
//! per-vertex operation. Adding or removing a vertex resizes every row.

use crate::graph::adt::{Graph, GraphError, GraphResult, Incident};
use crate::graph::edge::Edge;
use crate::graph::storage::Strategy;
use crate::graph::types::{Direction, EdgeId};
use crate::graph::vertex::Vertex;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
struct Cell<W> {
    id: EdgeId,
    weight: Option<W>,
}

/// Graph stored as a square matrix of optional cells
#[derive(Debug)]
pub struct AdjacencyMatrixGraph<T, W> {
    vertices: Vec<Vertex<T>>,
    matrix: Vec<Vec<Option<Cell<W>>>>,
    directed: bool,
}

impl<T, W: Clone> AdjacencyMatrixGraph<T, W> {
    pub fn new(directed: bool) -> Self {
        AdjacencyMatrixGraph {
            vertices: Vec::new(),
            matrix: Vec::new(),
            directed,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Side length of the matrix; always equal to the vertex count
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    fn position(&self, vertex: &Vertex<T>) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    fn index_of(&self, vertex: &Vertex<T>) -> GraphResult<usize> {
        self.position(vertex)
            .ok_or(GraphError::VertexNotFound(vertex.id()))
    }

    fn edge_at(&self, i: usize, j: usize) -> Option<Edge<T, W>> {
        self.matrix[i][j].as_ref().map(|cell| {
            Edge::new(
                cell.id,
                self.vertices[i].clone(),
                self.vertices[j].clone(),
                cell.weight.clone(),
            )
        })
    }

    fn row_count(&self, i: usize) -> usize {
        self.matrix[i].iter().filter(|c| c.is_some()).count()
    }

    fn column_count(&self, j: usize) -> usize {
        self.matrix.iter().filter(|row| row[j].is_some()).count()
    }
}

impl<T, W: Clone> Default for AdjacencyMatrixGraph<T, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T, W: Clone> Graph<T, W> for AdjacencyMatrixGraph<T, W> {
    fn strategy(&self) -> Strategy {
        Strategy::AdjacencyMatrix
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
        let directed = self.directed;
        self.matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    // Undirected cells are symmetric; count the upper triangle
                    .filter(|(j, cell)| cell.is_some() && (directed || *j >= i))
                    .count()
            })
            .sum()
    }

    fn edges(&self) -> Vec<Edge<T, W>> {
        let n = self.dimension();
        let mut edges = Vec::new();
        for i in 0..n {
            let start = if self.directed { 0 } else { i };
            for j in start..n {
                if let Some(edge) = self.edge_at(i, j) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.position(vertex).is_some()
    }

    fn get_edge(&self, u: &Vertex<T>, v: &Vertex<T>) -> GraphResult<Option<Edge<T, W>>> {
        let i = self.index_of(u)?;
        let j = self.index_of(v)?;
        Ok(self.edge_at(i, j))
    }

    fn degree(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<usize> {
        let index = self.index_of(vertex)?;
        Ok(match direction.effective(self.directed) {
            Direction::Outgoing => self.row_count(index),
            Direction::Incoming => self.column_count(index),
        })
    }

    fn incident_edges(&self, vertex: &Vertex<T>, direction: Direction) -> GraphResult<Incident<'_, T, W>> {
        let index = self.index_of(vertex)?;
        let n = self.dimension();
        let edges: Incident<'_, T, W> = match direction.effective(self.directed) {
            Direction::Outgoing => Box::new((0..n).filter_map(move |j| self.edge_at(index, j))),
            Direction::Incoming => Box::new((0..n).filter_map(move |i| self.edge_at(i, index))),
        };
        Ok(edges)
    }

    fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool {
        if self.contains_vertex(&vertex) {
            return false;
        }
        debug!("Inserted vertex {} into adjacency matrix", vertex.id());
        self.vertices.push(vertex);

        // Grow by one column and one row
        let size = self.vertices.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; size]);
        true
    }

    fn insert_edge(&mut self, u: &Vertex<T>, v: &Vertex<T>, weight: Option<W>) -> GraphResult<Edge<T, W>> {
        let i = self.position(u).ok_or(GraphError::MissingOrigin(u.id()))?;
        let j = self.position(v).ok_or(GraphError::MissingDestination(v.id()))?;

        let id = EdgeId::next();

        let cell = Cell {
            id,
            weight: weight.clone(),
        };
        if !self.directed {
            self.matrix[j][i] = Some(cell.clone());
        }
        self.matrix[i][j] = Some(cell);

        debug!("Inserted edge {} from {} to {}", id, u.id(), v.id());
        Ok(Edge::new(id, u.clone(), v.clone(), weight))
    }

    fn remove_vertex(&mut self, vertex: &Vertex<T>) -> GraphResult<usize> {
        let index = self.index_of(vertex)?;

        let removed = if self.directed {
            let looped = usize::from(self.matrix[index][index].is_some());
            self.row_count(index) + self.column_count(index) - looped
        } else {
            self.row_count(index)
        };

        self.vertices.remove(index);
        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }

        trace!("Dropped {} edges incident to {}", removed, vertex.id());
        debug!("Removed vertex {} from adjacency matrix", vertex.id());
        Ok(removed)
    }

    fn remove_edge(&mut self, edge: &Edge<T, W>) -> GraphResult<()> {
        let not_found = GraphError::EdgeNotFound(edge.id());
        let i = self.position(edge.origin()).ok_or_else(|| not_found.clone())?;
        let j = self.position(edge.destination()).ok_or_else(|| not_found.clone())?;

        match &self.matrix[i][j] {
            Some(cell) if cell.id == edge.id() => {}
            _ => return Err(not_found),
        }

        self.matrix[i][j] = None;
        if !self.directed {
            self.matrix[j][i] = None;
        }
        debug!("Removed edge {}", edge.id());
        Ok(())
    }
}
